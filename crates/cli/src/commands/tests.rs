use super::*;
use biblio_config::CirculationConfig;
use clap::{Arg, Command};
use tempfile::TempDir;

fn temp_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::new(temp_dir.path().join("data")).expect("Failed to open store");
    (temp_dir, store)
}

fn author_add_matches(first: &str, last: &str, nationality: &str) -> ArgMatches {
    Command::new("test")
        .arg(Arg::new("first-name").long("first-name"))
        .arg(Arg::new("last-name").long("last-name"))
        .arg(Arg::new("nationality").long("nationality"))
        .get_matches_from(vec![
            "test",
            "--first-name",
            first,
            "--last-name",
            last,
            "--nationality",
            nationality,
        ])
}

fn id_matches(id: &str) -> ArgMatches {
    Command::new("test")
        .arg(Arg::new("id"))
        .get_matches_from(vec!["test", id])
}

#[test]
fn test_add_author_persists_record() {
    let (_temp_dir, store) = temp_store();
    let matches = author_add_matches("Gabriel", "Garcia Marquez", "Colombian");

    add_author(&store, &matches).expect("Should add author");

    let all = authors::list_authors(&store);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].full_name(), "Gabriel Garcia Marquez");
}

#[test]
fn test_add_author_rejects_short_name() {
    let (_temp_dir, store) = temp_store();
    let matches = author_add_matches("G", "Garcia Marquez", "Colombian");

    let result = add_author(&store, &matches);
    assert!(result.is_err());
    assert!(authors::list_authors(&store).is_empty());
}

#[test]
fn test_show_author_unknown_id_errors() {
    let (_temp_dir, store) = temp_store();
    let result = show_author(&store, &id_matches("7"));
    assert!(result.is_err());
}

#[test]
fn test_show_author_rejects_non_numeric_id() {
    let (_temp_dir, store) = temp_store();
    let result = show_author(&store, &id_matches("seven"));
    assert!(result.is_err());
}

#[test]
fn test_checkout_via_matches() {
    let (_temp_dir, store) = temp_store();
    let member = members::create_member(
        &store,
        members::NewMember {
            first_name: "Juan".to_string(),
            last_name: "Perez".to_string(),
            email: "juan@example.com".to_string(),
            phone: "12345678".to_string(),
            address: "123 Main Street".to_string(),
        },
    )
    .expect("Should create member");
    let book = books::create_book(
        &store,
        books::NewBook {
            title: "Ficciones".to_string(),
            isbn: "9788432248665".to_string(),
            author_id: 1.into(),
            category_id: 1.into(),
            publication_year: 1944,
            total_copies: 4,
        },
    )
    .expect("Should create book");

    let manager = CirculationManager::new(store, CirculationConfig::default());
    let matches = Command::new("test")
        .arg(Arg::new("member").long("member"))
        .arg(Arg::new("book").long("book"))
        .arg(Arg::new("date").long("date"))
        .get_matches_from(vec![
            "test",
            "--member",
            &member.id.to_string(),
            "--book",
            &book.id.to_string(),
            "--date",
            "01/03/2026",
        ]);

    checkout(&manager, &matches).expect("Should check out");

    let loans = manager.loans();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].loan_date.to_string(), "01/03/2026");
    assert_eq!(loans[0].expected_return_date.to_string(), "15/03/2026");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long book title", 10), "a very lon...");
}

#[test]
fn test_check_maps_message() {
    let err = check::<u64>(Err("bad value".to_string())).expect_err("Should fail");
    assert_eq!(err.to_string(), "bad value");
}
