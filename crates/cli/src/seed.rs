//! Demonstration data set
//!
//! Populates a small catalog for manual exploration: three authors, three
//! categories, three books and two members. Refuses to run when any of
//! those collections already has records, so it never mixes generated
//! rows into real data.

use anyhow::{bail, Context, Result};
use biblio_core::Validator;
use biblio_store::repos::{authors, books, categories, members};
use biblio_store::Store;
use console::style;

pub fn run(store: &Store) -> Result<()> {
    if !authors::list_authors(store).is_empty()
        || !categories::list_categories(store).is_empty()
        || !books::list_books(store).is_empty()
        || !members::list_members(store).is_empty()
    {
        bail!("Refusing to seed: collections are not empty");
    }

    println!("Seeding demonstration data...");

    let author_rows = [
        ("Gabriel", "Garcia Marquez", "Colombian"),
        ("Isabel", "Allende", "Chilean"),
        ("Jorge Luis", "Borges", "Argentine"),
    ];
    let mut author_ids = Vec::new();
    for (first, last, nationality) in author_rows {
        let author = authors::create_author(
            store,
            authors::NewAuthor {
                first_name: first.to_string(),
                last_name: last.to_string(),
                nationality: nationality.to_string(),
            },
        )
        .context("Failed to seed author")?;
        ensure_valid(&author)?;
        author_ids.push(author.id);
    }
    println!("  {} author(s) created", author_ids.len());

    let category_rows = [
        ("Fiction", "Novels and short stories"),
        ("Science", "Scientific and technical works"),
        ("History", "History and biographies"),
    ];
    let mut category_ids = Vec::new();
    for (name, description) in category_rows {
        let category = categories::create_category(
            store,
            categories::NewCategory {
                name: name.to_string(),
                description: description.to_string(),
            },
        )
        .context("Failed to seed category")?;
        ensure_valid(&category)?;
        category_ids.push(category.id);
    }
    println!("  {} categorie(s) created", category_ids.len());

    let book_rows = [
        ("One Hundred Years of Solitude", "9780307474728", 0, 1967, 5),
        ("The House of the Spirits", "9788401242267", 1, 1982, 3),
        ("Ficciones", "9788432248665", 2, 1944, 4),
    ];
    for (title, isbn, author_idx, year, copies) in book_rows {
        let book = books::create_book(
            store,
            books::NewBook {
                title: title.to_string(),
                isbn: isbn.to_string(),
                author_id: author_ids[author_idx],
                category_id: category_ids[0],
                publication_year: year,
                total_copies: copies,
            },
        )
        .context("Failed to seed book")?;
        ensure_valid(&book)?;
    }
    println!("  {} book(s) created", book_rows.len());

    let member_rows = [
        (
            "Juan",
            "Perez",
            "juan.perez@email.com",
            "12345678",
            "123 Main Street",
        ),
        (
            "Maria",
            "Gonzalez",
            "maria.gonzalez@email.com",
            "87654321",
            "456 Central Avenue",
        ),
    ];
    for (first, last, email, phone, address) in member_rows {
        let member = members::create_member(
            store,
            members::NewMember {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
            },
        )
        .context("Failed to seed member")?;
        ensure_valid(&member)?;
    }
    println!("  {} member(s) created", member_rows.len());

    println!("{} Seed complete", style("✓").green().bold());
    Ok(())
}

fn ensure_valid(entity: &impl Validator) -> Result<()> {
    if let Err(errors) = entity.validate() {
        bail!("Seed record failed validation: {}", errors.join("; "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Store) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Store::new(temp_dir.path().join("data")).expect("Failed to open store");
        (temp_dir, store)
    }

    #[test]
    fn test_seed_populates_catalog() {
        let (_temp_dir, store) = setup();
        run(&store).expect("Should seed");

        assert_eq!(authors::list_authors(&store).len(), 3);
        assert_eq!(categories::list_categories(&store).len(), 3);
        assert_eq!(books::list_books(&store).len(), 3);
        assert_eq!(members::list_members(&store).len(), 2);
    }

    #[test]
    fn test_seed_refuses_non_empty_store() {
        let (_temp_dir, store) = setup();
        authors::create_author(
            &store,
            authors::NewAuthor {
                first_name: "Existing".to_string(),
                last_name: "Author".to_string(),
                nationality: "Unknown".to_string(),
            },
        )
        .expect("Should create author");

        let result = run(&store);
        assert!(result.is_err());
        // Nothing else was written
        assert!(categories::list_categories(&store).is_empty());
        assert!(books::list_books(&store).is_empty());
    }

    #[test]
    fn test_seeded_books_reference_seeded_authors() {
        let (_temp_dir, store) = setup();
        run(&store).expect("Should seed");

        let author_ids: Vec<_> = authors::list_authors(&store).iter().map(|a| a.id).collect();
        for book in books::list_books(&store) {
            assert!(author_ids.contains(&book.author_id));
            assert_eq!(book.available_copies, book.total_copies);
        }
    }
}
