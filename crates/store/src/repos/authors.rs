//! Author repository

use crate::error::StoreResult;
use crate::store::{find_by_id, find_by_id_mut, remove_by_id, Record, Store};
use biblio_core::{Author, AuthorId};

/// Fields for a new author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct AuthorUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
}

/// Creates an author with a counter-assigned id
pub fn create_author(store: &Store, new: NewAuthor) -> StoreResult<Author> {
    let mut authors: Vec<Author> = store.load();
    let id = AuthorId::new(store.next_id(Author::COLLECTION)?);
    let author = Author::new(id, new.first_name, new.last_name, new.nationality);
    authors.push(author.clone());
    store.save(&authors)?;
    log::info!("Created author {} ({})", author.id, author.full_name());
    Ok(author)
}

/// Lists all authors
pub fn list_authors(store: &Store) -> Vec<Author> {
    store.load()
}

/// Looks up one author by id
pub fn get_author(store: &Store, id: AuthorId) -> Option<Author> {
    let authors: Vec<Author> = store.load();
    find_by_id(&authors, id.get()).cloned()
}

/// Applies a partial update; returns `Ok(false)` if the id is absent
pub fn update_author(store: &Store, id: AuthorId, update: AuthorUpdate) -> StoreResult<bool> {
    let mut authors: Vec<Author> = store.load();
    let Some(author) = find_by_id_mut(&mut authors, id.get()) else {
        return Ok(false);
    };

    if let Some(first_name) = update.first_name {
        author.first_name = first_name;
    }
    if let Some(last_name) = update.last_name {
        author.last_name = last_name;
    }
    if let Some(nationality) = update.nationality {
        author.nationality = nationality;
    }

    store.save(&authors)?;
    Ok(true)
}

/// Hard-deletes an author; returns `Ok(false)` if the id is absent
///
/// No cascade: books referencing the author keep their dangling
/// `author_id`.
pub fn remove_author(store: &Store, id: AuthorId) -> StoreResult<bool> {
    let mut authors: Vec<Author> = store.load();
    if !remove_by_id(&mut authors, id.get()) {
        return Ok(false);
    }
    store.save(&authors)?;
    log::info!("Removed author {}", id);
    Ok(true)
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

    fn new_author(first: &str, last: &str) -> NewAuthor {
        NewAuthor {
            first_name: first.to_string(),
            last_name: last.to_string(),
            nationality: "Colombian".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (_temp_dir, store) = setup();
        let first = create_author(&store, new_author("Gabriel", "Garcia Marquez"))
            .expect("Should create");
        let second =
            create_author(&store, new_author("Isabel", "Allende")).expect("Should create");

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
        assert_eq!(list_authors(&store).len(), 2);
    }

    #[test]
    fn test_get_author() {
        let (_temp_dir, store) = setup();
        let created =
            create_author(&store, new_author("Jorge", "Luis Borges")).expect("Should create");

        let found = get_author(&store, created.id).expect("Should find");
        assert_eq!(found, created);
        assert!(get_author(&store, AuthorId::new(99)).is_none());
    }

    #[test]
    fn test_update_partial_fields() {
        let (_temp_dir, store) = setup();
        let created =
            create_author(&store, new_author("Gabriel", "Garcia Marquez")).expect("Should create");

        let updated = update_author(
            &store,
            created.id,
            AuthorUpdate {
                nationality: Some("Mexican".to_string()),
                ..Default::default()
            },
        )
        .expect("Should update");
        assert!(updated);

        let found = get_author(&store, created.id).expect("Should find");
        assert_eq!(found.nationality, "Mexican");
        assert_eq!(found.first_name, "Gabriel");
    }

    #[test]
    fn test_update_unknown_id() {
        let (_temp_dir, store) = setup();
        let updated = update_author(&store, AuthorId::new(5), AuthorUpdate::default())
            .expect("Should not fail");
        assert!(!updated);
    }

    #[test]
    fn test_remove_author() {
        let (_temp_dir, store) = setup();
        let created =
            create_author(&store, new_author("Isabel", "Allende")).expect("Should create");

        assert!(remove_author(&store, created.id).expect("Should remove"));
        assert!(list_authors(&store).is_empty());
        assert!(!remove_author(&store, created.id).expect("Should not fail"));
    }
}
