//! Book repository

use crate::error::StoreResult;
use crate::store::{find_by_id, find_by_id_mut, Record, Store};
use biblio_core::{AuthorId, Book, BookId, CategoryId};

/// Fields for a new book; copies all start available
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub publication_year: i32,
    pub total_copies: u32,
}

/// Partial update; `None` fields keep their current value
///
/// Changing `total_copies` shifts `available_copies` by the same delta,
/// clamped so the inventory invariant holds.
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub author_id: Option<AuthorId>,
    pub category_id: Option<CategoryId>,
    pub publication_year: Option<i32>,
    pub total_copies: Option<u32>,
}

/// Creates a book with a counter-assigned id
pub fn create_book(store: &Store, new: NewBook) -> StoreResult<Book> {
    let mut books: Vec<Book> = store.load();
    let id = BookId::new(store.next_id(Book::COLLECTION)?);
    let book = Book::new(
        id,
        new.title,
        new.isbn,
        new.author_id,
        new.category_id,
        new.publication_year,
        new.total_copies,
    );
    books.push(book.clone());
    store.save(&books)?;
    log::info!("Created book {} ({})", book.id, book.title);
    Ok(book)
}

/// Lists all books, active and deactivated
pub fn list_books(store: &Store) -> Vec<Book> {
    store.load()
}

/// Looks up one book by id
pub fn get_book(store: &Store, id: BookId) -> Option<Book> {
    let books: Vec<Book> = store.load();
    find_by_id(&books, id.get()).cloned()
}

/// Applies a partial update; returns `Ok(false)` if the id is absent
pub fn update_book(store: &Store, id: BookId, update: BookUpdate) -> StoreResult<bool> {
    let mut books: Vec<Book> = store.load();
    let Some(book) = find_by_id_mut(&mut books, id.get()) else {
        return Ok(false);
    };

    if let Some(title) = update.title {
        book.title = title;
    }
    if let Some(isbn) = update.isbn {
        book.isbn = isbn;
    }
    if let Some(author_id) = update.author_id {
        book.author_id = author_id;
    }
    if let Some(category_id) = update.category_id {
        book.category_id = category_id;
    }
    if let Some(publication_year) = update.publication_year {
        book.publication_year = publication_year;
    }
    if let Some(total_copies) = update.total_copies {
        book.set_total_copies(total_copies);
    }

    store.save(&books)?;
    Ok(true)
}

/// Soft-deletes a book; returns `Ok(false)` if the id is absent
///
/// The record stays in the collection so historical loans keep a valid
/// reference.
pub fn deactivate_book(store: &Store, id: BookId) -> StoreResult<bool> {
    let mut books: Vec<Book> = store.load();
    let Some(book) = find_by_id_mut(&mut books, id.get()) else {
        return Ok(false);
    };
    book.deactivate();
    store.save(&books)?;
    log::info!("Deactivated book {}", id);
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

    fn new_book(title: &str, total_copies: u32) -> NewBook {
        NewBook {
            title: title.to_string(),
            isbn: "9780307474728".to_string(),
            author_id: AuthorId::new(1),
            category_id: CategoryId::new(1),
            publication_year: 1967,
            total_copies,
        }
    }

    #[test]
    fn test_create_defaults() {
        let (_temp_dir, store) = setup();
        let book =
            create_book(&store, new_book("One Hundred Years of Solitude", 5)).expect("Should create");

        assert_eq!(book.id.get(), 1);
        assert_eq!(book.available_copies, 5);
        assert!(book.active);
    }

    #[test]
    fn test_update_raising_total_raises_available() {
        let (_temp_dir, store) = setup();
        let book = create_book(&store, new_book("Ficciones", 4)).expect("Should create");

        let updated = update_book(
            &store,
            book.id,
            BookUpdate {
                total_copies: Some(6),
                ..Default::default()
            },
        )
        .expect("Should update");
        assert!(updated);

        let found = get_book(&store, book.id).expect("Should find");
        assert_eq!(found.total_copies, 6);
        assert_eq!(found.available_copies, 6);
    }

    #[test]
    fn test_update_lowering_total_clamps_available() {
        let (_temp_dir, store) = setup();
        let book = create_book(&store, new_book("Ficciones", 5)).expect("Should create");

        // Simulate four copies out on loan
        let mut books = list_books(&store);
        books[0].available_copies = 1;
        store.save(&books).expect("Should save");

        update_book(
            &store,
            book.id,
            BookUpdate {
                total_copies: Some(2),
                ..Default::default()
            },
        )
        .expect("Should update");

        let found = get_book(&store, book.id).expect("Should find");
        assert_eq!(found.total_copies, 2);
        assert_eq!(found.available_copies, 0);
    }

    #[test]
    fn test_deactivate_keeps_record() {
        let (_temp_dir, store) = setup();
        let book = create_book(&store, new_book("The House of the Spirits", 3))
            .expect("Should create");

        assert!(deactivate_book(&store, book.id).expect("Should deactivate"));

        let found = get_book(&store, book.id).expect("Record should remain");
        assert!(!found.active);
        assert_eq!(list_books(&store).len(), 1);
    }

    #[test]
    fn test_unknown_id() {
        let (_temp_dir, store) = setup();
        assert!(!update_book(&store, BookId::new(9), BookUpdate::default())
            .expect("Should not fail"));
        assert!(!deactivate_book(&store, BookId::new(9)).expect("Should not fail"));
    }
}
