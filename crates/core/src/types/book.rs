//! Book domain model

use crate::types::{AuthorId, BookId, CategoryId, Validator};
use serde::{Deserialize, Serialize};

/// Earliest accepted publication year
pub const MIN_PUBLICATION_YEAR: i32 = 1500;

/// Latest accepted publication year
pub const MAX_PUBLICATION_YEAR: i32 = 2026;

/// A catalogued book with its copy inventory
///
/// `available_copies` never exceeds `total_copies` and never goes below
/// zero. Books are soft-deleted: `active` is flipped off and the record
/// stays in its collection so historical loans keep a valid reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub isbn: String,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub publication_year: i32,
    pub total_copies: u32,
    pub available_copies: u32,
    pub active: bool,
}

impl Book {
    /// Creates a book with a store-assigned id; all copies start available
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        isbn: impl Into<String>,
        author_id: AuthorId,
        category_id: CategoryId,
        publication_year: i32,
        total_copies: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            isbn: isbn.into(),
            author_id,
            category_id,
            publication_year,
            total_copies,
            available_copies: total_copies,
            active: true,
        }
    }

    /// Returns true if at least one copy can be lent out
    pub fn has_available_copies(&self) -> bool {
        self.available_copies > 0
    }

    /// Takes one copy out of inventory; returns false if none are left
    pub fn take_copy(&mut self) -> bool {
        if self.available_copies == 0 {
            return false;
        }
        self.available_copies -= 1;
        true
    }

    /// Returns one copy to inventory, clamped at `total_copies`
    pub fn restore_copy(&mut self) {
        if self.available_copies < self.total_copies {
            self.available_copies += 1;
        }
    }

    /// Soft-deletes the book
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Changes `total_copies`, shifting `available_copies` by the same delta
    ///
    /// The result is clamped into `[0, total_copies]` so the inventory
    /// invariant holds even when the total shrinks below the number of
    /// copies currently out on loan.
    pub fn set_total_copies(&mut self, total: u32) {
        let delta = total as i64 - self.total_copies as i64;
        let available = (self.available_copies as i64 + delta).clamp(0, total as i64);
        self.total_copies = total;
        self.available_copies = available as u32;
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if !self.isbn.chars().all(|c| c.is_ascii_digit())
            || !(self.isbn.len() == 10 || self.isbn.len() == 13)
        {
            errors.push("ISBN must be 10 or 13 digits".to_string());
        }

        if !(MIN_PUBLICATION_YEAR..=MAX_PUBLICATION_YEAR).contains(&self.publication_year) {
            errors.push(format!(
                "Publication year must be between {} and {}",
                MIN_PUBLICATION_YEAR, MAX_PUBLICATION_YEAR
            ));
        }

        if self.available_copies > self.total_copies {
            errors.push("Available copies cannot exceed total copies".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_book() -> Book {
        Book::new(
            BookId::new(1),
            "One Hundred Years of Solitude",
            "9780307474728",
            AuthorId::new(1),
            CategoryId::new(1),
            1967,
            5,
        )
    }

    #[test]
    fn test_book_new_defaults() {
        let book = test_book();
        assert_eq!(book.available_copies, 5);
        assert!(book.active);
        assert!(book.is_valid());
    }

    #[test]
    fn test_take_and_restore_copy() {
        let mut book = test_book();
        assert!(book.take_copy());
        assert_eq!(book.available_copies, 4);

        book.restore_copy();
        assert_eq!(book.available_copies, 5);

        // Restoring past the total is a no-op
        book.restore_copy();
        assert_eq!(book.available_copies, 5);
    }

    #[test]
    fn test_take_copy_exhausted() {
        let mut book = test_book();
        book.available_copies = 0;
        assert!(!book.take_copy());
        assert_eq!(book.available_copies, 0);
    }

    #[test]
    fn test_set_total_copies_raises_available() {
        let mut book = test_book();
        book.available_copies = 3; // two copies out on loan
        book.set_total_copies(8);
        assert_eq!(book.total_copies, 8);
        assert_eq!(book.available_copies, 6);
    }

    #[test]
    fn test_set_total_copies_clamps_available() {
        let mut book = test_book();
        book.available_copies = 1; // four copies out on loan
        book.set_total_copies(2);
        assert_eq!(book.total_copies, 2);
        assert_eq!(book.available_copies, 0);
    }

    #[test]
    fn test_deactivate() {
        let mut book = test_book();
        book.deactivate();
        assert!(!book.active);
    }

    #[test]
    fn test_validation_bad_isbn() {
        let mut book = test_book();
        book.isbn = "12345".to_string();
        assert!(!book.is_valid());

        book.isbn = "97803074747X8".to_string();
        assert!(!book.is_valid());
    }

    #[test]
    fn test_validation_year_out_of_range() {
        let mut book = test_book();
        book.publication_year = 1499;
        assert!(!book.is_valid());
        book.publication_year = 2027;
        assert!(!book.is_valid());
    }

    #[test]
    fn test_validation_inventory_invariant() {
        let mut book = test_book();
        book.available_copies = 6;
        assert!(!book.is_valid());
    }
}
