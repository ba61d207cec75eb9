//! Core domain types for the biblio library manager
//!
//! This crate defines the entities (authors, categories, books, members,
//! loans, fines), their typed identifiers, the calendar date type used in
//! the persisted format, and the self-validation trait. It performs no I/O;
//! storage and workflow logic live in the crates layered on top.

pub mod types;

pub use types::{
    normalize_digits, round_to_cents, Author, AuthorId, Book, BookId, Category, CategoryId, Date,
    Fine, FineId, FineStatus, Loan, LoanId, LoanStatus, Member, MemberId, Validator, DATE_FORMAT,
    MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR,
};
