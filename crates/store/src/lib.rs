//! Flat-file record store and entity repositories
//!
//! Persistence layer for the biblio workspace: a generic JSON-document
//! store with per-collection id counters, plus CRUD repositories for the
//! catalog entities (authors, categories, books, members). The circulation
//! crate drives the loan and fine collections directly through the store
//! primitives.

mod counter;
mod error;
mod records;
mod store;

pub mod repos;

pub use error::{StoreError, StoreResult};
pub use store::{find_by_id, find_by_id_mut, remove_by_id, Record, Store};
