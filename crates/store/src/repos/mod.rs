//! Entity repositories
//!
//! One module of free functions per catalog entity, all operating on a
//! shared `&Store`. Each create assigns an id from the entity's counter,
//! appends, and saves the whole collection. Updates only overwrite fields
//! the caller explicitly supplied.
//!
//! Deletion capabilities differ on purpose: books and members are
//! soft-deleted (`deactivate_*`) because loans and fines reference them
//! historically; authors and categories are hard-deleted (`remove_*`) with
//! no cascade.

pub mod authors;
pub mod books;
pub mod categories;
pub mod members;
