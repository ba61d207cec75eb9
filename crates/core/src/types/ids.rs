//! Typed record identifiers
//!
//! Every collection assigns positive integer ids from its own counter. Each
//! entity gets its own newtype so a loan id can never be passed where a book
//! id is expected. Serialization is transparent: the persisted form is the
//! bare integer.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a counter-assigned id value
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw id value
            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for an author
    AuthorId
);
entity_id!(
    /// Unique identifier for a category
    CategoryId
);
entity_id!(
    /// Unique identifier for a book
    BookId
);
entity_id!(
    /// Unique identifier for a member
    MemberId
);
entity_id!(
    /// Unique identifier for a loan
    LoanId
);
entity_id!(
    /// Unique identifier for a fine
    FineId
);
