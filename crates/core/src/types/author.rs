//! Author domain model

use crate::types::{AuthorId, Validator};
use serde::{Deserialize, Serialize};

/// A book author, referenced by books through `author_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
}

impl Author {
    /// Creates an author with a store-assigned id
    pub fn new(
        id: AuthorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            nationality: nationality.into(),
        }
    }

    /// Returns "first last" for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Validator for Author {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.first_name.trim().is_empty() {
            errors.push("First name cannot be empty".to_string());
        }

        if self.last_name.trim().is_empty() {
            errors.push("Last name cannot be empty".to_string());
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

    #[test]
    fn test_author_new() {
        let author = Author::new(AuthorId::new(1), "Gabriel", "Garcia Marquez", "Colombian");
        assert_eq!(author.id.get(), 1);
        assert_eq!(author.full_name(), "Gabriel Garcia Marquez");
    }

    #[test]
    fn test_author_validation() {
        let author = Author::new(AuthorId::new(1), "Isabel", "Allende", "Chilean");
        assert!(author.is_valid());

        let mut blank = author.clone();
        blank.first_name = "   ".to_string();
        assert!(!blank.is_valid());
    }
}
