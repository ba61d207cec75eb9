//! Category domain model

use crate::types::{CategoryId, Validator};
use serde::{Deserialize, Serialize};

/// A book category, referenced by books through `category_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Creates a category with a store-assigned id
    pub fn new(id: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Validator for Category {
    fn validate(&self) -> Result<(), Vec<String>> {
        if self.name.trim().is_empty() {
            Err(vec!["Name cannot be empty".to_string()])
        } else {
            Ok(())
        }
    }
}
