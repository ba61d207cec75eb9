//! Category repository

use crate::error::StoreResult;
use crate::store::{find_by_id, find_by_id_mut, remove_by_id, Record, Store};
use biblio_core::{Category, CategoryId};

/// Fields for a new category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Creates a category with a counter-assigned id
pub fn create_category(store: &Store, new: NewCategory) -> StoreResult<Category> {
    let mut categories: Vec<Category> = store.load();
    let id = CategoryId::new(store.next_id(Category::COLLECTION)?);
    let category = Category::new(id, new.name, new.description);
    categories.push(category.clone());
    store.save(&categories)?;
    log::info!("Created category {} ({})", category.id, category.name);
    Ok(category)
}

/// Lists all categories
pub fn list_categories(store: &Store) -> Vec<Category> {
    store.load()
}

/// Looks up one category by id
pub fn get_category(store: &Store, id: CategoryId) -> Option<Category> {
    let categories: Vec<Category> = store.load();
    find_by_id(&categories, id.get()).cloned()
}

/// Applies a partial update; returns `Ok(false)` if the id is absent
pub fn update_category(
    store: &Store,
    id: CategoryId,
    update: CategoryUpdate,
) -> StoreResult<bool> {
    let mut categories: Vec<Category> = store.load();
    let Some(category) = find_by_id_mut(&mut categories, id.get()) else {
        return Ok(false);
    };

    if let Some(name) = update.name {
        category.name = name;
    }
    if let Some(description) = update.description {
        category.description = description;
    }

    store.save(&categories)?;
    Ok(true)
}

/// Hard-deletes a category; returns `Ok(false)` if the id is absent
pub fn remove_category(store: &Store, id: CategoryId) -> StoreResult<bool> {
    let mut categories: Vec<Category> = store.load();
    if !remove_by_id(&mut categories, id.get()) {
        return Ok(false);
    }
    store.save(&categories)?;
    log::info!("Removed category {}", id);
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

    #[test]
    fn test_create_and_list() {
        let (_temp_dir, store) = setup();
        let category = create_category(
            &store,
            NewCategory {
                name: "Fiction".to_string(),
                description: "Novels and short stories".to_string(),
            },
        )
        .expect("Should create");

        assert_eq!(category.id.get(), 1);
        assert_eq!(list_categories(&store).len(), 1);
    }

    #[test]
    fn test_update_description_only() {
        let (_temp_dir, store) = setup();
        let category = create_category(
            &store,
            NewCategory {
                name: "Science".to_string(),
                description: "Technical works".to_string(),
            },
        )
        .expect("Should create");

        let updated = update_category(
            &store,
            category.id,
            CategoryUpdate {
                description: Some("Scientific and technical works".to_string()),
                ..Default::default()
            },
        )
        .expect("Should update");
        assert!(updated);

        let found = get_category(&store, category.id).expect("Should find");
        assert_eq!(found.name, "Science");
        assert_eq!(found.description, "Scientific and technical works");
    }

    #[test]
    fn test_remove_category() {
        let (_temp_dir, store) = setup();
        let category = create_category(
            &store,
            NewCategory {
                name: "History".to_string(),
                description: "History and biographies".to_string(),
            },
        )
        .expect("Should create");

        assert!(remove_category(&store, category.id).expect("Should remove"));
        assert!(get_category(&store, category.id).is_none());
        assert!(!remove_category(&store, CategoryId::new(42)).expect("Should not fail"));
    }
}
