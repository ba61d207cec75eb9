//! Per-collection id counters
//!
//! Each named counter lives in its own JSON document
//! (`counter_<name>.json`). Counters are monotonic and independent of their
//! collections: a reserved id stays consumed even if the record is never
//! appended, so id gaps are possible and accepted.

use crate::error::StoreResult;
use crate::store::Store;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize)]
struct CounterFile {
    value: u64,
}

impl Store {
    fn counter_path(&self, name: &str) -> std::path::PathBuf {
        self.file_path(&format!("counter_{}", name))
    }

    fn load_counter(&self, name: &str) -> u64 {
        let path = self.counter_path(name);
        if !path.exists() {
            return 1;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::error!("Failed to read counter {}: {}", path.display(), e);
                return 1;
            }
        };

        match serde_json::from_str::<CounterFile>(&contents) {
            Ok(counter) => counter.value,
            Err(e) => {
                log::error!("Failed to parse counter {}: {}", path.display(), e);
                1
            }
        }
    }

    /// Reserves and returns the next id for the named counter
    ///
    /// Reads the current value (1 if the counter was never initialized or
    /// its file is unreadable), persists `value + 1`, and returns the value
    /// read. Counters are never reset or decremented.
    pub fn next_id(&self, name: &str) -> StoreResult<u64> {
        let current = self.load_counter(name);
        let json = serde_json::to_string(&CounterFile { value: current + 1 })?;
        self.write_atomic(&self.counter_path(name), &json)?;
        Ok(current)
    }
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
    fn test_counter_starts_at_one() {
        let (_temp_dir, store) = setup();
        assert_eq!(store.next_id("books").expect("Should assign"), 1);
    }

    #[test]
    fn test_counter_strictly_increases() {
        let (_temp_dir, store) = setup();
        let first = store.next_id("loans").expect("Should assign");
        let second = store.next_id("loans").expect("Should assign");
        let third = store.next_id("loans").expect("Should assign");
        assert_eq!((first, second, third), (1, 2, 3));
    }

    #[test]
    fn test_counters_are_independent() {
        let (_temp_dir, store) = setup();
        store.next_id("books").expect("Should assign");
        store.next_id("books").expect("Should assign");
        assert_eq!(store.next_id("members").expect("Should assign"), 1);
        assert_eq!(store.next_id("books").expect("Should assign"), 3);
    }

    #[test]
    fn test_unreadable_counter_restarts_at_one() {
        let (_temp_dir, store) = setup();
        store.next_id("fines").expect("Should assign");
        fs::write(store.counter_path("fines"), "garbage").expect("Should write");

        assert_eq!(store.next_id("fines").expect("Should assign"), 1);
    }

    #[test]
    fn test_counter_survives_unappended_records() {
        // Reserving ids without ever appending records still advances the
        // counter (gap tolerance).
        let (_temp_dir, store) = setup();
        for expected in 1..=5 {
            assert_eq!(store.next_id("authors").expect("Should assign"), expected);
        }
    }
}
