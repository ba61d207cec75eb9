//! JSON-file record store
//!
//! Each collection is one pretty-printed JSON array on disk, loaded and
//! written whole. There is no partial update and no indexing; operations
//! load a collection, mutate it in memory, and save it back. Writes go
//! through a temp file and atomic rename so a single file is never left
//! truncated, but nothing spans files.

use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Ties a record type to its collection
///
/// `COLLECTION` names both the JSON document (`<COLLECTION>.json`) and the
/// counter namespace used for id assignment.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection name, also the counter namespace
    const COLLECTION: &'static str;

    /// The record's id within its collection
    fn id(&self) -> u64;
}

/// Handle to the data directory holding all collection and counter files
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Opens a store rooted at `data_dir`, creating the directory (and any
    /// missing parents) on first use
    pub fn new(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|e| StoreError::DirectoryCreation {
                path: data_dir.clone(),
                source: e,
            })?;
            log::info!("Created data directory: {}", data_dir.display());
        }
        Ok(Self { data_dir })
    }

    /// Returns the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub(crate) fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }

    /// Loads a full collection
    ///
    /// A missing file is an empty collection. A read or parse failure is
    /// logged and likewise yields an empty collection; it never surfaces to
    /// the caller.
    pub fn load<T: Record>(&self) -> Vec<T> {
        let path = self.file_path(T::COLLECTION);
        if !path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::error!("Failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => {
                log::debug!(
                    "Loaded {} from {}",
                    T::COLLECTION,
                    path.display()
                );
                records
            }
            Err(e) => {
                log::error!("Failed to parse {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Overwrites a collection with the given records
    ///
    /// The whole file is replaced atomically (temp file plus rename). On
    /// failure the prior file contents are untouched; the caller's mutated
    /// in-memory records are simply discarded.
    pub fn save<T: Record>(&self, records: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        let path = self.file_path(T::COLLECTION);
        self.write_atomic(&path, &json)?;
        log::debug!("Saved {} {} record(s)", records.len(), T::COLLECTION);
        Ok(())
    }

    pub(crate) fn write_atomic(&self, path: &Path, contents: &str) -> StoreResult<()> {
        let mut temp_file =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| StoreError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;

        temp_file
            .write_all(contents.as_bytes())
            .and_then(|_| temp_file.flush())
            .map_err(|e| StoreError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;

        temp_file.persist(path).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        Ok(())
    }
}

/// Finds a record by id in a collection snapshot
pub fn find_by_id<T: Record>(records: &[T], id: u64) -> Option<&T> {
    records.iter().find(|r| r.id() == id)
}

/// Finds a record by id for in-place mutation
///
/// The caller is responsible for persisting the collection afterward.
pub fn find_by_id_mut<T: Record>(records: &mut [T], id: u64) -> Option<&mut T> {
    records.iter_mut().find(|r| r.id() == id)
}

/// Removes a record by id from a collection snapshot
///
/// Returns true if a record was removed. The caller is responsible for
/// persisting the collection afterward.
pub fn remove_by_id<T: Record>(records: &mut Vec<T>, id: u64) -> bool {
    match records.iter().position(|r| r.id() == id) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}
