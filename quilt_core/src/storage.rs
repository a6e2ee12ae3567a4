//! # Storage
//!
//! Minimal key-value persistence for the materials list. Values are opaque
//! strings (JSON documents in practice), the same model as a mobile app's
//! async storage.
//!
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions
//! - [`JsonFileStore`]: the whole map in one JSON file, saved atomically
//!
//! ## Atomic Saves
//!
//! Every write serializes the full map to a `.tmp` sibling, syncs it to disk
//! and renames it over the store file, so an interrupted save leaves the
//! previous contents intact.
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::storage::{load_materials_list, save_materials_list, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//!
//! // Nothing saved yet: the demo list is returned
//! let mut list = load_materials_list(&store).unwrap();
//! assert_eq!(list.len(), 3);
//!
//! list.clear();
//! save_materials_list(&mut store, &list).unwrap();
//! assert!(load_materials_list(&store).unwrap().is_empty());
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::materials_list::{MaterialsList, SCHEMA_VERSION};

/// Key the materials list is stored under
pub const MATERIALS_LIST_KEY: &str = "materialsList";

/// String key-value persistence.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> CalcResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> CalcResult<()>;
    /// Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> CalcResult<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalcResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> CalcResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store file, starting empty if it does not exist yet.
    ///
    /// # Errors
    ///
    /// * `CalcError::FileError` - the file exists but cannot be read
    /// * `CalcError::SerializationError` - the file is not a JSON string map
    pub fn open(path: impl Into<PathBuf>) -> CalcResult<Self> {
        let path = path.into();
        let items = if path.exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
            serde_json::from_str(&contents)
                .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?
        } else {
            debug!(path = %path.display(), "store file not found, starting empty");
            BTreeMap::new()
        };
        Ok(JsonFileStore { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `items` to disk, then adopt them. A failed write leaves the store unchanged.
    fn commit(&mut self, items: BTreeMap<String, String>) -> CalcResult<()> {
        let json = serde_json::to_string_pretty(&items).map_err(|e| CalcError::serialization(e.to_string()))?;
        write_atomic(&self.path, json.as_bytes())?;
        self.items = items;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalcResult<()> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        self.commit(items)
    }

    fn remove_item(&mut self, key: &str) -> CalcResult<()> {
        if !self.items.contains_key(key) {
            return Ok(());
        }
        let mut items = self.items.clone();
        items.remove(key);
        self.commit(items)
    }
}

/// Write `contents` to `path` via a synced temp file and rename.
fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

/// Load the materials list, or the demo list when none has been saved.
///
/// # Errors
///
/// * `CalcError::SerializationError` - stored value is not a materials list
/// * `CalcError::VersionMismatch` - stored by an incompatible version
pub fn load_materials_list(store: &impl KeyValueStore) -> CalcResult<MaterialsList> {
    let Some(json) = store.get_item(MATERIALS_LIST_KEY)? else {
        debug!("no saved materials list, using demo list");
        return Ok(MaterialsList::demo());
    };
    let list: MaterialsList = serde_json::from_str(&json)
        .map_err(|e| CalcError::serialization(format!("Invalid materials list: {}", e)))?;
    validate_version(&list.version)?;
    Ok(list)
}

/// Save the materials list.
pub fn save_materials_list(store: &mut impl KeyValueStore, list: &MaterialsList) -> CalcResult<()> {
    let json = serde_json::to_string(list).map_err(|e| CalcError::serialization(e.to_string()))?;
    store.set_item(MATERIALS_LIST_KEY, &json)?;
    info!(items = list.len(), "saved materials list");
    Ok(())
}

/// Delete the saved materials list.
pub fn clear_materials_list(store: &mut impl KeyValueStore) -> CalcResult<()> {
    store.remove_item(MATERIALS_LIST_KEY)?;
    info!("cleared materials list");
    Ok(())
}

/// Validate that a stored version is compatible with the current schema.
fn validate_version(stored_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: stored_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let stored: Vec<u32> = stored_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if stored.is_empty() || current.is_empty() || stored[0] != current[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor version may have breaking changes
    if current[0] == 0 && stored.len() > 1 && current.len() > 1 && stored[1] > current[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials_list::Category;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        store.remove_item("k").unwrap();
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_tmp_path() {
        assert_eq!(tmp_path_for(Path::new("/a/list.json")), Path::new("/a/list.json.tmp"));
        assert_eq!(tmp_path_for(Path::new("/a/store")), Path::new("/a/store.tmp"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiltcalc.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        let mut list = MaterialsList::new();
        list.add("Wideback - Grey", "3 yards", 45.0, Category::Fabric);
        save_materials_list(&mut store, &list).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        let loaded = load_materials_list(&reopened).unwrap();
        assert_eq!(loaded.items, list.items);
    }

    #[test]
    fn test_clear_falls_back_to_demo() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
        save_materials_list(&mut store, &MaterialsList::new()).unwrap();
        assert!(load_materials_list(&store).unwrap().is_empty());

        clear_materials_list(&mut store).unwrap();
        assert_eq!(load_materials_list(&store).unwrap().items, MaterialsList::demo().items);
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_item("k", "saved").unwrap();

        // A directory in the way of the temp file makes the next write fail
        fs::create_dir(tmp_path_for(&path)).unwrap();
        let err = store.set_item("k", "unsaved").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("saved"));

        assert!(store.remove_item("k").is_err());
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("saved"));

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("k").unwrap().as_deref(), Some("saved"));
    }

    #[test]
    fn test_invalid_store_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = JsonFileStore::open(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_newer_schema_rejected() {
        let mut store = MemoryStore::new();
        let mut list = MaterialsList::new();
        list.version = "0.9.0".to_string();
        save_materials_list(&mut store, &list).unwrap();
        let err = load_materials_list(&store).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
