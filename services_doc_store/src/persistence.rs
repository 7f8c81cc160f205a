//! Document store persistence
//!
//! Records are saved as versioned, pretty-printed JSON. Records are written
//! newest first so the file order is stable for a given store.

use crate::{DocRecord, DocStore, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Serializable container for document records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Version of the store format (for future migrations)
    pub version: u32,
    pub records: Vec<DocRecord>,
}

impl StoreData {
    /// Current version of the store format
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            records: Vec::new(),
        }
    }

    pub fn from_records(records: &[DocRecord]) -> Self {
        let mut records = records.to_vec();
        records.sort_by_key(|r| std::cmp::Reverse((r.opened_at, r.sequence)));
        Self {
            version: Self::CURRENT_VERSION,
            records,
        }
    }
}

impl Default for StoreData {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes store data to JSON bytes
pub fn serialize_store(data: &StoreData) -> StoreResult<Vec<u8>> {
    serde_json::to_vec_pretty(data).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Deserializes store data from JSON bytes
pub fn deserialize_store(bytes: &[u8]) -> StoreResult<StoreData> {
    let data: StoreData =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Deserialization(e.to_string()))?;

    if data.version != StoreData::CURRENT_VERSION {
        return Err(StoreError::UnsupportedVersion(data.version));
    }

    Ok(data)
}

/// Writes the store to `path`
pub fn save_store(store: &DocStore, path: &Path) -> StoreResult<()> {
    let bytes = serialize_store(&store.export())?;
    fs::write(path, bytes)?;
    tracing::debug!(target: "doc_store", path = %path.display(), records = store.len(), "store saved");
    Ok(())
}

/// Reads the store from `path`
pub fn load_store(path: &Path) -> StoreResult<DocStore> {
    let bytes = fs::read(path)?;
    let store = DocStore::import(deserialize_store(&bytes)?);
    tracing::debug!(target: "doc_store", path = %path.display(), records = store.len(), "store loaded");
    Ok(store)
}

/// Reads the store from `path`; a missing file is an empty store
pub fn load_or_default(path: &Path) -> StoreResult<DocStore> {
    match load_store(path) {
        Err(StoreError::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(DocStore::new()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");

        let mut store = DocStore::new();
        store.upsert_opened_at("a.pdf", 100);
        store.upsert_opened_at("b.pdf", 200);
        save_store(&store, &path).unwrap();

        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.most_recently_opened().unwrap().url, "b.pdf");
        assert_eq!(loaded.get("a.pdf"), store.get("a.pdf"));
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_or_default(&dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(&path, b"{ invalid json }").unwrap();

        assert!(matches!(
            load_or_default(&path),
            Err(StoreError::Deserialization(_))
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let json = r#"{ "version": 999, "records": [] }"#;
        assert!(matches!(
            deserialize_store(json.as_bytes()),
            Err(StoreError::UnsupportedVersion(999))
        ));
    }

    #[test]
    fn test_records_written_newest_first() {
        let mut store = DocStore::new();
        store.upsert_opened_at("old.pdf", 100);
        store.upsert_opened_at("new.pdf", 900);

        let bytes = serialize_store(&store.export()).unwrap();
        let json = std::str::from_utf8(&bytes).unwrap();

        assert!(json.find("new.pdf").unwrap() < json.find("old.pdf").unwrap());
    }
}
