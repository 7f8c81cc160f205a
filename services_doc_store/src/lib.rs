//! # Document Store Service
//!
//! Tracks which documents the viewer opened and when.
//!
//! ## Philosophy
//!
//! - **Keyed upsert**: One record per document URL; reopening only restamps it
//! - **Total recency order**: Timestamp ties are broken by a sequence counter
//! - **Deterministic**: Records serialize in a stable order
//!
//! ## Example
//!
//! ```ignore
//! use services_doc_store::DocStore;
//!
//! let mut store = DocStore::new();
//! store.upsert_opened("file:///tmp/a.pdf");
//! store.upsert_opened("file:///tmp/b.pdf");
//!
//! assert_eq!(store.most_recently_opened().unwrap().url, "file:///tmp/b.pdf");
//! ```

pub mod persistence;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

pub use persistence::{load_or_default, load_store, save_store, StoreData};

/// Unique identifier for a document record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocId(Uuid);

impl DocId {
    /// Creates a new random document ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Doc({})", self.0)
    }
}

/// One opened document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    pub id: DocId,
    pub url: String,
    /// Milliseconds since the UNIX epoch
    pub opened_at: u64,
    /// Store-wide open counter at the last open
    pub sequence: u64,
}

impl DocRecord {
    fn recency(&self) -> (u64, u64) {
        (self.opened_at, self.sequence)
    }
}

/// Document store error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize document store: {0}")]
    Serialization(String),

    #[error("Failed to deserialize document store: {0}")]
    Deserialization(String),

    #[error("Unsupported document store version: {0}")]
    UnsupportedVersion(u32),

    #[error("Document not found: {0}")]
    NotFound(String),
}

/// Store result
pub type StoreResult<T> = Result<T, StoreError>;

/// Current wall-clock time in milliseconds
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Opened-documents record store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocStore {
    records: Vec<DocRecord>,
    next_sequence: u64,
}

impl DocStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Creates a record for `url`, or restamps it with the current time
    pub fn upsert_opened(&mut self, url: &str) -> DocId {
        self.upsert_opened_at(url, now_millis())
    }

    /// Same as `upsert_opened` with an explicit timestamp
    pub fn upsert_opened_at(&mut self, url: &str, opened_at: u64) -> DocId {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        if let Some(record) = self.records.iter_mut().find(|r| r.url == url) {
            record.opened_at = opened_at;
            record.sequence = sequence;
            tracing::debug!(target: "doc_store", url, opened_at, "document restamped");
            return record.id;
        }

        let id = DocId::new();
        self.records.push(DocRecord {
            id,
            url: url.to_string(),
            opened_at,
            sequence,
        });
        tracing::debug!(target: "doc_store", url, opened_at, "document recorded");
        id
    }

    /// The record with the latest timestamp, if any
    pub fn most_recently_opened(&self) -> Option<&DocRecord> {
        self.records.iter().max_by_key(|r| r.recency())
    }

    /// Every record, newest first
    pub fn recently_opened(&self) -> Vec<&DocRecord> {
        let mut records: Vec<&DocRecord> = self.records.iter().collect();
        records.sort_by_key(|r| std::cmp::Reverse(r.recency()));
        records
    }

    /// The `order`-th most recent record; 1 is the most recent
    pub fn nth_most_recent(&self, order: i64) -> Option<&DocRecord> {
        let index = usize::try_from(order).ok()?.checked_sub(1)?;
        self.recently_opened().into_iter().nth(index)
    }

    pub fn get(&self, url: &str) -> Option<&DocRecord> {
        self.records.iter().find(|r| r.url == url)
    }

    /// Removes the record for `url`
    pub fn remove(&mut self, url: &str) -> StoreResult<DocRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.url == url)
            .ok_or_else(|| StoreError::NotFound(url.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exports all records for persistence
    pub fn export(&self) -> StoreData {
        StoreData::from_records(&self.records)
    }

    /// Rebuilds a store from persisted records
    pub fn import(data: StoreData) -> Self {
        let next_sequence = data
            .records
            .iter()
            .map(|r| r.sequence + 1)
            .max()
            .unwrap_or(0);
        Self {
            records: data.records,
            next_sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = DocStore::new();
        assert!(store.is_empty());
        assert_eq!(store.most_recently_opened(), None);
        assert_eq!(store.nth_most_recent(1), None);
    }

    #[test]
    fn test_upsert_creates_then_restamps() {
        let mut store = DocStore::new();

        let first = store.upsert_opened_at("a.pdf", 100);
        let again = store.upsert_opened_at("a.pdf", 200);

        assert_eq!(first, again);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a.pdf").unwrap().opened_at, 200);
    }

    #[test]
    fn test_most_recently_opened() {
        let mut store = DocStore::new();
        store.upsert_opened_at("a.pdf", 100);
        store.upsert_opened_at("b.pdf", 300);
        store.upsert_opened_at("c.pdf", 200);

        assert_eq!(store.most_recently_opened().unwrap().url, "b.pdf");

        store.upsert_opened_at("a.pdf", 400);
        assert_eq!(store.most_recently_opened().unwrap().url, "a.pdf");
    }

    #[test]
    fn test_timestamp_ties_favor_later_open() {
        let mut store = DocStore::new();
        store.upsert_opened_at("a.pdf", 100);
        store.upsert_opened_at("b.pdf", 100);

        assert_eq!(store.most_recently_opened().unwrap().url, "b.pdf");
    }

    #[test]
    fn test_recency_order() {
        let mut store = DocStore::new();
        store.upsert_opened_at("a.pdf", 100);
        store.upsert_opened_at("b.pdf", 200);
        store.upsert_opened_at("c.pdf", 300);

        let urls: Vec<_> = store
            .recently_opened()
            .into_iter()
            .map(|r| r.url.as_str())
            .collect();
        assert_eq!(urls, vec!["c.pdf", "b.pdf", "a.pdf"]);

        assert_eq!(store.nth_most_recent(1).unwrap().url, "c.pdf");
        assert_eq!(store.nth_most_recent(3).unwrap().url, "a.pdf");
        assert_eq!(store.nth_most_recent(4), None);
        assert_eq!(store.nth_most_recent(0), None);
        assert_eq!(store.nth_most_recent(-1), None);
    }

    #[test]
    fn test_remove() {
        let mut store = DocStore::new();
        store.upsert_opened_at("a.pdf", 100);

        assert_eq!(store.remove("a.pdf").unwrap().url, "a.pdf");
        assert!(matches!(store.remove("a.pdf"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_import_continues_sequence() {
        let mut store = DocStore::new();
        store.upsert_opened_at("a.pdf", 100);
        store.upsert_opened_at("b.pdf", 100);

        let mut restored = DocStore::import(store.export());
        restored.upsert_opened_at("a.pdf", 100);

        assert_eq!(restored.most_recently_opened().unwrap().url, "a.pdf");
    }
}
