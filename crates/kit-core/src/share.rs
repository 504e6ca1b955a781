//! Shared data store: ad-hoc value passing between tools
//!
//! The store keeps a current value per key plus a bounded history of
//! previous writes, mirrored to a single JSON document. Every mutation
//! rewrites the whole document through the atomic write path, so a reader
//! never observes a half-written file. There is no cross-process
//! transaction: two processes mutating at once resolve last-writer-wins.
//!
//! A store is constructed explicitly with [`SharedStore::open`] and passed
//! to whatever needs it; nothing here is process-global.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use kit_fs::DocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Maximum number of history records kept per key; older records are
/// evicted first.
pub const HISTORY_LIMIT: usize = 10;

/// Current value of a key, with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedEntry {
    pub value: Value,
    /// Tool id that produced the value, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default)]
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// One prior write of a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// On-disk shape of `shared_data.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    entries: BTreeMap<String, SharedEntry>,
    #[serde(default)]
    history: BTreeMap<String, Vec<HistoryRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
}

/// JSON-backed key/value store with per-key history.
#[derive(Debug)]
pub struct SharedStore {
    path: PathBuf,
    store: DocumentStore,
    doc: StoreDocument,
}

impl SharedStore {
    /// Open the store backed by `path`.
    ///
    /// A missing file yields an empty store. An unreadable or unparsable
    /// file is logged and also yields an empty store; the bad file is left
    /// in place until the next mutation overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = if path.exists() {
            match DocumentStore::new().load(&path) {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "shared data unreadable; starting with an empty store"
                    );
                    StoreDocument::default()
                }
            }
        } else {
            StoreDocument::default()
        };

        Self {
            path,
            store: DocumentStore::new(),
            doc,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set `key` to `value`, recording history, then persist.
    ///
    /// The key's history is appended and trimmed to the [`HISTORY_LIMIT`]
    /// most recent records. If persistence fails the error is returned and
    /// the in-memory update is NOT rolled back; a later successful mutation
    /// writes the accumulated state.
    pub fn set(
        &mut self,
        key: &str,
        value: Value,
        producer: Option<&str>,
        description: &str,
    ) -> Result<()> {
        let now = Utc::now();
        let producer = producer.map(str::to_string);

        self.doc.entries.insert(
            key.to_string(),
            SharedEntry {
                value: value.clone(),
                producer: producer.clone(),
                description: description.to_string(),
                timestamp: now,
            },
        );

        let history = self.doc.history.entry(key.to_string()).or_default();
        history.push(HistoryRecord {
            value,
            producer,
            timestamp: now,
        });
        if history.len() > HISTORY_LIMIT {
            let excess = history.len() - HISTORY_LIMIT;
            history.drain(..excess);
        }

        self.persist()
    }

    /// Current value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.entries.get(key).map(|e| &e.value)
    }

    /// Full current entry for `key`, if set.
    pub fn entry(&self, key: &str) -> Option<&SharedEntry> {
        self.doc.entries.get(key)
    }

    /// All current entries, ordered by key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SharedEntry)> {
        self.doc.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.doc.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.entries.is_empty()
    }

    /// Remove `key`. An absent key is a no-op: nothing is written and
    /// `Ok(false)` is returned. The key's history is retained either way.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        if self.doc.entries.remove(key).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Empty the current values and persist. History is deliberately kept:
    /// clearing is for starting fresh, not for erasing provenance.
    pub fn clear(&mut self) -> Result<()> {
        self.doc.entries.clear();
        self.persist()
    }

    /// History of `key`, oldest first; empty when the key was never set.
    pub fn history(&self, key: &str) -> &[HistoryRecord] {
        self.doc
            .history
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every key's history, ordered by key.
    pub fn history_all(&self) -> &BTreeMap<String, Vec<HistoryRecord>> {
        &self.doc.history
    }

    /// Instant of the last successful persist, as recorded in the document.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.doc.last_updated
    }

    fn persist(&mut self) -> Result<()> {
        self.doc.last_updated = Some(Utc::now());
        self.store.save(&self.path, &self.doc)?;
        tracing::debug!(path = %self.path.display(), entries = self.doc.entries.len(), "shared data saved");
        Ok(())
    }
}
