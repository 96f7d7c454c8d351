//! In-process session store.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry as MapEntry;

use super::{SessionId, SessionRecord, SessionStore, Versioned};
use crate::error::StoreError;

/// Encoded record plus its version.
struct Entry {
    version: u64,
    bytes: Vec<u8>,
}

/// Session store backed by a locked hash map.
///
/// Records are kept bincode-encoded, so every read hands out an owned
/// snapshot and no caller can mutate stored state except through
/// [`SessionStore::compare_and_swap`].
#[derive(Default)]
pub struct MemoryStore {
    sessions: RwLock<FxHashMap<SessionId, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn insert(&self, id: &SessionId, record: &SessionRecord) -> Result<u64, StoreError> {
        let bytes = record.encode()?;
        match self.sessions.write().entry(id.clone()) {
            MapEntry::Occupied(_) => Err(StoreError::AlreadyExists(id.clone())),
            MapEntry::Vacant(slot) => {
                slot.insert(Entry { version: 1, bytes });
                Ok(1)
            }
        }
    }

    fn load(&self, id: &SessionId) -> Result<Versioned<SessionRecord>, StoreError> {
        let sessions = self.sessions.read();
        let entry = sessions
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        Ok(Versioned {
            version: entry.version,
            value: SessionRecord::decode(&entry.bytes)?,
        })
    }

    fn version(&self, id: &SessionId) -> Result<u64, StoreError> {
        self.sessions
            .read()
            .get(id)
            .map(|entry| entry.version)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn compare_and_swap(
        &self,
        id: &SessionId,
        expected: u64,
        record: &SessionRecord,
    ) -> Result<u64, StoreError> {
        let bytes = record.encode()?;
        let mut sessions = self.sessions.write();
        let entry = sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if entry.version != expected {
            return Err(StoreError::Conflict {
                id: id.clone(),
                expected,
                actual: entry.version,
            });
        }

        entry.version += 1;
        entry.bytes = bytes;
        Ok(entry.version)
    }

    fn remove(&self, id: &SessionId) -> Result<(), StoreError> {
        self.sessions
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}
