//! Session storage.
//!
//! The store is the single source of truth for every session. It offers
//! exactly what the sync layer needs:
//! - read the current record and its version
//! - replace the record only if the version is unchanged (compare-and-swap)
//! - detect change by version, for polling participants
//!
//! Compare-and-swap is what makes round resolution happen exactly once:
//! two participants racing to finalize the same round both read version
//! `n`, but only one swap from `n` can succeed.

mod memory;
mod record;
mod session_id;

pub use memory::MemoryStore;
pub use record::{SessionRecord, Versioned};
pub use session_id::{SessionId, JOIN_CODE_LEN};

use crate::error::StoreError;

pub trait SessionStore: Send + Sync {
    /// Store a new record at version 1. Fails if `id` is taken.
    fn insert(&self, id: &SessionId, record: &SessionRecord) -> Result<u64, StoreError>;

    /// Read the current record and version.
    fn load(&self, id: &SessionId) -> Result<Versioned<SessionRecord>, StoreError>;

    /// Current version without decoding the record.
    fn version(&self, id: &SessionId) -> Result<u64, StoreError>;

    /// Replace the record if it is still at `expected`; returns the new version.
    fn compare_and_swap(
        &self,
        id: &SessionId,
        expected: u64,
        record: &SessionRecord,
    ) -> Result<u64, StoreError>;

    fn remove(&self, id: &SessionId) -> Result<(), StoreError>;

    /// Read the record only if its version moved past `since`.
    fn load_if_newer(
        &self,
        id: &SessionId,
        since: u64,
    ) -> Result<Option<Versioned<SessionRecord>>, StoreError> {
        if self.version(id)? <= since {
            return Ok(None);
        }
        self.load(id).map(Some)
    }
}
