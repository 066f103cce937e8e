//! In-memory record collection with write-through slot persistence.
//!
//! # Responsibility
//! - Exclusively own the record collection for the process.
//! - Persist the full collection as one serialized slot write per mutation.
//!
//! # Invariants
//! - New records are prepended; the order is otherwise stable.
//! - Loading never raises: missing or corrupt slot data falls back to an
//!   empty collection and logs the condition.
//! - A failed slot write surfaces as `StoreError::Persistence` while the
//!   in-memory collection keeps the applied mutation; there is no retry.

use crate::model::record::{GoshuinRecord, RecordId, RecordPatch};
use crate::store::slot_repo::{RepoError, SlotRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name of the slot holding the serialized record collection.
pub const RECORDS_SLOT: &str = "goshuin_records";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for collection persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying slot write failed; the in-memory state already carries
    /// the mutation and is not rolled back.
    Persistence(RepoError),
    /// The collection could not be serialized to slot text.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence(err) => write!(f, "record persistence failed: {err}"),
            Self::Encode(err) => write!(f, "record collection could not be encoded: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}

/// Durable store for the shrine-visit record collection.
///
/// Constructed via [`RecordStore::load`]; construction is the readiness
/// signal, no operation can run against an unloaded store.
pub struct RecordStore<R: SlotRepository> {
    repo: R,
    records: Vec<GoshuinRecord>,
}

impl<R: SlotRepository> RecordStore<R> {
    /// Reads the records slot once and takes ownership of the collection.
    ///
    /// Missing slot data, an unreadable backend and a corrupt slot body all
    /// fall back to the empty collection; load never raises.
    pub fn load(repo: R) -> Self {
        let records = match repo.read_slot(RECORDS_SLOT) {
            Ok(Some(body)) => match serde_json::from_str::<Vec<GoshuinRecord>>(&body) {
                Ok(records) => records,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=fallback_empty reason=corrupt_slot error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback_empty reason=read_failed error={err}"
                );
                Vec::new()
            }
        };

        info!(
            "event=store_load module=store status=ok count={}",
            records.len()
        );
        Self { repo, records }
    }

    /// Current collection, most-recent-first.
    pub fn records(&self) -> &[GoshuinRecord] {
        &self.records
    }

    /// Pure in-memory lookup; does not re-read persisted storage.
    pub fn get(&self, id: RecordId) -> Option<&GoshuinRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Prepends `record` and persists the full collection.
    ///
    /// Returns the updated collection. On a failed write the mutation stays
    /// applied in memory and the error is surfaced to the caller.
    pub fn save(&mut self, record: GoshuinRecord) -> StoreResult<&[GoshuinRecord]> {
        self.records.insert(0, record);
        self.persist()?;
        Ok(&self.records)
    }

    /// Shallow-merges `patch` into the record matching `id` and persists.
    ///
    /// Unknown `id` is a silent no-op; callers needing a presence check use
    /// [`RecordStore::get`] or inspect the returned collection.
    pub fn update(&mut self, id: RecordId, patch: &RecordPatch) -> StoreResult<&[GoshuinRecord]> {
        if let Some(record) = self.records.iter_mut().find(|record| record.id == id) {
            patch.apply_to(record);
        }
        self.persist()?;
        Ok(&self.records)
    }

    /// Removes the record matching `id` and persists. Idempotent.
    pub fn delete(&mut self, id: RecordId) -> StoreResult<&[GoshuinRecord]> {
        self.records.retain(|record| record.id != id);
        self.persist()?;
        Ok(&self.records)
    }

    fn persist(&self) -> StoreResult<()> {
        let body = serde_json::to_string(&self.records).map_err(StoreError::Encode)?;
        self.repo.write_slot(RECORDS_SLOT, &body)?;
        Ok(())
    }
}
