//! Record use-case service.
//!
//! # Responsibility
//! - Drive the capture flow: identify a stamp image, then persist the
//!   resulting record.
//! - Provide edit/remove entry points over the record store.
//!
//! # Invariants
//! - Identification failure persists nothing; no partial record exists.
//! - A persistence failure after successful identification is surfaced
//!   while the captured record stays in the in-memory collection.

use crate::identify::spi::ShrineIdentifier;
use crate::identify::types::IdentifyError;
use crate::model::record::{GoshuinRecord, RecordId, RecordPatch};
use crate::store::record_store::{RecordStore, StoreError, StoreResult};
use crate::store::slot_repo::SlotRepository;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input for the capture flow: one stamp photo in two encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Image reference stored on the record (data URI or file path).
    pub image_uri: String,
    /// Binary-safe payload handed to the identification service.
    pub image_base64: String,
}

/// Capture flow error.
#[derive(Debug)]
pub enum CaptureError {
    /// Identification failed; nothing was persisted.
    Identify(IdentifyError),
    /// The record was identified and applied in memory, but the slot write
    /// failed.
    Store(StoreError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identify(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent record state: {details}")
            }
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Identify(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<IdentifyError> for CaptureError {
    fn from(value: IdentifyError) -> Self {
        Self::Identify(value)
    }
}

impl From<StoreError> for CaptureError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case facade over the record store.
pub struct RecordService<R: SlotRepository> {
    store: RecordStore<R>,
}

impl<R: SlotRepository> RecordService<R> {
    /// Creates a service owning the loaded store.
    pub fn new(store: RecordStore<R>) -> Self {
        Self { store }
    }

    /// Identifies a stamp image and persists the resulting record.
    ///
    /// # Contract
    /// - One record per analyzed image, prepended to the collection.
    /// - `visit_date` and `created_at` are set to the capture instant.
    /// - On [`CaptureError::Identify`] nothing was persisted.
    pub fn capture(
        &mut self,
        identifier: &dyn ShrineIdentifier,
        request: CaptureRequest,
    ) -> Result<GoshuinRecord, CaptureError> {
        let backend = identifier.identifier_id().to_string();
        info!("event=record_capture module=service status=start identifier={backend}");

        let shrine = identifier.identify(&request.image_base64).map_err(|err| {
            error!(
                "event=record_capture module=service status=error identifier={backend} error={err}"
            );
            CaptureError::Identify(err)
        })?;

        let mut record = GoshuinRecord::new(request.image_uri);
        record.shrine_name = shrine.shrine_name;
        record.location = shrine.location;
        record.deities = shrine.deities;
        record.founded = shrine.founded;
        record.history = shrine.history;
        record.highlights = shrine.highlights;
        let record_id = record.id;

        match self.store.save(record) {
            Ok(records) => {
                info!(
                    "event=record_capture module=service status=ok identifier={backend} record_id={record_id}"
                );
                records
                    .first()
                    .cloned()
                    .ok_or(CaptureError::InconsistentState(
                        "captured record missing from collection",
                    ))
            }
            Err(err) => {
                warn!(
                    "event=record_capture module=service status=persist_failed record_id={record_id} error={err}"
                );
                Err(CaptureError::Store(err))
            }
        }
    }

    /// Changes the visit instant of one record.
    ///
    /// Returns the updated record, or `None` when `id` is unknown (the
    /// store treats that as a no-op).
    pub fn edit_visit_date(
        &mut self,
        id: RecordId,
        visit_date: impl Into<String>,
    ) -> StoreResult<Option<GoshuinRecord>> {
        let patch = RecordPatch {
            visit_date: Some(visit_date.into()),
            ..RecordPatch::default()
        };
        self.edit_info(id, &patch)
    }

    /// Applies a partial-field edit to one record.
    ///
    /// Returns the updated record, or `None` when `id` is unknown.
    pub fn edit_info(
        &mut self,
        id: RecordId,
        patch: &RecordPatch,
    ) -> StoreResult<Option<GoshuinRecord>> {
        self.store.update(id, patch)?;
        let updated = self.store.get(id).cloned();
        info!(
            "event=record_edit module=service status=ok record_id={id} found={}",
            updated.is_some()
        );
        Ok(updated)
    }

    /// Permanently removes one record; returns whether it existed.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<bool> {
        let existed = self.store.get(id).is_some();
        self.store.delete(id)?;
        info!("event=record_remove module=service status=ok record_id={id} existed={existed}");
        Ok(existed)
    }

    /// Current collection, most-recent-first.
    pub fn records(&self) -> &[GoshuinRecord] {
        self.store.records()
    }

    /// Pure lookup in the current collection.
    pub fn get(&self, id: RecordId) -> Option<&GoshuinRecord> {
        self.store.get(id)
    }

    /// Direct access to the owned store.
    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }
}
