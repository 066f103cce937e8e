//! Core domain logic for Goshuincho, a personal shrine-visit stamp journal.
//! This crate is the single source of truth for record and view invariants.

pub mod db;
pub mod identify;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use identify::spi::ShrineIdentifier;
pub use identify::types::{IdentifyError, IdentifyResult, ShrineInfo};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{GoshuinRecord, RecordId, RecordPatch};
pub use query::month::YearMonth;
pub use query::views::{available_months, filter_by_month, filter_by_text, RecordFilter};
pub use service::record_service::{CaptureError, CaptureRequest, RecordService};
pub use store::record_store::{RecordStore, StoreError, StoreResult, RECORDS_SLOT};
pub use store::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
