//! Domain model for shrine-visit records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, query and service
//!   layers.
//! - Define the partial-update patch applied by edit flows.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId`.
//! - `created_at` is set once at creation and never mutated.

pub mod record;
