//! Shrine identification boundary.
//!
//! # Responsibility
//! - Define the contract an identification backend must honor: the wire
//!   shapes and the failure taxonomy.
//!
//! # Invariants
//! - Core never persists a record when identification fails.
//! - Concrete transports (HTTP clients) live outside this crate.

pub mod spi;
pub mod types;
