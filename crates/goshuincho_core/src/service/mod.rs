//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate identification and store calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod record_service;
