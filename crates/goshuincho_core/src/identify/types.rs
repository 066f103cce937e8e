//! Identification request/response shapes and error taxonomy.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type IdentifyResult<T> = Result<T, IdentifyError>;

/// Structured shrine metadata returned by the identification service.
///
/// Field names serialize in camelCase to match the service response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShrineInfo {
    pub shrine_name: String,
    pub location: String,
    #[serde(default)]
    pub deities: Vec<String>,
    #[serde(default)]
    pub founded: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Distinguishable identification failure, propagated verbatim to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifyError {
    /// The request never reached the service or the connection dropped.
    Transport(String),
    /// The service answered with an application-level error.
    Service { code: String, message: String },
    /// The service answered, but the payload did not match the contract.
    InvalidResponse(String),
}

impl Display for IdentifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "identification transport failed: {message}"),
            Self::Service { code, message } => {
                write!(f, "identification service error `{code}`: {message}")
            }
            Self::InvalidResponse(message) => {
                write!(f, "invalid identification response: {message}")
            }
        }
    }
}

impl Error for IdentifyError {}
