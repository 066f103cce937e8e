//! Identification backend SPI.

use crate::identify::types::{IdentifyResult, ShrineInfo};

/// Contract for the external shrine identification collaborator.
///
/// Implementations receive the stamp image as binary-safe base64 text and
/// return structured shrine metadata, or a distinguishable
/// [`IdentifyError`](crate::identify::types::IdentifyError).
pub trait ShrineIdentifier {
    /// Stable backend identifier used in diagnostic log lines.
    fn identifier_id(&self) -> &str;

    /// Identifies the shrine pictured in the base64-encoded stamp image.
    fn identify(&self, image_base64: &str) -> IdentifyResult<ShrineInfo>;
}
