//! Shrine-visit record model.
//!
//! # Responsibility
//! - Define the canonical `GoshuinRecord` persisted in the records slot.
//! - Provide the shallow-merge patch used by partial-field edits.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `created_at` never changes after creation.
//! - Instant fields carry RFC 3339 text; the store does not validate them,
//!   the query layer owns parsing and skips unparseable values.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one shrine-visit record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// One shrine-visit entry: the stamp photo plus user-editable metadata.
///
/// Field names serialize in camelCase to match the persisted slot schema.
/// Text fields may be empty; the store trusts the caller and performs no
/// field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoshuinRecord {
    /// Stable ID assigned at creation, immutable afterwards.
    pub id: RecordId,
    /// Primary stamp image reference (data URI or file path, opaque).
    pub image_uri: String,
    /// Ordered supplementary image references.
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub shrine_name: String,
    #[serde(default)]
    pub location: String,
    /// Founding era text as reported by identification, free-form.
    #[serde(default)]
    pub founded: String,
    #[serde(default)]
    pub history: String,
    /// Enshrined deities, ordered.
    #[serde(default)]
    pub deities: Vec<String>,
    /// Points of interest, ordered.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Visit instant, RFC 3339, user-editable.
    pub visit_date: String,
    /// Creation instant, RFC 3339, set once.
    pub created_at: String,
}

impl GoshuinRecord {
    /// Creates a new record with a generated stable ID.
    ///
    /// `visit_date` starts equal to `created_at` (captured now); shrine
    /// metadata fields start empty and are filled by the capture flow.
    pub fn new(image_uri: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), image_uri, Utc::now().to_rfc3339())
    }

    /// Creates a record with caller-provided identity and creation instant.
    ///
    /// Used by tests and import paths where identity already exists.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this record lifetime.
    pub fn with_id(
        id: RecordId,
        image_uri: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        let created_at = created_at.into();
        Self {
            id,
            image_uri: image_uri.into(),
            additional_images: Vec::new(),
            shrine_name: String::new(),
            location: String::new(),
            founded: String::new(),
            history: String::new(),
            deities: Vec::new(),
            highlights: Vec::new(),
            visit_date: created_at.clone(),
            created_at,
        }
    }
}

/// Partial-field update with shallow-merge semantics.
///
/// Absent fields leave the record untouched. `id` and `created_at` are
/// deliberately not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordPatch {
    pub image_uri: Option<String>,
    pub additional_images: Option<Vec<String>>,
    pub shrine_name: Option<String>,
    pub location: Option<String>,
    pub founded: Option<String>,
    pub history: Option<String>,
    pub deities: Option<Vec<String>>,
    pub highlights: Option<Vec<String>>,
    pub visit_date: Option<String>,
}

impl RecordPatch {
    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.image_uri.is_none()
            && self.additional_images.is_none()
            && self.shrine_name.is_none()
            && self.location.is_none()
            && self.founded.is_none()
            && self.history.is_none()
            && self.deities.is_none()
            && self.highlights.is_none()
            && self.visit_date.is_none()
    }

    /// Merges present fields into `record`, replacing whole values.
    pub fn apply_to(&self, record: &mut GoshuinRecord) {
        if let Some(value) = &self.image_uri {
            record.image_uri = value.clone();
        }
        if let Some(value) = &self.additional_images {
            record.additional_images = value.clone();
        }
        if let Some(value) = &self.shrine_name {
            record.shrine_name = value.clone();
        }
        if let Some(value) = &self.location {
            record.location = value.clone();
        }
        if let Some(value) = &self.founded {
            record.founded = value.clone();
        }
        if let Some(value) = &self.history {
            record.history = value.clone();
        }
        if let Some(value) = &self.deities {
            record.deities = value.clone();
        }
        if let Some(value) = &self.highlights {
            record.highlights = value.clone();
        }
        if let Some(value) = &self.visit_date {
            record.visit_date = value.clone();
        }
    }
}
