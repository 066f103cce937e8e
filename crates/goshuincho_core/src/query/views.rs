//! Filtered and grouped views of the record collection.
//!
//! # Responsibility
//! - Derive list views from the full collection and query parameters.
//!
//! # Invariants
//! - Input ordering is preserved; filters never reorder.
//! - Filters compose by intersection.

use crate::model::record::GoshuinRecord;
use crate::query::month::{visit_month, YearMonth};
use std::collections::BTreeSet;

/// Case-insensitive substring match against shrine name or location.
///
/// An empty or whitespace-only query returns the input unchanged.
pub fn filter_by_text(records: &[GoshuinRecord], query: &str) -> Vec<GoshuinRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            record.shrine_name.to_lowercase().contains(&needle)
                || record.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keeps records visited in the given local-calendar month.
///
/// Records with an unparseable visit instant never match.
pub fn filter_by_month(records: &[GoshuinRecord], month: YearMonth) -> Vec<GoshuinRecord> {
    records
        .iter()
        .filter(|record| visit_month(record) == Some(month))
        .cloned()
        .collect()
}

/// Combined list filter; fields compose by intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Free-text query over shrine name and location.
    pub text: Option<String>,
    /// Local-calendar month constraint.
    pub month: Option<YearMonth>,
}

impl RecordFilter {
    /// Applies both constraints; an absent field filters nothing.
    pub fn apply(&self, records: &[GoshuinRecord]) -> Vec<GoshuinRecord> {
        let mut filtered = match self.text.as_deref() {
            Some(text) => filter_by_text(records, text),
            None => records.to_vec(),
        };
        if let Some(month) = self.month {
            filtered = filter_by_month(&filtered, month);
        }
        filtered
    }
}

/// Distinct visit months present in the collection, most recent first.
///
/// Records with an unparseable visit instant are excluded.
pub fn available_months(records: &[GoshuinRecord]) -> Vec<YearMonth> {
    let months: BTreeSet<YearMonth> = records.iter().filter_map(visit_month).collect();
    months.into_iter().rev().collect()
}
