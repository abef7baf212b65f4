//! JSON rendering of a [`ComparisonReport`].

use crate::models::ComparisonReport;

/// Pretty printed JSON with `missing` and `diff` arrays.
pub fn to_json(report: &ComparisonReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
