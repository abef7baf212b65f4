//! Report row types produced by the comparison.

use serde::Serialize;

/// One uncovered slice of an expected prefix.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MissingRow {
    /// 1-based row number.
    pub serial: usize,
    /// Expected prefix the row belongs to.
    pub expected: String,
    /// Uncovered part of `expected`; empty when the whole prefix is missing.
    pub uncovered: String,
}

impl MissingRow {
    /// True when no part of the expected prefix is present.
    pub fn wholly_missing(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// One line of the side-by-side difference listing.
///
/// The two columns come from two independently sorted lists and are paired by
/// position only. An expected-only entry and the actual-only entry next to it
/// are not related to each other.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    /// 1-based row number.
    pub serial: usize,
    /// Prefix present only in the expected set, or empty.
    pub expected_only: String,
    /// Prefix present only in the actual set, or empty.
    pub actual_only: String,
}

/// Both reports for one comparison.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    pub missing: Vec<MissingRow>,
    pub diff: Vec<DiffRow>,
}

impl ComparisonReport {
    /// True when every expected prefix is covered by the actual set.
    pub fn fully_covered(&self) -> bool {
        self.missing.is_empty()
    }
}
