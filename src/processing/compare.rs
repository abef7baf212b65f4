//! Expected vs. current route comparison.
//!
//! Builds the two reports:
//! - missing coverage: which parts of each expected prefix the current
//!   routes do not reach (containment based)
//! - full difference: which prefixes appear verbatim in only one of the two
//!   sets (equality based)

use crate::error::ParseError;
use crate::models::{ComparisonReport, DiffRow, MissingRow, Prefix};
use crate::processing::{aggregate_prefixes, load_prefixes, subtract_prefixes};
use itertools::{EitherOrBoth, Itertools};
use std::collections::HashSet;

/// Parse both texts and build the missing-coverage and difference reports.
///
/// # Errors
/// Returns the first [`ParseError`] found in either text. No partial report
/// is produced.
pub fn compare_tables(
    expected_text: &str,
    actual_text: &str,
) -> Result<ComparisonReport, ParseError> {
    let expected = load_prefixes(expected_text)?;
    let actual = load_prefixes(actual_text)?;
    log::info!(
        "Comparing {} expected prefixes against {} current prefixes",
        expected.len(),
        actual.len()
    );

    let report = ComparisonReport {
        missing: missing_coverage(&expected, &actual),
        diff: full_difference(&expected, &actual),
    };
    log::info!(
        "Found {} missing rows ({} wholly missing prefixes) and {} difference rows",
        report.missing.len(),
        report.missing.iter().filter(|row| row.wholly_missing()).count(),
        report.diff.len()
    );
    Ok(report)
}

/// Rows for every part of an expected prefix not covered by `actual`.
///
/// Expected prefixes equal to or inside an actual prefix produce no rows.
/// Otherwise the actual prefixes inside it are aggregated and subtracted; a
/// remainder equal to the expected prefix itself is reported with an empty
/// `uncovered` field. Serial numbers count emitted rows.
pub fn missing_coverage(expected: &[Prefix], actual: &[Prefix]) -> Vec<MissingRow> {
    let mut rows = Vec::new();

    for exp in expected {
        if actual.iter().any(|act| act.supernet_of(exp)) {
            log::debug!("{exp} fully covered by a current route");
            continue;
        }

        let inside: Vec<&Prefix> = actual.iter().filter(|act| act.subnet_of(exp)).collect();
        let covers = aggregate_prefixes(inside);
        let uncovered = subtract_prefixes(*exp, &covers);
        log::debug!(
            "{exp}: {} covering routes, {} uncovered blocks",
            covers.len(),
            uncovered.len()
        );

        for miss in uncovered {
            rows.push(MissingRow {
                serial: rows.len() + 1,
                expected: exp.to_string(),
                uncovered: if miss == *exp {
                    String::new()
                } else {
                    miss.to_string()
                },
            });
        }
    }

    rows
}

/// Side-by-side listing of prefixes present in only one of the two sets.
///
/// Both sides are de-duplicated, reduced to the entries missing from the
/// other side by exact equality, sorted as strings and zipped by position.
/// The shorter side is padded with empty strings.
pub fn full_difference(expected: &[Prefix], actual: &[Prefix]) -> Vec<DiffRow> {
    let expected_set: HashSet<&Prefix> = expected.iter().collect();
    let actual_set: HashSet<&Prefix> = actual.iter().collect();

    let expected_only = only_in(&expected_set, &actual_set);
    let actual_only = only_in(&actual_set, &expected_set);

    expected_only
        .into_iter()
        .zip_longest(actual_only)
        .enumerate()
        .map(|(i, pair)| {
            let (expected_only, actual_only) = match pair {
                EitherOrBoth::Both(e, a) => (e, a),
                EitherOrBoth::Left(e) => (e, String::new()),
                EitherOrBoth::Right(a) => (String::new(), a),
            };
            DiffRow {
                serial: i + 1,
                expected_only,
                actual_only,
            }
        })
        .collect()
}

/// String forms of the members of `left` absent from `right`, sorted.
fn only_in(left: &HashSet<&Prefix>, right: &HashSet<&Prefix>) -> Vec<String> {
    left.difference(right)
        .map(|p| p.to_string())
        .sorted()
        .collect()
}
