//! Integration tests for route-compare
//!
//! These tests verify the complete workflow from route text to both reports.

use route_compare::{
    compare_tables,
    input::{read_sources, split_pasted},
    output::render_report,
    processing::{aggregate_prefixes, load_prefixes, subtract_prefixes},
    DiffRow, MissingRow, ParseError, Prefix,
};

fn missing(serial: usize, expected: &str, uncovered: &str) -> MissingRow {
    MissingRow {
        serial,
        expected: expected.to_string(),
        uncovered: uncovered.to_string(),
    }
}

fn diff(serial: usize, expected_only: &str, actual_only: &str) -> DiffRow {
    DiffRow {
        serial,
        expected_only: expected_only.to_string(),
        actual_only: actual_only.to_string(),
    }
}

#[test]
fn test_exact_split_covering() {
    let report = compare_tables("10.0.0.0/24", "10.0.0.0/25\n10.0.0.128/25").unwrap();
    assert!(report.missing.is_empty(), "Two halves cover the /24");
}

#[test]
fn test_half_missing() {
    let report = compare_tables("10.0.0.0/24", "10.0.0.0/25").unwrap();
    assert_eq!(report.missing, vec![missing(1, "10.0.0.0/24", "10.0.0.128/25")]);
}

#[test]
fn test_wholly_missing() {
    let report = compare_tables("10.0.0.0/24", "").unwrap();
    assert_eq!(report.missing, vec![missing(1, "10.0.0.0/24", "")]);
    assert_eq!(report.diff, vec![diff(1, "10.0.0.0/24", "")]);
}

#[test]
fn test_identical_sets() {
    let report = compare_tables("10.0.0.0/24", "10.0.0.0/24").unwrap();
    assert!(report.missing.is_empty());
    assert!(report.diff.is_empty());
}

#[test]
fn test_different_granularity() {
    let report = compare_tables("10.0.0.0/25 10.0.0.128/25", "10.0.0.0/24").unwrap();
    assert!(report.missing.is_empty(), "Both halves sit inside the /24");
    assert_eq!(
        report.diff,
        vec![
            diff(1, "10.0.0.0/25", "10.0.0.0/24"),
            diff(2, "10.0.0.128/25", ""),
        ]
    );
}

#[test]
fn test_parse_error_aborts() {
    let err = compare_tables("10.0.0.0/24", "10.0.0.0/25\n300.0.0.0/8").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidAddress {
            literal: "300.0.0.0/8".to_string()
        }
    );
}

#[test]
fn test_routing_table_files() {
    let (expected, current) = read_sources(
        "src/tests/test_data/expected_routes_01.txt",
        "src/tests/test_data/current_routes_01.txt",
    )
    .expect("Failed to read route files");

    let report = compare_tables(&expected, &current).expect("Failed to compare");

    assert_eq!(
        report.missing,
        vec![
            missing(1, "10.40.0.0/22", "10.40.2.0/24"),
            missing(2, "172.16.8.0/21", ""),
            missing(3, "192.168.50.0/24", ""),
        ]
    );

    assert_eq!(report.diff.len(), 8, "Eight current-only prefixes");
    assert_eq!(report.diff[0], diff(1, "10.20.0.0/16", "10.20.0.0/17"));
    assert_eq!(report.diff[5], diff(6, "192.168.50.0/24", "10.40.0.0/23"));
    assert_eq!(report.diff[7], diff(8, "", "172.16.0.0/21"));

    let text = render_report(&report);
    assert!(text.contains("| 10.40.0.0/22 "));
    assert!(text.contains("| 10.40.2.0/24 "));
}

#[test]
fn test_invalid_route_file() {
    let (expected, current) = read_sources(
        "src/tests/test_data/invalid_routes.txt",
        "src/tests/test_data/current_routes_01.txt",
    )
    .expect("Failed to read route files");
    assert!(matches!(
        compare_tables(&expected, &current),
        Err(ParseError::InvalidAddress { .. })
    ));
}

#[test]
fn test_pasted_input() {
    let pasted = "10.0.0.0/24\n10.9.0.0/16\n\n10.0.0.0/25\n10.9.0.0/16\n";
    let (expected, current) = split_pasted(pasted);
    let report = compare_tables(&expected, &current).unwrap();
    assert_eq!(report.missing, vec![missing(1, "10.0.0.0/24", "10.0.0.128/25")]);
    assert_eq!(report.diff, vec![diff(1, "10.0.0.0/24", "10.0.0.0/25")]);
}

#[test]
fn test_difference_sets_are_disjoint() {
    let expected = "10.0.0.0/8 10.1.0.0/16 172.16.0.0/12 192.168.1.0/24 10.0.0.0/8";
    let current = "10.0.0.0/8 10.1.0.0/17 192.168.1.0/24 100.64.0.0/10";
    let report = compare_tables(expected, current).unwrap();

    let exp_only: Vec<&str> = report
        .diff
        .iter()
        .map(|r| r.expected_only.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    let act_only: Vec<&str> = report
        .diff
        .iter()
        .map(|r| r.actual_only.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    assert_eq!(exp_only, vec!["10.1.0.0/16", "172.16.0.0/12"]);
    assert_eq!(act_only, vec!["10.1.0.0/17", "100.64.0.0/10"]);
    for e in &exp_only {
        assert!(!act_only.contains(e), "{e} is on both sides");
        assert!(!current.contains(e), "{e} is in the current set");
    }
}

#[test]
fn test_supernet_short_circuit() {
    let report = compare_tables("10.1.2.0/24 10.200.0.0/16", "10.0.0.0/8").unwrap();
    assert!(report.missing.is_empty());
}

#[test]
fn test_uncovered_plus_covers_partition_target() {
    let target: Prefix = "10.64.0.0/12".parse().unwrap();
    let covers = load_prefixes(
        "10.64.0.0/16 10.65.0.0/16 10.70.12.0/22 10.79.255.252/30 10.72.0.0/13 10.70.13.0/24",
    )
    .unwrap();
    let aggregated = aggregate_prefixes(&covers);
    let uncovered = subtract_prefixes(target, &aggregated);

    let covered: u64 = aggregated.iter().map(|p| p.size()).sum();
    let remaining: u64 = uncovered.iter().map(|p| p.size()).sum();
    assert_eq!(covered + remaining, target.size());
    for u in &uncovered {
        assert!(u.subnet_of(&target));
        assert!(aggregated.iter().all(|c| !u.overlaps(c)), "{u} overlaps a cover");
    }
    assert_eq!(aggregate_prefixes(&aggregated), aggregated);
}
