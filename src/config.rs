//! Global constants and defaults.

/// Report file written after every run unless `--no-save` is given.
pub const DEFAULT_OUTPUT_FILE: &str = "route_comparison_output.txt";

/// log4rs configuration read at startup.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Environment variables (also read from `.env`).
pub const ENV_OUTPUT_FILE: &str = "ROUTE_COMPARE_OUTPUT";
pub const ENV_FORMAT: &str = "ROUTE_COMPARE_FORMAT";
pub const ENV_LOG_CONFIG: &str = "ROUTE_COMPARE_LOG_CONFIG";

/// Source name used for stdin.
pub const STDIN_SOURCE: &str = "-";

pub const MISSING_HEADERS: [&str; 3] = [
    "S. No.",
    "Missing required routes in current RT",
    "Missing Partial uncovered Subnet in current RT",
];

pub const DIFF_HEADERS: [&str; 3] = [
    "S. No.",
    "In expected Only (partial/full)",
    "In current Only (partial/full)",
];

pub const MISSING_HEADING: &str =
    "Missing Subnets in current routing table relative to expected routes:";
pub const FULLY_COVERED_MESSAGE: &str =
    "All expected routes are fully covered by current routing table.";
pub const DIFF_HEADING: &str = "Full Differences Between expected and current Routes:";
