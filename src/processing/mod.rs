//! Prefix processing logic.
//!
//! This module contains the CIDR algebra behind the comparison:
//! - [`parse`] - extracting prefixes from free-form text
//! - [`aggregate`] - collapsing prefixes into a minimal covering set
//! - [`subtract`] - finding the uncovered remainder of a prefix
//! - [`compare`] - building the missing-coverage and difference reports

mod aggregate;
mod compare;
mod parse;
mod subtract;

// Re-export public functions
pub use aggregate::aggregate_prefixes;
pub use compare::{compare_tables, full_difference, missing_coverage};
pub use parse::{find_prefix_tokens, load_prefixes};
pub use subtract::subtract_prefixes;
