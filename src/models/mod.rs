//! Domain models for route comparison.
//!
//! - [`Prefix`] - normalized IPv4 network with CIDR bit math
//! - [`MissingRow`], [`DiffRow`] and [`ComparisonReport`] - report records

mod prefix;
mod rows;

// Re-export public types
pub use prefix::{Prefix, MAX_LENGTH};
pub use rows::{ComparisonReport, DiffRow, MissingRow};
