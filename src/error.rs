//! Error types for prefix parsing.

use thiserror::Error;

/// A CIDR-shaped literal that could not be turned into a prefix.
///
/// Any of these aborts the whole comparison.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The literal is not in `address/length` form.
    #[error("invalid CIDR format: {0}")]
    InvalidFormat(String),

    /// An octet is out of range or written with leading zeros.
    #[error("invalid IPv4 address in {literal}")]
    InvalidAddress { literal: String },

    /// The prefix length is greater than 32.
    #[error("invalid prefix length /{len} in {literal}")]
    InvalidPrefixLength { literal: String, len: u8 },
}
