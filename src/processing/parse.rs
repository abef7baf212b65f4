//! Prefix extraction from free-form text.
//!
//! Pulls every `a.b.c.d/len` token out of pasted routing tables, config
//! snippets or plain lists.

use crate::error::ParseError;
use crate::models::Prefix;
use regex::Regex;
use std::sync::OnceLock;

/// Regex matching CIDR-shaped tokens. Value ranges are checked afterwards.
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| {
        Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}/\d{1,2}").expect("Invalid Regex")
    })
}

/// Return the raw CIDR-shaped tokens of `text` in order of appearance.
pub fn find_prefix_tokens(text: &str) -> Vec<&str> {
    get_prefix_regex()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Parse every CIDR-shaped token in `text` into a [`Prefix`].
///
/// Host bits are zeroed. Duplicates and input order are preserved.
///
/// # Errors
/// Returns the [`ParseError`] of the first token with an invalid octet or
/// prefix length.
pub fn load_prefixes(text: &str) -> Result<Vec<Prefix>, ParseError> {
    let prefixes = find_prefix_tokens(text)
        .into_iter()
        .map(|token| {
            token.parse::<Prefix>().map_err(|e| {
                log::error!("Rejecting prefix literal '{token}': {e}");
                e
            })
        })
        .collect::<Result<Vec<Prefix>, ParseError>>()?;

    if prefixes.is_empty() && !text.trim().is_empty() {
        log::warn!("No CIDR prefixes found in {} bytes of input", text.len());
    }
    log::debug!("Parsed {} prefixes", prefixes.len());

    Ok(prefixes)
}
