//! Route text input.
//!
//! Loads the expected and current route texts from files, stdin, or a single
//! pasted stdin stream holding both.

use crate::config::STDIN_SOURCE;
use std::error::Error;
use std::io::Read;
use std::path::Path;

/// Read a route text from `source`, a file path or `-` for stdin.
///
/// # Returns
/// * `Ok(String)` - The text as read
/// * `Err` - If the file does not exist or cannot be read
pub fn read_source(source: &str) -> Result<String, Box<dyn Error>> {
    if source == STDIN_SOURCE {
        log::info!("Reading routes from stdin");
        return read_stdin();
    }

    if !Path::new(source).exists() {
        return Err(format!("Route file does not exist: {source}").into());
    }
    log::info!("Reading routes from file: {source}");
    let text = std::fs::read_to_string(source)
        .map_err(|e| format!("Error reading route file {source}: {e}"))?;
    log::debug!("Read {} bytes from {source}", text.len());
    Ok(text)
}

/// Read both route texts, expected first.
///
/// At most one side may come from stdin.
pub fn read_sources(expected: &str, current: &str) -> Result<(String, String), Box<dyn Error>> {
    if expected == STDIN_SOURCE && current == STDIN_SOURCE {
        return Err("Only one of the expected and current routes can be read from stdin".into());
    }
    Ok((read_source(expected)?, read_source(current)?))
}

/// Read all of stdin.
pub fn read_stdin() -> Result<String, Box<dyn Error>> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("Error reading stdin: {e}"))?;
    Ok(text)
}

/// Split a pasted stream into the expected and current blocks.
///
/// Each block ends at the first empty line. Anything after the second block
/// is ignored. A missing second block is an empty current table.
pub fn split_pasted(text: &str) -> (String, String) {
    let mut lines = text.lines();

    let mut take_block = || {
        let mut block = String::new();
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            block.push_str(line);
            block.push('\n');
        }
        block
    };

    let expected = take_block();
    let current = take_block();
    log::debug!(
        "Pasted input split into {} expected and {} current bytes",
        expected.len(),
        current.len()
    );
    (expected, current)
}
