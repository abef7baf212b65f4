//! Compare an expected set of IPv4 routes against a current routing table.
//!
//! Prefixes are extracted from free-form text, then two reports are built:
//! which parts of each expected prefix are not covered by the current routes,
//! and which prefixes appear in only one of the two sets.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use cli::{Cli, OutputFormat};
use std::error::Error;

pub use error::ParseError;
pub use models::{ComparisonReport, DiffRow, MissingRow, Prefix};
pub use processing::compare_tables;

/// Load both route texts as selected on the command line.
pub fn load_inputs(cli: &Cli) -> Result<(String, String), Box<dyn Error>> {
    match (&cli.expected, &cli.current) {
        (Some(expected), Some(current)) => input::read_sources(expected, current),
        _ if cli.paste => {
            log::info!("Reading pasted routes from stdin");
            Ok(input::split_pasted(&input::read_stdin()?))
        }
        _ => Err("Give --expected and --current files, or --paste".into()),
    }
}

/// Run one comparison: read, compare, print and optionally save.
pub fn run(cli: &Cli) -> Result<ComparisonReport, Box<dyn Error>> {
    log::info!("#Start run()");
    let (expected_text, current_text) = load_inputs(cli)?;

    let report = compare_tables(&expected_text, &current_text)?;

    match cli.format {
        OutputFormat::Table => output::print_report(&report),
        OutputFormat::Json => println!("{}", output::to_json(&report)?),
    }

    if !cli.no_save {
        output::save_report(&report, &cli.output)?;
        if cli.format == OutputFormat::Table {
            println!("\nOutput saved to {}", cli.output);
        }
    }

    Ok(report)
}
