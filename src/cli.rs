//! Command line arguments.

use crate::config;
use clap::{ArgGroup, Parser, ValueEnum};

/// Compare expected routes against a current routing table.
///
/// Prefixes (a.b.c.d/len) are pulled out of any text, so routing table dumps
/// and config snippets can be used as they are.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
#[command(group(ArgGroup::new("source").required(true).args(["expected", "paste"])))]
pub struct Cli {
    /// File with the expected routes ("-" for stdin)
    #[arg(short, long, requires = "current")]
    pub expected: Option<String>,

    /// File with the current routing table ("-" for stdin)
    #[arg(short, long, requires = "expected")]
    pub current: Option<String>,

    /// Read both sides from stdin, expected first, separated by an empty line
    #[arg(short, long, conflicts_with_all = ["expected", "current"])]
    pub paste: bool,

    /// Where to save the plain-text report
    #[arg(short, long, env = config::ENV_OUTPUT_FILE, default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Do not save the report to a file
    #[arg(long)]
    pub no_save: bool,

    /// Console output format
    #[arg(short, long, value_enum, env = config::ENV_FORMAT, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// log4rs configuration file
    #[arg(long, env = config::ENV_LOG_CONFIG, default_value = config::DEFAULT_LOG_CONFIG)]
    pub log_config: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Grid tables
    Table,
    /// Pretty printed JSON
    Json,
}
