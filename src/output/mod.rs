//! Output formatting for comparison reports.
//!
//! - [`table`] - grid table renderer
//! - [`report`] - plain-text, console and file output
//! - [`json`] - JSON output

mod json;
mod report;
mod table;

pub use json::to_json;
pub use report::{diff_table, missing_table, print_report, render_report, save_report};
pub use table::{format_cell, Align, Table};
