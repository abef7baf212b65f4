//! Plain-text and console rendering of a [`ComparisonReport`].

use super::table::{Align, Table};
use crate::config::{
    DIFF_HEADERS, DIFF_HEADING, FULLY_COVERED_MESSAGE, MISSING_HEADERS, MISSING_HEADING,
};
use crate::models::ComparisonReport;
use colored::Colorize;
use std::error::Error;

/// Grid table of the missing-coverage rows.
pub fn missing_table(report: &ComparisonReport) -> Table {
    let mut table = Table::new(&MISSING_HEADERS).align(0, Align::Right);
    for row in &report.missing {
        table.add_row([row.serial.to_string(), row.expected.clone(), row.uncovered.clone()]);
    }
    table
}

/// Grid table of the difference rows.
///
/// The columns are independent sorted lists placed side by side.
pub fn diff_table(report: &ComparisonReport) -> Table {
    let mut table = Table::new(&DIFF_HEADERS).align(0, Align::Right);
    for row in &report.diff {
        table.add_row([
            row.serial.to_string(),
            row.expected_only.clone(),
            row.actual_only.clone(),
        ]);
    }
    table
}

/// Render the whole report as uncoloured text.
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();
    if report.fully_covered() {
        out.push_str(FULLY_COVERED_MESSAGE);
        out.push('\n');
    } else {
        out.push_str(MISSING_HEADING);
        out.push('\n');
        out.push_str(&missing_table(report).render());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(DIFF_HEADING);
    out.push('\n');
    out.push_str(&diff_table(report).render());
    out.push('\n');
    out
}

/// Print the report to stdout with highlighted headings.
pub fn print_report(report: &ComparisonReport) {
    if report.fully_covered() {
        println!("{}", FULLY_COVERED_MESSAGE.green());
    } else {
        println!("{}", MISSING_HEADING.red().bold());
        println!("{}", missing_table(report));
    }
    println!("\n{}", DIFF_HEADING.yellow().bold());
    println!("{}", diff_table(report));
}

/// Write the uncoloured report to `path`, prefixed with a timestamp line.
pub fn save_report(report: &ComparisonReport, path: &str) -> Result<(), Box<dyn Error>> {
    let now = chrono::Local::now();
    let text = format!(
        "Route comparison generated {}\n\n{}",
        now.format("%Y-%m-%d %H:%M:%S"),
        render_report(report)
    );
    std::fs::write(path, text).map_err(|e| format!("Error writing report file {path}: {e}"))?;
    log::info!("Report written to {path}");
    Ok(())
}
