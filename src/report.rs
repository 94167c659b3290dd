//! Report formatting for scan results.
//!
//! This module turns a `ScanResult` into the printable report lines. All
//! output formatting lives here so the scanner itself stays a pure function
//! from text to result.

use crate::scanner::result::ScanResult;

/// Formats the report in output order: mismatch diagnostics first, in the
/// order they were discovered, then the four summary lines.
pub fn format_report(result: &ScanResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect();

    lines.push(format!("Braces: {}", result.braces));
    lines.push(format!("Parens: {}", result.parens));
    lines.push(format!("Brackets: {}", result.brackets));
    lines.push(format!("Open Tags: [{}]", result.open_tags.join(", ")));

    lines
}
