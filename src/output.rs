// src/output.rs

//! Renders an `OperationReport` as the text both adapters display.

use crate::constants::REPORT_RULE;
use crate::report::OperationReport;
use std::io::{self, Write};

fn status(ok: bool) -> &'static str {
    if ok {
        "Success"
    } else {
        "Failed"
    }
}

/// Writes the report: messages, match total, compression line, then both statuses.
///
/// # Examples
///
/// ```
/// use template_rebrand::output::render_report;
/// use template_rebrand::report::OperationReport;
///
/// let report = OperationReport {
///     pattern: "TPL".to_string(),
///     messages: vec!["Files extracted successfully.".to_string()],
///     total_matches: 3,
///     rename_success: true,
///     compress_success: false,
///     archive_path: None,
///     compress_message: "Compression failed: disk full".to_string(),
/// };
/// let text = render_report(&report);
/// assert!(text.contains("Total matches found for 'TPL': 3"));
/// assert!(text.contains("Rename Status: Success"));
/// assert!(text.contains("Compress Status: Failed"));
/// ```
pub fn write_report(report: &OperationReport, writer: &mut dyn Write) -> io::Result<()> {
    for msg in &report.messages {
        writeln!(writer, "{}", msg)?;
    }
    writeln!(
        writer,
        "\nTotal matches found for '{}': {}",
        report.pattern, report.total_matches
    )?;
    writeln!(writer, "{}", report.compress_message)?;
    writeln!(writer, "\nRename Status: {}", status(report.rename_success))?;
    writeln!(writer, "Compress Status: {}", status(report.compress_success))?;
    writeln!(writer, "{}", REPORT_RULE)?;
    Ok(())
}

/// Renders the report into a `String`.
pub fn render_report(report: &OperationReport) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(report, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
