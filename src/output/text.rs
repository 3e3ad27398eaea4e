//! Plain-text rendering of a report.

use crate::aggregator::{truncate_trace, DumpReport, ReportEntry};
use crate::utils::config::ReportConfig;
use std::fmt::Write;

/// Render the summary and one block per entry
///
/// **Public** - what the CLI prints
pub fn render_report(report: &DumpReport, config: &ReportConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} persistent goroutine(s) found", report.persistent);
    let _ = writeln!(out, "{} temporary goroutine(s) ignored", report.temporary);

    for entry in &report.entries {
        out.push_str(&render_entry(entry, report.truncate_lines, config));
    }

    out
}

/// Render a single group block, ending with a blank line
///
/// `truncate_lines` must be the value the entry's signature was built with,
/// normally `DumpReport::truncate_lines`.
pub fn render_entry(entry: &ReportEntry, truncate_lines: usize, config: &ReportConfig) -> String {
    let trace = display_trace(entry, truncate_lines, config);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} goroutine(s) with similar back trace path",
        entry.group_size
    );
    let _ = writeln!(out, "{} {}", entry.id, entry.status);
    let _ = writeln!(out, "{}", trace);
    out
}

/// Trace text to show for an entry
///
/// The signature is already truncated; the raw trace is cut to the same
/// number of lines here.
fn display_trace(entry: &ReportEntry, truncate_lines: usize, config: &ReportConfig) -> String {
    if config.show_normalized_trace {
        entry.signature.clone()
    } else {
        truncate_trace(&entry.raw_trace, truncate_lines)
    }
}
