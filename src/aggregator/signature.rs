//! Canonical stack signatures.
//!
//! Two goroutines parked on the same code path usually differ only in the
//! pointer arguments and offsets printed in their traces. Masking every hex
//! literal makes those traces compare equal.

use crate::utils::config::ADDRESS_PLACEHOLDER;
use regex::Regex;
use std::sync::LazyLock;

static HEX_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[0-9a-f]+").expect("valid hex address regex"));

/// Replace every `0x...` literal with the `0x?` placeholder
pub fn mask_addresses(trace: &str) -> String {
    HEX_ADDRESS
        .replace_all(trace, ADDRESS_PLACEHOLDER)
        .into_owned()
}

/// Keep at most `max_lines` lines of a newline-terminated trace
///
/// A trailing newline is re-appended when lines were dropped.
/// `max_lines == 0` leaves the text untouched.
pub fn truncate_trace(trace: &str, max_lines: usize) -> String {
    if max_lines == 0 {
        return trace.to_string();
    }

    let lines: Vec<&str> = trace.split('\n').collect();
    if lines.len() > max_lines {
        let mut truncated = lines[..max_lines].join("\n");
        truncated.push('\n');
        truncated
    } else {
        trace.to_string()
    }
}

/// Compute the grouping signature of a raw trace
///
/// **Public** - used by the aggregator on every update
pub fn normalize_trace(raw_trace: &str, truncate_lines: usize) -> String {
    truncate_trace(&mask_addresses(raw_trace), truncate_lines)
}
