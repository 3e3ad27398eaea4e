//! Line-oriented parser for `/debug/pprof/goroutine?debug=2` dumps.
//!
//! Each record is a header line (`goroutine <id> <status>`), a block of
//! stack lines and a terminating blank line. The parser is a small state
//! machine: it is either waiting for a header or accumulating a record.

use super::schema::UnitRecord;
use crate::utils::config::UNIT_HEADER_TOKEN;
use crate::utils::error::ParseError;
use log::{debug, trace};
use std::io::BufRead;

/// Category of a single dump line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts a new record
    Header,
    /// Terminates the record in progress
    Blank,
    /// Part of the current stack trace
    Body,
}

/// Classify one line (already stripped of its line terminator)
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(UNIT_HEADER_TOKEN) {
        LineKind::Header
    } else if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Body
    }
}

/// Parse a full dump into records
///
/// **Public** - main entry point for parsing
///
/// Records are returned only once the whole stream has been read, so a
/// malformed dump contributes nothing. A record that is not followed by a
/// blank line before EOF is dropped.
///
/// # Errors
/// * `ParseError::MalformedHeader` - header without an id and a status
/// * `ParseError::Read` - the underlying reader failed
pub fn parse_dump(reader: impl BufRead) -> Result<Vec<UnitRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<UnitRecord> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        match classify_line(line) {
            LineKind::Header => {
                current = Some(parse_header(line, index + 1)?);
            }
            LineKind::Blank => match current.take() {
                Some(record) => records.push(record),
                None => trace!("Ignoring blank line {} outside of a record", index + 1),
            },
            LineKind::Body => match current.as_mut() {
                Some(record) => record.push_line(line),
                None => trace!("Ignoring line {} outside of a record", index + 1),
            },
        }
    }

    if let Some(record) = current {
        debug!("Dropping unterminated record for goroutine {}", record.id);
    }

    debug!("Parsed {} goroutine records", records.len());

    Ok(records)
}

/// Split a header line into id and status
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_header(line: &str, line_number: usize) -> Result<UnitRecord, ParseError> {
    let malformed = || ParseError::MalformedHeader {
        line: line_number,
        header: line.to_string(),
    };

    let (_, rest) = next_field(line).ok_or_else(malformed)?;
    let (id, status) = next_field(rest).ok_or_else(malformed)?;

    if status.is_empty() {
        return Err(malformed());
    }

    Ok(UnitRecord::new(id, status))
}

/// Take the first whitespace-separated field, returning it and the remainder
fn next_field(text: &str) -> Option<(&str, &str)> {
    let (field, rest) = text.trim_start().split_once(char::is_whitespace)?;
    if field.is_empty() {
        return None;
    }
    Some((field, rest.trim_start()))
}
