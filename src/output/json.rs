//! JSON persistence of dump reports.
//!
//! The text report is for humans; the JSON file keeps every entry, the
//! summary counts and the truncation setting so another tool (or a later
//! run) can compare reports.

use crate::aggregator::DumpReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a report as pretty-printed JSON
///
/// **Public** - used by the analyze command for `--output`
///
/// Missing parent directories are created.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or an uncreatable parent
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error while writing
pub fn write_report(report: &DumpReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
        })?;
    }

    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    info!(
        "Wrote {} report entries to {}",
        report.entries.len(),
        output_path.display()
    );

    Ok(())
}

/// Check that `path` can be used as an output file
///
/// **Public** - lets callers fail before spending time on collection
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Load a report previously written by [`write_report`]
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DumpReport, OutputError> {
    let input_path = input_path.as_ref();

    let file = File::open(input_path).map_err(|source| OutputError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;
    let report: DumpReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Loaded report {} ({} entries, schema {})",
        input_path.display(),
        report.entries.len(),
        report.version
    );

    Ok(report)
}
