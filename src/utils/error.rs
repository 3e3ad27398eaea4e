//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining dump text
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected response from {url}: HTTP {status}")]
    BadStatus { url: String, status: u16 },

    #[error("Cannot read dump file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during dump parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed goroutine header at line {line}: {header:?}")]
    MalformedHeader { line: usize, header: String },

    #[error("Failed to read dump: {0}")]
    Read(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Cannot read report {}: {source}", path.display())]
    ReadFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
