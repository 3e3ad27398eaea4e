//! Goroutine dump parsing.
//!
//! This module handles:
//! - Classifying dump lines (header, blank, stack)
//! - Splitting headers into id and status
//! - Turning a dump stream into per-goroutine records

pub mod goroutine_dump;
pub mod schema;

// Re-export main types
pub use goroutine_dump::{classify_line, parse_dump, parse_header, LineKind};
pub use schema::UnitRecord;
