//! Output writers for dump reports.
//!
//! - Plain text, as printed by the CLI
//! - Pretty JSON files

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{validate_output_path, write_report};
pub use text::{render_entry, render_report};
