//! Sources of raw dump text: an HTTP endpoint or files on disk.

pub mod client;
pub mod files;

pub use client::{collect_dumps, DumpClient};
pub use files::open_dump_file;
