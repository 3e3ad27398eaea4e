//! Stuckroutines
//!
//! Finds goroutines that survive across several
//! `/debug/pprof/goroutine?debug=2` dumps of the same process and groups
//! them by stack trace, so leaked or stuck goroutines stand out.
//!
//! This crate provides the core implementation for the
//! `stuckroutines` CLI tool.
//!
//! ## Example
//!
//! ```
//! use stuckroutines::aggregator::{build_report, Aggregator};
//! use stuckroutines::utils::ReportConfig;
//!
//! let dump = "goroutine 7 [select]:\nmain.loop()\n\n";
//!
//! let mut aggregator = Aggregator::new(0);
//! aggregator.ingest_dump(dump.as_bytes()).unwrap();
//! aggregator.ingest_dump(dump.as_bytes()).unwrap();
//!
//! let report = build_report(&aggregator, &ReportConfig::default());
//! assert_eq!(report.persistent, 1);
//! ```

pub mod aggregator;
pub mod collector;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
