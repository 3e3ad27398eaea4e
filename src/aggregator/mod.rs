//! Aggregation of goroutine records into a persistence report.
//!
//! This module transforms parsed dump records into:
//! - Per-goroutine aggregates keyed by id (across dumps)
//! - A persistent / transient split
//! - Signature groups, ordered and filtered for output

pub mod classifier;
pub mod grouping;
pub mod report;
pub mod signature;
pub mod units;

// Re-export main types and functions
pub use classifier::{classify, Classification};
pub use grouping::{filter_entries, group_representatives, order_entries, ReportEntry};
pub use report::{build_report, DumpReport};
pub use signature::{mask_addresses, normalize_trace, truncate_trace};
pub use units::{AggregatedUnit, Aggregator};
