//! Assemble the final report from an aggregator.

use super::classifier::classify;
use super::grouping::{filter_entries, group_representatives, order_entries, ReportEntry};
use super::units::Aggregator;
use crate::utils::config::{ReportConfig, SCHEMA_VERSION};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

/// Top-level report, also written as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// How many dumps were merged
    pub dumps_ingested: usize,

    /// Trace line limit used for signatures and raw trace display (0 disables)
    pub truncate_lines: usize,

    /// Highest occurrence count of any goroutine
    pub max_occurrence: usize,

    /// Goroutines seen in every dump (or all of them with keep-temporary)
    pub persistent: usize,

    /// Goroutines that were ignored
    pub temporary: usize,

    /// Ordered, filtered groups
    pub entries: Vec<ReportEntry>,
}

/// Classify, group, order and filter everything the aggregator holds
///
/// **Public** - main entry point for reporting
///
/// Summary counts are computed before filtering and are never affected by
/// `min_group_size`.
pub fn build_report(aggregator: &Aggregator, config: &ReportConfig) -> DumpReport {
    let classification = classify(aggregator.units(), config.keep_temporary);

    let mut entries = group_representatives(&classification.persistent, config.group_by_trace);
    order_entries(&mut entries, config.sort_by_trace);

    let before_filter = entries.len();
    filter_entries(&mut entries, config.min_group_size);

    debug!(
        "Report has {} entries ({} hidden below group size {})",
        entries.len(),
        before_filter - entries.len(),
        config.min_group_size
    );

    DumpReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        dumps_ingested: aggregator.dumps_ingested(),
        truncate_lines: aggregator.truncate_lines(),
        max_occurrence: classification.max_occurrence,
        persistent: classification.persistent_count(),
        temporary: classification.transient_count,
        entries,
    }
}
