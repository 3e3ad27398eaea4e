//! Signature grouping, ordering and filtering of persistent goroutines.

use super::units::AggregatedUnit;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One block of the final report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Id of the representative goroutine
    pub id: String,

    /// Last seen status of the representative
    pub status: String,

    /// Last seen trace of the representative
    pub raw_trace: String,

    /// Grouping key shared by every member of the group
    pub signature: String,

    /// Number of persistent goroutines with this signature
    pub group_size: usize,
}

impl ReportEntry {
    fn from_unit(unit: &AggregatedUnit) -> Self {
        Self {
            id: unit.id.clone(),
            status: unit.status.clone(),
            raw_trace: unit.raw_trace.clone(),
            signature: unit.signature.clone(),
            group_size: 0,
        }
    }
}

/// Count group members and pick representatives
///
/// **Public** - main entry point for grouping
///
/// With `group_by_trace` the first unit met for each signature represents
/// the group; otherwise every unit gets an entry. Either way `group_size` is
/// the full membership of the signature, stamped after every unit was
/// counted.
pub fn group_representatives(
    persistent: &[&AggregatedUnit],
    group_by_trace: bool,
) -> Vec<ReportEntry> {
    let mut member_counts: HashMap<&str, usize> = HashMap::new();
    let mut representatives = Vec::new();

    for unit in persistent {
        let members = member_counts.entry(unit.signature.as_str()).or_insert(0);
        if !group_by_trace || *members == 0 {
            representatives.push(ReportEntry::from_unit(unit));
        }
        *members += 1;
    }

    for entry in &mut representatives {
        entry.group_size = member_counts
            .get(entry.signature.as_str())
            .copied()
            .unwrap_or(0);
    }

    representatives
}

/// Stable sort: by signature ascending, or by group size descending
pub fn order_entries(entries: &mut [ReportEntry], sort_by_trace: bool) {
    if sort_by_trace {
        entries.sort_by(|a, b| a.signature.cmp(&b.signature));
    } else {
        entries.sort_by(by_group_size_desc);
    }
}

fn by_group_size_desc(a: &ReportEntry, b: &ReportEntry) -> Ordering {
    b.group_size.cmp(&a.group_size)
}

/// Drop entries whose group is smaller than `min_group_size`
///
/// Values <= 0 disable the filter. Retained entries keep their order.
pub fn filter_entries(entries: &mut Vec<ReportEntry>, min_group_size: i64) {
    if min_group_size <= 0 {
        return;
    }

    entries.retain(|entry| i64::try_from(entry.group_size).unwrap_or(i64::MAX) >= min_group_size);
}
