//! Persistent vs. transient classification.
//!
//! A goroutine is persistent when it was seen in as many dumps as the most
//! frequently seen goroutine. With two or more dumps that means "present in
//! all of them", which is what a stuck goroutine looks like.

use super::units::AggregatedUnit;
use log::debug;

/// Result of splitting the aggregated units
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    /// Highest occurrence count over all units (0 when there are none)
    pub max_occurrence: usize,

    /// Units kept for reporting, in input order
    pub persistent: Vec<&'a AggregatedUnit>,

    /// Units seen in fewer dumps than `max_occurrence`
    pub transient_count: usize,
}

impl Classification<'_> {
    pub fn persistent_count(&self) -> usize {
        self.persistent.len()
    }
}

/// Classify units in two passes
///
/// **Public** - runs once after all dumps are ingested
///
/// `max_occurrence` always reflects real counts. With `keep_temporary` every
/// unit is reported as persistent and the transient count stays at 0.
pub fn classify<'a, I>(units: I, keep_temporary: bool) -> Classification<'a>
where
    I: IntoIterator<Item = &'a AggregatedUnit>,
    I::IntoIter: Clone,
{
    let units = units.into_iter();

    let max_occurrence = units
        .clone()
        .map(|unit| unit.occurrences)
        .max()
        .unwrap_or(0);

    let mut persistent = Vec::new();
    let mut transient_count = 0;

    for unit in units {
        if unit.occurrences == max_occurrence || keep_temporary {
            persistent.push(unit);
        } else {
            transient_count += 1;
        }
    }

    debug!(
        "Classified goroutines: {} persistent, {} transient (max occurrence {})",
        persistent.len(),
        transient_count,
        max_occurrence
    );

    Classification {
        max_occurrence,
        persistent,
        transient_count,
    }
}
