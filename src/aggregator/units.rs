//! Cross-dump aggregation of goroutine records.
//!
//! Goroutine ids are stable for the lifetime of a process, so the same id
//! showing up in several dumps of one process is the same goroutine.

use super::signature::normalize_trace;
use crate::parser::{parse_dump, UnitRecord};
use crate::utils::error::ParseError;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::io::BufRead;

/// Everything known about one goroutine id across all dumps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedUnit {
    pub id: String,

    /// Number of dumps this id was seen in
    pub occurrences: usize,

    /// Status from the most recent record
    pub status: String,

    /// Trace from the most recent record
    pub raw_trace: String,

    /// Masked (and possibly truncated) form of `raw_trace`
    pub signature: String,
}

/// Owner of the id -> unit mapping
///
/// **Public** - fed one dump at a time by the collector
#[derive(Debug, Default)]
pub struct Aggregator {
    units: HashMap<String, AggregatedUnit>,
    truncate_lines: usize,
    dumps_ingested: usize,
}

impl Aggregator {
    /// Create an empty aggregator
    ///
    /// `truncate_lines` bounds the signature length (0 keeps full traces).
    pub fn new(truncate_lines: usize) -> Self {
        Self {
            units: HashMap::new(),
            truncate_lines,
            dumps_ingested: 0,
        }
    }

    /// Merge a single record
    pub fn ingest(&mut self, record: UnitRecord) {
        let signature = normalize_trace(&record.raw_trace, self.truncate_lines);

        match self.units.get_mut(&record.id) {
            Some(unit) => {
                unit.occurrences += 1;
                unit.status = record.status;
                unit.raw_trace = record.raw_trace;
                unit.signature = signature;
            }
            None => {
                self.units.insert(
                    record.id.clone(),
                    AggregatedUnit {
                        id: record.id,
                        occurrences: 1,
                        status: record.status,
                        raw_trace: record.raw_trace,
                        signature,
                    },
                );
            }
        }
    }

    /// Parse one complete dump and merge all of its records
    ///
    /// Nothing is merged if the dump fails to parse. An id listed twice in
    /// the same dump counts once; its last record wins.
    ///
    /// # Returns
    /// Number of records found in the dump
    pub fn ingest_dump(&mut self, reader: impl BufRead) -> Result<usize, ParseError> {
        let records = parse_dump(reader)?;
        let count = records.len();

        let mut latest: HashMap<String, UnitRecord> = HashMap::with_capacity(count);
        for record in records {
            if let Some(previous) = latest.insert(record.id.clone(), record) {
                debug!("Goroutine {} listed twice in one dump", previous.id);
            }
        }

        for record in latest.into_values() {
            self.ingest(record);
        }

        self.dumps_ingested += 1;
        debug!(
            "Ingested dump #{} ({} goroutines, {} distinct so far)",
            self.dumps_ingested,
            count,
            self.units.len()
        );

        Ok(count)
    }

    /// All units, in unspecified order
    pub fn units(&self) -> impl Iterator<Item = &AggregatedUnit> + Clone {
        self.units.values()
    }

    pub fn unit(&self, id: &str) -> Option<&AggregatedUnit> {
        self.units.get(id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn dumps_ingested(&self) -> usize {
        self.dumps_ingested
    }

    /// Line limit the signatures were computed with (0 means full traces)
    pub fn truncate_lines(&self) -> usize {
        self.truncate_lines
    }
}
