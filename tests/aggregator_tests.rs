use std::collections::HashMap;
use stuckroutines::aggregator::{
    build_report, classify, group_representatives, mask_addresses, normalize_trace,
    AggregatedUnit, Aggregator,
};
use stuckroutines::parser::UnitRecord;
use stuckroutines::utils::ReportConfig;

const DUMP_A: &str = "goroutine 1 [running]:\nmain.main()\n\n\
goroutine 2 [select]:\nmain.loop(0xc000010000)\n\n\
goroutine 3 [IO wait]:\nnet.poll()\n\n";

const DUMP_B: &str = "goroutine 1 [running]:\nmain.main()\n\n\
goroutine 2 [select, 1 minutes]:\nmain.loop(0xc000020000)\n\n";

const DUMP_C: &str = "goroutine 2 [select, 2 minutes]:\nmain.loop(0xc000030000)\n\n\
goroutine 4 [sleep]:\ntime.Sleep()\n\n";

fn occurrences(aggregator: &Aggregator) -> HashMap<String, usize> {
    aggregator
        .units()
        .map(|unit| (unit.id.clone(), unit.occurrences))
        .collect()
}

fn ingest_all(dumps: &[&str]) -> Aggregator {
    let mut aggregator = Aggregator::new(0);
    for dump in dumps {
        aggregator.ingest_dump(dump.as_bytes()).unwrap();
    }
    aggregator
}

#[test]
fn test_counts_do_not_depend_on_ingestion_order() {
    let orders: [[&str; 3]; 3] = [
        [DUMP_A, DUMP_B, DUMP_C],
        [DUMP_C, DUMP_A, DUMP_B],
        [DUMP_B, DUMP_C, DUMP_A],
    ];

    let baseline = ingest_all(&orders[0]);
    let baseline_max = classify(baseline.units(), false).max_occurrence;

    for order in &orders[1..] {
        let aggregator = ingest_all(order);
        assert_eq!(occurrences(&aggregator), occurrences(&baseline));
        assert_eq!(
            classify(aggregator.units(), false).max_occurrence,
            baseline_max
        );
    }

    assert_eq!(baseline_max, 3);
}

#[test]
fn test_status_and_trace_are_last_write_wins() {
    let aggregator = ingest_all(&[DUMP_A, DUMP_B, DUMP_C]);
    let unit = aggregator.unit("2").unwrap();

    assert_eq!(unit.status, "[select, 2 minutes]:");
    assert_eq!(unit.raw_trace, "main.loop(0xc000030000)\n");
    assert_eq!(unit.signature, "main.loop(0x?)\n");
}

#[test]
fn test_occurrences_bounded_by_dump_count() {
    let aggregator = ingest_all(&[DUMP_A, DUMP_B, DUMP_C]);
    assert!(aggregator
        .units()
        .all(|unit| unit.occurrences <= aggregator.dumps_ingested()));
}

#[test]
fn test_repeated_id_in_one_dump_stays_bounded() {
    let doubled = "goroutine 9 [select]:\nmain.loop()\n\n\
goroutine 9 [select]:\nmain.loop()\n\n";
    let aggregator = ingest_all(&[doubled, DUMP_A]);

    assert!(aggregator
        .units()
        .all(|unit| unit.occurrences <= aggregator.dumps_ingested()));
    assert_eq!(aggregator.unit("9").unwrap().occurrences, 1);
}

#[test]
fn test_classification_is_complete() {
    let aggregator = ingest_all(&[DUMP_A, DUMP_B, DUMP_C]);
    let result = classify(aggregator.units(), false);

    assert_eq!(
        result.persistent_count() + result.transient_count,
        aggregator.len()
    );
    assert!(result.persistent_count() >= 1);
}

#[test]
fn test_masking_is_idempotent() {
    let trace = "main.loop(0xc000030000, 0x1f)\n\t/app/loop.go:7 +0x3b\n";
    let once = normalize_trace(trace, 0);
    assert_eq!(mask_addresses(&once), once);
    assert_eq!(normalize_trace(&once, 0), once);
}

#[test]
fn test_group_sizes_sum_to_persistent_count() {
    let mut aggregator = Aggregator::new(0);
    for (id, trace) in [
        ("1", "a(0x1)\n"),
        ("2", "a(0x2)\n"),
        ("3", "b()\n"),
        ("4", "a(0x3)\n"),
        ("5", "c()\n"),
    ] {
        aggregator.ingest(UnitRecord::new(id, "[select]:").with_trace(trace));
    }

    let classification = classify(aggregator.units(), false);
    let entries = group_representatives(&classification.persistent, true);
    let total: usize = entries.iter().map(|e| e.group_size).sum();

    assert_eq!(total, classification.persistent_count());
    assert_eq!(entries.len(), 3);
}

#[test]
fn test_disabling_grouping_keeps_group_sizes() {
    let units: Vec<AggregatedUnit> = ["x\n", "y\n", "x\n", "x\n", "z\n", "y\n"]
        .iter()
        .enumerate()
        .map(|(i, sig)| AggregatedUnit {
            id: i.to_string(),
            occurrences: 1,
            status: String::new(),
            raw_trace: sig.to_string(),
            signature: sig.to_string(),
        })
        .collect();
    let refs: Vec<&AggregatedUnit> = units.iter().collect();

    let grouped = group_representatives(&refs, true);
    let ungrouped = group_representatives(&refs, false);

    let grouped_sizes: HashMap<&str, usize> = grouped
        .iter()
        .map(|e| (e.signature.as_str(), e.group_size))
        .collect();

    assert_eq!(ungrouped.len(), units.len());
    for entry in &ungrouped {
        assert_eq!(grouped_sizes[entry.signature.as_str()], entry.group_size);
    }
}

#[test]
fn test_keep_temporary_reports_every_unit() {
    let aggregator = ingest_all(&[DUMP_A, DUMP_B]);
    let config = ReportConfig::default().with_keep_temporary(true);

    let report = build_report(&aggregator, &config);

    assert_eq!(report.max_occurrence, 2);
    assert_eq!(report.persistent, aggregator.len());
    assert_eq!(report.temporary, 0);
}
