//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Fetches dumps from a URL (if given)
//! 2. Loads dumps from files (if given)
//! 3. Classifies and groups goroutines
//! 4. Prints the report
//! 5. Optionally writes it as JSON

use super::models::AnalyzeArgs;
use crate::aggregator::{build_report, Aggregator, DumpReport};
use crate::collector::{collect_dumps, open_dump_file, DumpClient};
use crate::output::{render_report, validate_output_path, write_report};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// The text report goes to `writer`. Any collection or parse failure aborts
/// the run.
pub fn execute_analyze(args: &AnalyzeArgs, writer: &mut impl Write) -> Result<DumpReport> {
    let start_time = Instant::now();
    let mut aggregator = Aggregator::new(args.truncate_lines);

    // Step 1: live endpoint
    if let Some(url) = &args.url {
        info!("Collecting {} dump(s) from {}", args.iterations, url);

        let client = DumpClient::new(url.as_str()).context("Failed to create HTTP client")?;

        collect_dumps(&client, args.iterations, args.delay, |body: Vec<u8>| {
            let count = aggregator
                .ingest_dump(body.as_slice())
                .with_context(|| format!("Failed to parse dump from {}", url))?;
            debug!("Dump from {} contained {} goroutines", url, count);
            Ok::<(), anyhow::Error>(())
        })
        .with_context(|| format!("Failed to collect dumps from {}", url))?;
    }

    // Step 2: files
    for path in &args.files {
        info!("Loading dump: {}", path.display());

        let reader = open_dump_file(path)?;
        let count = aggregator
            .ingest_dump(reader)
            .with_context(|| format!("Failed to parse dump file {}", path.display()))?;

        debug!("{} contained {} goroutines", path.display(), count);
    }

    // Step 3: report
    let report = build_report(&aggregator, &args.config);

    // Step 4: text output
    writer
        .write_all(render_report(&report, &args.config).as_bytes())
        .context("Failed to write report")?;

    // Step 5: JSON output
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    info!(
        "Analyzed {} dump(s) in {:.2}s",
        report.dumps_ingested,
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.has_no_source() {
        anyhow::bail!("Either a URL or at least one dump file is required");
    }

    if let Some(url) = &args.url {
        if url.is_empty() {
            anyhow::bail!("URL cannot be empty");
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("URL must start with http:// or https://");
        }

        if args.iterations == 0 {
            anyhow::bail!("iterations must be greater than 0");
        }
    }

    if let Some(path) = &args.output_json {
        validate_output_path(path)?;
    }

    Ok(())
}
