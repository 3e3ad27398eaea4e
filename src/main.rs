//! Stuckroutines CLI
//!
//! Collects several goroutine dumps of a running Go process (or reads saved
//! ones) and reports the goroutines present in all of them.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use stuckroutines::commands::{execute_analyze, validate_args, AnalyzeArgs};
use stuckroutines::utils::config::{ReportConfig, DEFAULT_ITERATIONS, DEFAULT_MIN_GROUP_SIZE};

/// Stuckroutines - find persistent goroutines in pprof dumps
#[derive(Parser, Debug)]
#[command(name = "stuckroutines")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "Stuckroutines requires either a URL or a list of files obtained from /debug/pprof/goroutine?debug=2"
)]
struct Cli {
    /// Full URL to /debug/pprof/goroutine?debug=2
    #[arg(long, env = "STUCKROUTINES_URL")]
    url: Option<String>,

    /// How many reports to collect to find persisting routines
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Delay between report collections (e.g. 500ms, 5s, 1m)
    #[arg(long, default_value = "5s", value_parser = humantime::parse_duration)]
    delay: Duration,

    /// Do not group goroutines by stack trace
    #[arg(long)]
    no_group: bool,

    /// Sort by trace instead of count of goroutines
    #[arg(long)]
    sort_trace: bool,

    /// Keep temporary goroutines
    #[arg(long)]
    keep_temp: bool,

    /// Filter traces with few goroutines (0 shows everything)
    #[arg(long, default_value_t = DEFAULT_MIN_GROUP_SIZE, allow_negative_numbers = true)]
    min_count: i64,

    /// Keep only this many lines of each trace when grouping (0 keeps all)
    #[arg(long, default_value_t = 0)]
    truncate: usize,

    /// Print traces with addresses masked
    #[arg(long)]
    show_filtered: bool,

    /// Also write the report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Report files obtained from /debug/pprof/goroutine?debug=2
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = ReportConfig::new()
        .with_grouping(!cli.no_group)
        .with_keep_temporary(cli.keep_temp)
        .with_sort_by_trace(cli.sort_trace)
        .with_min_group_size(cli.min_count)
        .with_normalized_trace(cli.show_filtered);

    let args = AnalyzeArgs {
        url: cli.url,
        iterations: cli.iterations,
        delay: cli.delay,
        files: cli.files,
        truncate_lines: cli.truncate,
        config,
        output_json: cli.output,
    };

    if args.has_no_source() {
        Cli::command().print_help()?;
        return Ok(());
    }

    // Validate args first
    validate_args(&args)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute_analyze(&args, &mut handle)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_accepts_duration_strings() {
        let cli = Cli::try_parse_from(["stuckroutines", "--delay", "500ms", "dump.txt"]).unwrap();
        assert_eq!(cli.delay, Duration::from_millis(500));

        let cli = Cli::try_parse_from(["stuckroutines", "--delay", "1m", "dump.txt"]).unwrap();
        assert_eq!(cli.delay, Duration::from_secs(60));
    }

    #[test]
    fn test_delay_defaults_to_five_seconds() {
        let cli = Cli::try_parse_from(["stuckroutines", "dump.txt"]).unwrap();
        assert_eq!(cli.delay, Duration::from_secs(5));
        assert_eq!(cli.min_count, DEFAULT_MIN_GROUP_SIZE);
    }

    #[test]
    fn test_delay_rejects_bare_numbers() {
        assert!(Cli::try_parse_from(["stuckroutines", "--delay", "5", "dump.txt"]).is_err());
    }
}
