use crate::utils::config::{ReportConfig, DEFAULT_DELAY, DEFAULT_ITERATIONS};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// URL of a live `/debug/pprof/goroutine?debug=2` endpoint
    pub url: Option<String>,

    /// How many dumps to fetch from `url`
    pub iterations: usize,

    /// Pause between two fetches
    pub delay: Duration,

    /// Dumps saved to disk, loaded after the URL ones
    pub files: Vec<PathBuf>,

    /// Trace lines kept in signatures and displayed traces (0 keeps all)
    pub truncate_lines: usize,

    /// Grouping, ordering and display settings
    pub config: ReportConfig,

    /// Also write the report as JSON here
    pub output_json: Option<PathBuf>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            url: None,
            iterations: DEFAULT_ITERATIONS,
            delay: DEFAULT_DELAY,
            files: Vec::new(),
            truncate_lines: 0,
            config: ReportConfig::default(),
            output_json: None,
        }
    }
}

impl AnalyzeArgs {
    /// True when there is nothing to analyze
    pub fn has_no_source(&self) -> bool {
        self.url.is_none() && self.files.is_empty()
    }
}
