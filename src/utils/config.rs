//! Configuration and constants for the CLI and the report engine.

use std::time::Duration;

/// Default timeout for dump collection requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// How many dumps to collect from a URL by default
pub const DEFAULT_ITERATIONS: usize = 2;

/// Delay between two dump collections
pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// Groups smaller than this are hidden unless overridden on the command line
pub const DEFAULT_MIN_GROUP_SIZE: i64 = 10;

// Every record header in a debug=2 goroutine dump starts with this token
pub const UNIT_HEADER_TOKEN: &str = "goroutine";

// Placeholder written over every hex address in a trace
pub const ADDRESS_PLACEHOLDER: &str = "0x?";

/// Settings consumed by the report stages.
///
/// Built once from command line flags and passed by reference into each stage;
/// nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Collapse units sharing a signature into one entry
    pub group_by_trace: bool,

    /// Treat every unit as persistent, whatever its occurrence count
    pub keep_temporary: bool,

    /// Order by signature instead of group size
    pub sort_by_trace: bool,

    /// Hide entries whose group is smaller than this (<= 0 disables)
    pub min_group_size: i64,

    /// Print the masked signature instead of the raw trace
    pub show_normalized_trace: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            group_by_trace: true,
            keep_temporary: false,
            sort_by_trace: false,
            min_group_size: 0,
            show_normalized_trace: false,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grouping(mut self, group_by_trace: bool) -> Self {
        self.group_by_trace = group_by_trace;
        self
    }

    pub fn with_keep_temporary(mut self, keep_temporary: bool) -> Self {
        self.keep_temporary = keep_temporary;
        self
    }

    pub fn with_sort_by_trace(mut self, sort_by_trace: bool) -> Self {
        self.sort_by_trace = sort_by_trace;
        self
    }

    pub fn with_min_group_size(mut self, min_group_size: i64) -> Self {
        self.min_group_size = min_group_size;
        self
    }

    pub fn with_normalized_trace(mut self, show_normalized_trace: bool) -> Self {
        self.show_normalized_trace = show_normalized_trace;
        self
    }
}
