//! Record types produced by the dump parser.

/// One goroutine as it appeared in a single dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRecord {
    /// Dump-local identifier (the number after `goroutine`)
    pub id: String,

    /// State text following the id, e.g. `[chan receive, 5 minutes]:`
    pub status: String,

    /// Stack lines, each terminated by a newline
    pub raw_trace: String,
}

impl UnitRecord {
    /// Create a record with an empty trace
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            raw_trace: String::new(),
        }
    }

    /// Builder used mostly by tests and fixtures
    pub fn with_trace(mut self, raw_trace: impl Into<String>) -> Self {
        self.raw_trace = raw_trace.into();
        self
    }

    /// Append one stack line
    pub fn push_line(&mut self, line: &str) {
        self.raw_trace.push_str(line);
        self.raw_trace.push('\n');
    }
}
