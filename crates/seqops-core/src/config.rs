//! Query configuration carried by every pipeline.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SORT_DEPTH_WARN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Hard cap on elements an eager operator may buffer. `None` is unbounded.
    pub max_buffer_len: Option<usize>,

    /// Quicksort recursion depth at which a warning is emitted. The sort still
    /// runs to completion; degenerate inputs recurse O(n) deep.
    pub sort_depth_warn: usize,

    /// Emit a trace event with the length of every materialized buffer.
    pub trace_materialize: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_buffer_len: None,
            sort_depth_warn: DEFAULT_SORT_DEPTH_WARN,
            trace_materialize: false,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQOPS_MAX_BUFFER_LEN`: element cap for eager operators
    /// - `SEQOPS_SORT_DEPTH_WARN`: quicksort depth warning threshold
    /// - `SEQOPS_TRACE_MATERIALIZE`: `true`/`false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`QueryConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SEQOPS_MAX_BUFFER_LEN") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.max_buffer_len = Some(v);
            }
        }

        if let Some(s) = lookup("SEQOPS_SORT_DEPTH_WARN") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.sort_depth_warn = v;
            }
        }

        if let Some(s) = lookup("SEQOPS_TRACE_MATERIALIZE") {
            if let Ok(v) = s.trim().parse::<bool>() {
                cfg.trace_materialize = v;
            }
        }

        cfg
    }

    pub fn with_max_buffer_len(mut self, limit: usize) -> Self {
        self.max_buffer_len = Some(limit);
        self
    }

    pub fn with_sort_depth_warn(mut self, depth: usize) -> Self {
        self.sort_depth_warn = depth;
        self
    }

    pub fn with_trace_materialize(mut self, on: bool) -> Self {
        self.trace_materialize = on;
        self
    }
}
