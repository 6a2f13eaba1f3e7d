/// Configuration for the history system.

/// Maximum number of snapshots kept on the undo stack before the
/// oldest entry is evicted.
const DEFAULT_MAX_DEPTH: usize = 100;

/// Minimum idle time in milliseconds between edits before the next
/// edit starts a new debounce burst.
const DEFAULT_QUIET_PERIOD_MS: u64 = 500;

/// Configuration for a `HistoryManager`.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Max snapshots on the undo stack.
    pub max_depth: usize,
    /// Quiet period in milliseconds for burst coalescing.
    pub quiet_period_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
        }
    }
}
