/// Undo/redo history management for a single text buffer.
///
/// Provides a `HistoryManager` that keeps bounded undo/redo stacks of
/// whole-buffer snapshots, discards the redo branch on new edits, and
/// coalesces bursts of rapid edits into one snapshot per pause.
pub mod config;
pub mod manager;

pub use config::HistoryConfig;
pub use manager::HistoryManager;
