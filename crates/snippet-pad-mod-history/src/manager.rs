/// Core undo/redo manager.
///
/// Edits are captured as whole-buffer snapshots on a bounded undo stack.
/// Recording a new edit discards the redo branch; when the stack exceeds
/// its configured depth the oldest snapshot is evicted first.
use std::time::{Duration, Instant};

use crate::config::HistoryConfig;

/// Manages undo/redo history for a single editing session.
///
/// The manager never owns the live buffer. `undo`/`redo` take the
/// buffer's current content and return the snapshot the caller should
/// install in its place; an empty stack is a silent no-op (`None`),
/// never an error.
pub struct HistoryManager {
    /// Undo stack, most recent snapshot last.
    undo_stack: Vec<String>,
    /// Redo stack, most recently undone snapshot last.
    redo_stack: Vec<String>,
    /// Timestamp of the last edit seen by `debounced_record`, recorded
    /// or suppressed. The quiet window is measured from here, so every
    /// edit resets the window.
    last_edit_time: Option<Instant>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl std::fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .field("in_burst", &self.last_edit_time.is_some())
            .finish()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl HistoryManager {
    /// Creates a new empty HistoryManager.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            last_edit_time: None,
            config,
        }
    }

    /// Records an edit snapshot unconditionally.
    ///
    /// Clears the redo stack (a forward edit invalidates the redo
    /// branch) and evicts the oldest snapshot when the stack exceeds
    /// its configured depth. Identical consecutive snapshots are kept;
    /// de-duplication is deliberately not performed.
    pub fn record_edit(&mut self, content: &str) {
        self.undo_stack.push(content.to_string());
        self.redo_stack.clear();

        if self.undo_stack.len() > self.config.max_depth {
            let excess = self.undo_stack.len() - self.config.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    /// Records an edit only if it starts a new burst.
    ///
    /// The first edit after a quiet period records a snapshot
    /// immediately; edits arriving within `quiet_period_ms` of the
    /// previous edit are suppressed. Every edit, suppressed or not,
    /// resets the quiet window, so continuous typing produces one
    /// snapshot per pause.
    pub fn debounced_record(&mut self, content: &str) {
        self.debounced_record_at(content, Instant::now());
    }

    /// Time-injectable variant of [`debounced_record`](Self::debounced_record).
    ///
    /// Exposed so callers with their own clock (and tests) can drive
    /// the quiet window deterministically.
    pub fn debounced_record_at(&mut self, content: &str, now: Instant) {
        let quiet = Duration::from_millis(self.config.quiet_period_ms);
        let within_burst = self
            .last_edit_time
            .is_some_and(|last| now.duration_since(last) < quiet);
        self.last_edit_time = Some(now);

        if within_burst {
            tracing::trace!("edit coalesced into current burst");
            return;
        }
        self.record_edit(content);
    }

    /// Ends the current burst so the next debounced edit records
    /// immediately.
    ///
    /// Called around discrete actions (project import, undo/redo) that
    /// should never be coalesced with surrounding keystrokes.
    pub fn end_burst(&mut self) {
        self.last_edit_time = None;
    }

    /// Undoes the most recent snapshot.
    ///
    /// Pops the top of the undo stack and returns it as the content the
    /// caller should install into the live buffer; `current` (the
    /// buffer content before the undo) is pushed onto the redo stack so
    /// a following `redo` restores it. Returns `None` if there is
    /// nothing to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_string());
        Some(snapshot)
    }

    /// Redoes the most recently undone snapshot.
    ///
    /// Symmetric to [`undo`](Self::undo): pops the redo stack, pushes
    /// `current` onto the undo stack, and returns the popped snapshot.
    /// Returns `None` if there is nothing to redo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_string());
        Some(snapshot)
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Clears all history and ends any burst in progress.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.last_edit_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> HistoryConfig {
        HistoryConfig {
            max_depth: 3,
            quiet_period_ms: 500,
        }
    }

    // --- Basic undo/redo ---

    #[test]
    fn test_undo_redo_basic() {
        let mut mgr = HistoryManager::default();
        mgr.record_edit("a");
        mgr.record_edit("ab");

        assert!(mgr.can_undo());
        let restored = mgr.undo("abc").expect("undo");
        assert_eq!(restored, "ab");

        assert!(mgr.can_redo());
        let restored = mgr.redo("ab").expect("redo");
        assert_eq!(restored, "abc");
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut mgr = HistoryManager::default();
        assert!(!mgr.can_undo());
        assert!(!mgr.can_redo());
        assert!(mgr.undo("x").is_none());
        assert!(mgr.redo("x").is_none());
    }

    #[test]
    fn test_second_undo_after_initial_snapshot_consumed() {
        let mut mgr = HistoryManager::default();
        mgr.record_edit("initial");

        assert!(mgr.undo("typed").is_some());
        assert!(mgr.undo("initial").is_none());
    }

    #[test]
    fn test_redo_cleared_on_new_edit() {
        let mut mgr = HistoryManager::default();
        mgr.record_edit("a");
        mgr.record_edit("b");

        mgr.undo("b");
        assert!(mgr.can_redo());

        mgr.record_edit("c");
        assert!(!mgr.can_redo());
        assert!(mgr.redo("c").is_none());
    }

    #[test]
    fn test_undo_pushes_current_onto_redo() {
        let mut mgr = HistoryManager::default();
        mgr.record_edit("x");

        let restored = mgr.undo("y").expect("undo");
        assert_eq!(restored, "x");
        assert_eq!(mgr.redo_stack, vec!["y".to_string()]);

        let restored = mgr.redo("x").expect("redo");
        assert_eq!(restored, "y");
        assert_eq!(mgr.undo_stack.last().map(String::as_str), Some("x"));
    }

    #[test]
    fn test_undo_redo_round_trip_restores_pre_undo_content() {
        let mut mgr = HistoryManager::default();
        mgr.record_edit("one");
        mgr.record_edit("two");

        let before_undo = "three";
        let restored = mgr.undo(before_undo).expect("undo");
        let back = mgr.redo(&restored).expect("redo");
        assert_eq!(back, before_undo);
    }

    #[test]
    fn test_duplicate_snapshots_are_kept() {
        let mut mgr = HistoryManager::default();
        mgr.record_edit("same");
        mgr.record_edit("same");
        assert_eq!(mgr.depth(), 2);
    }

    #[test]
    fn test_clear() {
        let mut mgr = HistoryManager::default();
        mgr.record_edit("a");
        mgr.undo("b");
        mgr.clear();
        assert!(!mgr.can_undo());
        assert!(!mgr.can_redo());
        assert_eq!(mgr.depth(), 0);
    }

    // --- Capacity ---

    #[test]
    fn test_oldest_snapshot_evicted_at_capacity() {
        let mut mgr = HistoryManager::new(small_config());
        for s in ["a", "b", "c", "d"] {
            mgr.record_edit(s);
        }
        assert_eq!(mgr.undo_stack, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_depth_never_exceeds_max() {
        let mut mgr = HistoryManager::new(small_config());
        for i in 0..50 {
            mgr.record_edit(&format!("edit{i}"));
            assert!(mgr.depth() <= 3);
        }
    }

    // --- Debounce ---

    #[test]
    fn test_burst_coalesced_into_one_snapshot() {
        let mut mgr = HistoryManager::default();
        let t0 = Instant::now();

        // 10 edits within 100ms, quiet period 500ms
        for i in 0..10 {
            let content = format!("burst{i}");
            mgr.debounced_record_at(&content, t0 + Duration::from_millis(i * 10));
        }
        assert_eq!(mgr.depth(), 1);

        // After the quiet period elapses, the next edit starts a new burst
        mgr.debounced_record_at("later", t0 + Duration::from_millis(700));
        assert_eq!(mgr.depth(), 2);
    }

    #[test]
    fn test_quiet_window_resets_on_suppressed_edits() {
        let mut mgr = HistoryManager::default();
        let t0 = Instant::now();

        // Edits every 400ms: each one is within 500ms of the previous,
        // so the whole run stays one burst.
        for i in 0..5 {
            let content = format!("c{i}");
            mgr.debounced_record_at(&content, t0 + Duration::from_millis(i * 400));
        }
        assert_eq!(mgr.depth(), 1);
    }

    #[test]
    fn test_first_edit_of_burst_records_immediately() {
        let mut mgr = HistoryManager::default();
        mgr.debounced_record_at("first", Instant::now());
        assert_eq!(mgr.depth(), 1);
    }

    #[test]
    fn test_end_burst_forces_next_record() {
        let mut mgr = HistoryManager::default();
        let t0 = Instant::now();

        mgr.debounced_record_at("a", t0);
        mgr.end_burst();
        mgr.debounced_record_at("b", t0 + Duration::from_millis(10));
        assert_eq!(mgr.depth(), 2);
    }

    #[test]
    fn test_suppressed_edit_does_not_clear_redo() {
        let mut mgr = HistoryManager::default();
        let t0 = Instant::now();

        mgr.debounced_record_at("a", t0);
        mgr.undo("b");
        assert!(mgr.can_redo());

        // Within the quiet window: no snapshot is pushed, redo survives
        mgr.debounced_record_at("c", t0 + Duration::from_millis(100));
        assert!(mgr.can_redo());
    }
}
