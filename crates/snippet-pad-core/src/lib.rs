//! Core editing-session model for the playground.
//!
//! An [`EditorSession`] ties together the live snippet buffer, its
//! undo/redo history, and project metadata (name, theme). Storage and
//! any UI surface live in other crates; the session only manipulates
//! in-memory state.

pub mod session;

pub use session::EditorSession;

// Re-exports so consumers don't need a direct history dependency.
pub use snippet_pad_mod_history::{HistoryConfig, HistoryManager};
