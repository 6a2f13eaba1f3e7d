/// A single editing session: buffer, history, and project metadata.
use std::time::Instant;

use snippet_pad_config::Project;
use snippet_pad_mod_history::{HistoryConfig, HistoryManager};

/// One open snippet with its undo/redo history.
///
/// The session owns the live buffer; the history manager only ever sees
/// content passed in from here. Created once per editing session and
/// dropped with it.
pub struct EditorSession {
    /// Live buffer content.
    content: String,
    /// Project name shown in the title input. May be blank for
    /// never-saved sessions.
    project_name: String,
    /// Active theme name.
    theme: String,
    /// Whether the buffer changed since the last save or load.
    modified: bool,
    /// Undo/redo history manager.
    history: HistoryManager,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("project_name", &self.project_name)
            .field("content_len", &self.content.len())
            .field("theme", &self.theme)
            .field("modified", &self.modified)
            .finish()
    }
}

impl EditorSession {
    /// Creates a session over `initial` content.
    ///
    /// The starting content is recorded as the first history snapshot
    /// so the first undo has something to restore.
    pub fn new(initial: &str, theme: &str, config: HistoryConfig) -> Self {
        let mut history = HistoryManager::new(config);
        history.record_edit(initial);
        Self {
            content: initial.to_string(),
            project_name: String::new(),
            theme: theme.to_string(),
            modified: false,
            history,
        }
    }

    /// The live buffer content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn set_project_name(&mut self, name: &str) {
        self.project_name = name.trim().to_string();
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: &str) {
        self.theme = theme.to_string();
    }

    /// Whether the buffer changed since the last save or load.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Marks the session clean after a successful save.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Read access to the history manager (undo/redo availability).
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Installs edited content from the editing surface.
    ///
    /// The edit is debounce-recorded: bursts of rapid calls produce one
    /// history snapshot per pause.
    pub fn apply_edit(&mut self, new_content: &str) {
        self.apply_edit_at(new_content, Instant::now());
    }

    /// Time-injectable variant of [`apply_edit`](Self::apply_edit).
    pub fn apply_edit_at(&mut self, new_content: &str, now: Instant) {
        self.history.debounced_record_at(new_content, now);
        self.content = new_content.to_string();
        self.modified = true;
    }

    /// Steps the buffer back one history snapshot.
    ///
    /// Returns whether anything changed; undo with an empty history is
    /// a silent no-op.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.content) {
            Some(snapshot) => {
                self.content = snapshot;
                self.history.end_burst();
                self.modified = true;
                true
            }
            None => {
                tracing::debug!("undo requested with empty history");
                false
            }
        }
    }

    /// Steps the buffer forward one undone snapshot.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.content) {
            Some(snapshot) => {
                self.content = snapshot;
                self.history.end_burst();
                self.modified = true;
                true
            }
            None => {
                tracing::debug!("redo requested with empty redo stack");
                false
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the session state with a loaded project.
    ///
    /// The loaded content is recorded as a fresh snapshot, outside any
    /// burst, so the load itself is undoable.
    pub fn load_project(&mut self, project: &Project) {
        self.project_name = project.name.clone();
        self.theme = project.theme.clone();
        self.content = project.code.clone();
        self.history.end_burst();
        self.history.record_edit(&self.content);
        self.modified = false;
    }

    /// Builds the storable form of this session.
    ///
    /// A blank project name falls back to `fallback_name`.
    pub fn to_project(&self, fallback_name: &str) -> Project {
        let name = if self.project_name.is_empty() {
            fallback_name
        } else {
            &self.project_name
        };
        Project::new(name, &self.content, &self.theme)
    }
}
