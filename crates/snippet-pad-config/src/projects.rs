/// Named project storage and file export/import.
///
/// Saved projects live in a redb table keyed by project name, with
/// bincode-serialized values. Export/import exchanges a plain JSON file
/// holding only the project name and code, so exported files stay
/// readable and theme-independent.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::config::resolve_data_dir;

/// Projects table: project name → bincode(`Project`).
const PROJECTS: TableDefinition<&str, &[u8]> = TableDefinition::new("projects");

/// A saved playground project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// The snippet source, the full buffer content at save time.
    pub code: String,
    /// Theme name active when the project was saved.
    pub theme: String,
    /// RFC 3339 timestamp of the last save.
    pub saved_at: String,
}

impl Project {
    /// Creates a project stamped with the current local time.
    pub fn new(name: &str, code: &str, theme: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            theme: theme.to_string(),
            saved_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

/// The on-disk exchange format for exported projects.
///
/// Carries only name and code. Missing fields on import default to
/// empty, so hand-edited or truncated files still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    pub name: String,
    pub code: String,
}

impl ProjectFile {
    /// Builds the exchange form of a stored project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            code: project.code.clone(),
        }
    }

    /// Writes this project as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize project")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write project file: {}", path.display()))?;
        Ok(())
    }

    /// Reads a project from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// project file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        let file: ProjectFile = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid project file format: {}", path.display()))?;
        Ok(file)
    }
}

/// Persistence layer for named projects, backed by redb.
pub struct ProjectStore {
    db: Database,
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore").finish()
    }
}

impl ProjectStore {
    /// Returns the default project database path inside the data directory.
    pub fn store_path() -> PathBuf {
        resolve_data_dir().join("projects.redb")
    }

    /// Opens or creates the project database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or
    /// the database cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        let db = Database::create(path)
            .with_context(|| format!("Failed to open project database: {}", path.display()))?;

        // Ensure the table exists
        let write_txn = db
            .begin_write()
            .context("Failed to begin initial write transaction")?;
        {
            let _ = write_txn
                .open_table(PROJECTS)
                .context("Failed to create projects table")?;
        }
        write_txn
            .commit()
            .context("Failed to commit initial transaction")?;

        Ok(Self { db })
    }

    /// Saves a project under its name, overwriting any previous save.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write transaction fails.
    pub fn save_project(&self, project: &Project) -> Result<()> {
        let bytes = bincode::serialize(project).context("Failed to serialize project")?;

        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut table = write_txn
                .open_table(PROJECTS)
                .context("Failed to open projects table")?;
            table
                .insert(project.name.as_str(), bytes.as_slice())
                .context("Failed to insert project")?;
        }
        write_txn.commit().context("Failed to commit project")?;
        Ok(())
    }

    /// Loads a project by name, or `None` if it was never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the read transaction or deserialization fails.
    pub fn load_project(&self, name: &str) -> Result<Option<Project>> {
        let read_txn = self
            .db
            .begin_read()
            .context("Failed to begin read transaction")?;
        let table = read_txn
            .open_table(PROJECTS)
            .context("Failed to open projects table")?;

        match table.get(name).context("Failed to read project")? {
            Some(guard) => {
                let project: Project = bincode::deserialize(guard.value())
                    .context("Failed to deserialize project")?;
                Ok(Some(project))
            }
            None => Ok(None),
        }
    }

    /// Deletes a saved project. Deleting an unknown name is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction fails.
    pub fn delete_project(&self, name: &str) -> Result<()> {
        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut table = write_txn
                .open_table(PROJECTS)
                .context("Failed to open projects table")?;
            let _ = table.remove(name);
        }
        write_txn.commit().context("Failed to commit deletion")?;
        Ok(())
    }

    /// Lists all saved project names in lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read transaction fails.
    pub fn list_projects(&self) -> Result<Vec<String>> {
        let read_txn = self
            .db
            .begin_read()
            .context("Failed to begin read transaction")?;
        let table = read_txn
            .open_table(PROJECTS)
            .context("Failed to open projects table")?;

        let mut names = Vec::new();
        for entry in table.iter().context("Failed to iterate projects table")? {
            let (key_guard, _) = entry.context("Failed to read project entry")?;
            names.push(key_guard.value().to_string());
        }
        Ok(names)
    }
}
