/// Application configuration: load, save, merge, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::{builtin_dark, builtin_light, builtin_solarized, ThemeDefinition};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub current_theme: String,
    /// Max undo snapshots kept per editing session.
    pub history_depth: usize,
    /// Quiet period in milliseconds for coalescing bursts of edits
    /// into one history snapshot.
    pub quiet_period_ms: u64,
    /// Name given to a project saved without an explicit name.
    pub default_project_name: String,
    pub themes: Vec<ThemeDefinition>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            current_theme: "Dark".to_string(),
            history_depth: 100,
            quiet_period_ms: 500,
            default_project_name: "Untitled".to_string(),
            themes: vec![builtin_dark(), builtin_light(), builtin_solarized()],
        }
    }
}

impl AppConfig {
    /// Returns the config file path: data directory + `snippet-pad.json`.
    pub fn config_path() -> PathBuf {
        resolve_data_dir().join("snippet-pad.json")
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        config.with_builtins_merged();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Ensures built-in Dark and Light themes are always present.
    /// User-defined themes with matching names take priority over built-ins.
    pub fn with_builtins_merged(&mut self) {
        if !self.themes.iter().any(|t| t.name == "Dark") {
            self.themes.insert(0, builtin_dark());
        }
        if !self.themes.iter().any(|t| t.name == "Light") {
            let insert_at = 1.min(self.themes.len());
            self.themes.insert(insert_at, builtin_light());
        }
    }

    /// Finds a theme by name.
    pub fn find_theme(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Returns all theme names.
    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.history_depth = self.history_depth.clamp(1, 10_000);
        self.quiet_period_ms = self.quiet_period_ms.min(60_000);
        if self.default_project_name.trim().is_empty() {
            self.default_project_name = "Untitled".to_string();
        }
        // Builtins are always valid even before they are merged back in
        let builtins = ["Dark", "Light"];
        if !builtins.contains(&self.current_theme.as_str())
            && self.find_theme(&self.current_theme).is_none()
        {
            self.current_theme = "Dark".to_string();
        }
    }
}

/// Resolves the data directory path.
///
/// Resolution order:
/// 1. `SNIPPET_PAD_DATA_DIR` environment variable
/// 2. `snippet-pad/` under the platform data directory
/// 3. `.data/` next to the executable
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SNIPPET_PAD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(base) = dirs::data_dir() {
        return base.join("snippet-pad");
    }
    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
    exe.parent().unwrap_or(Path::new(".")).join(".data")
}
