pub mod color;
pub mod config;
pub mod projects;
pub mod theme;

pub use color::HexColor;
pub use config::AppConfig;
pub use projects::{Project, ProjectFile, ProjectStore};
pub use theme::{PlaygroundColors, ThemeDefinition};
