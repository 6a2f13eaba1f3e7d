use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use snippet_pad_config::{AppConfig, Project, ProjectFile, ProjectStore};
use snippet_pad_core::{EditorSession, HistoryConfig};

/// Manage saved snippet-pad projects from the command line.
#[derive(Parser, Debug)]
#[command(name = "snippet-pad", version, about)]
struct Cli {
    /// Override the data directory (defaults to the platform data dir).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List saved projects.
    List,
    /// Print a project's code to stdout.
    Show { name: String },
    /// Replace a project's code with the contents of a file.
    Edit {
        name: String,
        /// File holding the new code.
        #[arg(long)]
        from: PathBuf,
    },
    /// Export a project to a JSON file.
    Export { name: String, file: PathBuf },
    /// Import a project from a JSON file and save it.
    Import {
        file: PathBuf,
        /// Save under this name instead of the one in the file.
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a saved project.
    Delete { name: String },
    /// List available themes.
    Themes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Some(dir) = &cli.data_dir {
        std::env::set_var("SNIPPET_PAD_DATA_DIR", dir);
    }

    let config = AppConfig::load_or_create(&AppConfig::config_path());
    let store = ProjectStore::open(&ProjectStore::store_path())?;

    match cli.command {
        Command::List => list_projects(&store),
        Command::Show { name } => show_project(&store, &name),
        Command::Edit { name, from } => edit_project(&store, &config, &name, &from),
        Command::Export { name, file } => export_project(&store, &name, &file),
        Command::Import { file, name } => import_project(&store, &config, &file, name),
        Command::Delete { name } => delete_project(&store, &name),
        Command::Themes => {
            for name in config.theme_names() {
                let marker = if name == config.current_theme { "*" } else { " " };
                println!("{marker} {name}");
            }
            Ok(())
        }
    }
}

fn load_required(store: &ProjectStore, name: &str) -> Result<Project> {
    match store.load_project(name)? {
        Some(project) => Ok(project),
        None => bail!("No saved project named '{name}'"),
    }
}

fn list_projects(store: &ProjectStore) -> Result<()> {
    let names = store.list_projects()?;
    if names.is_empty() {
        println!("No saved projects.");
        return Ok(());
    }
    for name in names {
        match store.load_project(&name)? {
            Some(p) => println!("{name}  (theme: {}, saved: {})", p.theme, p.saved_at),
            None => println!("{name}"),
        }
    }
    Ok(())
}

fn show_project(store: &ProjectStore, name: &str) -> Result<()> {
    let project = load_required(store, name)?;
    print!("{}", project.code);
    Ok(())
}

fn edit_project(
    store: &ProjectStore,
    config: &AppConfig,
    name: &str,
    from: &PathBuf,
) -> Result<()> {
    let new_code = std::fs::read_to_string(from)
        .with_context(|| format!("Failed to read {}", from.display()))?;

    let history_config = HistoryConfig {
        max_depth: config.history_depth,
        quiet_period_ms: config.quiet_period_ms,
    };
    let mut session = EditorSession::new("", &config.current_theme, history_config);
    if let Some(existing) = store.load_project(name)? {
        session.load_project(&existing);
    } else {
        session.set_project_name(name);
    }

    session.apply_edit(&new_code);
    store.save_project(&session.to_project(&config.default_project_name))?;

    tracing::info!("Updated project '{name}'");
    Ok(())
}

fn export_project(store: &ProjectStore, name: &str, file: &PathBuf) -> Result<()> {
    let project = load_required(store, name)?;
    ProjectFile::from_project(&project).save_to(file)?;
    tracing::info!("Exported '{name}' to {}", file.display());
    Ok(())
}

fn import_project(
    store: &ProjectStore,
    config: &AppConfig,
    file: &PathBuf,
    name: Option<String>,
) -> Result<()> {
    let imported = ProjectFile::load_from(file)?;

    let name = name
        .or_else(|| {
            let trimmed = imported.name.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| config.default_project_name.clone());

    let project = Project::new(&name, &imported.code, &config.current_theme);
    store.save_project(&project)?;

    tracing::info!("Imported '{name}' from {}", file.display());
    Ok(())
}

fn delete_project(store: &ProjectStore, name: &str) -> Result<()> {
    // Surface a clear error for unknown names instead of silently
    // succeeding.
    let _ = load_required(store, name)?;
    store.delete_project(name)?;
    tracing::info!("Deleted project '{name}'");
    Ok(())
}
