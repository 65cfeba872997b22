// src/main.rs
use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod editor;
mod error;
mod file;
mod input;
mod state;
mod ui;
mod utils;

use app::WorkspaceApp;
use config::Settings;
use editor::EditorLauncher;
use file::{FileManager, Template};
use state::AppState;
use ui::ConsoleTerminal;

/// Browse CAD project folders and open drawings in SolveSpace.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Extra settings file, applied over the user settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Workspace root directory
    #[arg(long)]
    root: Option<PathBuf>,

    /// Editor binary to launch on selected files
    #[arg(long)]
    editor: Option<String>,

    /// Write the effective settings to the user settings file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        settings.projects_dir = root;
    }
    if let Some(editor) = cli.editor {
        settings.editor = editor;
    }

    if cli.init_config {
        let path = Settings::user_config_path()
            .ok_or_else(|| anyhow!("Could not determine the user config directory"))?;
        settings.write_to(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let root = settings.resolve_root()?;
    info!(root = %root.display(), editor = %settings.editor, "starting workspace manager");

    let file_manager = FileManager::new(
        settings.extension.clone(),
        Template::from_setting(settings.template.clone()),
        settings.overwrite_existing,
    );
    let mut state = AppState::new(
        root,
        settings.ascent(),
        file_manager,
        EditorLauncher::new(settings.editor.clone()),
    );
    state.show_modified = settings.show_modified;

    WorkspaceApp::new(state, ConsoleTerminal::new()).run()
}
