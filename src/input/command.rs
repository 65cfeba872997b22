// src/input/command.rs
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::state::AppState;
use crate::ui::Terminal;

pub trait Command {
    fn execute(&self, state: &mut AppState, terminal: &mut dyn Terminal) -> Result<()>;
}

/// Everything a menu entry can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateProject,
    CreateFile,
    EnterProject(PathBuf),
    GoUp,
    OpenFile(PathBuf),
    Exit,
}

impl Command for Action {
    fn execute(&self, state: &mut AppState, terminal: &mut dyn Terminal) -> Result<()> {
        match self {
            Action::CreateProject => {
                let name = terminal.input("Enter project name")?;
                state
                    .file_manager
                    .create_project(state.navigation.current_path(), &name)?;
            }
            Action::CreateFile => {
                let name = terminal.input("Enter file name")?;
                state
                    .file_manager
                    .create_file(state.navigation.current_path(), &name)?;
            }
            Action::EnterProject(path) => {
                state.file_manager.verify_project(path)?;
                state.navigation.enter(path.clone());
                info!(path = %path.display(), "entered project");
            }
            Action::GoUp => {
                state.navigation.go_up();
            }
            Action::OpenFile(path) => {
                state.file_manager.verify_file(path)?;
                state.editor.open_file(path)?;
            }
            Action::Exit => state.exit_app(),
        }
        Ok(())
    }
}
