// src/state/mod.rs
use std::path::PathBuf;

use crate::editor::EditorLauncher;
use crate::file::FileManager;
use crate::state::navigation::{Ascent, NavigationState};

pub mod navigation;

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub navigation: NavigationState,
    pub should_exit: bool,
    pub error_message: Option<String>,
    pub show_modified: bool,

    pub file_manager: FileManager,
    pub editor: EditorLauncher,
}

impl AppState {
    pub fn new(
        root_path: PathBuf,
        ascent: Ascent,
        file_manager: FileManager,
        editor: EditorLauncher,
    ) -> Self {
        Self {
            navigation: NavigationState::new(root_path, ascent),
            should_exit: false,
            error_message: None,
            show_modified: true,
            file_manager,
            editor,
        }
    }

    pub fn exit_app(&mut self) {
        self.should_exit = true;
    }
}
