// src/app.rs
use anyhow::Result;
use tracing::{debug, warn};

use crate::error::WorkspaceError;
use crate::input::{Action, Command};
use crate::state::AppState;
use crate::ui::{build_menu, Menu, Terminal};

pub struct WorkspaceApp<T: Terminal> {
    state: AppState,
    terminal: T,
}

impl<T: Terminal> WorkspaceApp<T> {
    pub fn new(state: AppState, terminal: T) -> Self {
        Self { state, terminal }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Show menus until the user exits. Only a broken terminal or a vanished
    /// workspace root ends the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.should_exit {
            self.step()?;
        }
        Ok(())
    }

    /// One render, one selection, one action.
    pub fn step(&mut self) -> Result<()> {
        let menu = match self.current_menu()? {
            Some(menu) => menu,
            None => return Ok(()),
        };

        let action = match self.terminal.select(&menu.title, &menu.labels())? {
            Some(index) => menu.action(index).cloned(),
            None if self.state.navigation.can_go_up() => Some(Action::GoUp),
            None => None,
        };

        if let Some(action) = action {
            if let Err(e) = action.execute(&mut self.state, &mut self.terminal) {
                let e = e.downcast::<WorkspaceError>()?;
                if e.is_filesystem() {
                    warn!(?action, error = %e, "action failed");
                } else {
                    debug!(?action, error = %e, "action rejected");
                }
                self.state.error_message = Some(e.to_string());
            }
        }

        if let Some(message) = self.state.error_message.take() {
            self.terminal.report_error(&message);
        }
        Ok(())
    }

    // A directory removed from under us sends the user back to the root.
    fn current_menu(&mut self) -> Result<Option<Menu>> {
        match build_menu(&self.state) {
            Ok(menu) => Ok(Some(menu)),
            Err(e) if !self.state.navigation.at_root() => {
                warn!(error = %e, "listing failed, returning to workspace root");
                self.terminal.report_error(&e.to_string());
                let root = self.state.navigation.root_path().to_path_buf();
                self.state.navigation.enter(root);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
