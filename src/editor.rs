// src/editor.rs
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{info, warn};

use crate::error::{WorkspaceError, WorkspaceResult};

/// Runs the external CAD editor on one file and waits for it.
#[derive(Debug, Clone)]
pub struct EditorLauncher {
    program: String,
}

impl EditorLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Blocks until the editor exits. A non-zero exit status is returned, not
    /// treated as an error; only a failed launch is.
    pub fn open_file(&self, target: &Path) -> WorkspaceResult<ExitStatus> {
        let target = absolute(target).map_err(|e| WorkspaceError::filesystem(target, e))?;
        let parent = target
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| WorkspaceError::NotFound(target.clone()))?;

        let _cwd = WorkingDirGuard::change_to(&parent)
            .map_err(|e| WorkspaceError::filesystem(&parent, e))?;

        info!(editor = %self.program, file = %target.display(), "launching editor");
        let status = Command::new(&self.program)
            .arg(&target)
            .current_dir(&parent)
            .status()
            .map_err(|source| WorkspaceError::ExternalProcess {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!(editor = %self.program, %status, "editor exited with failure status");
        }
        Ok(status)
    }
}

fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Restores the process working directory on drop.
struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    fn change_to(dir: &Path) -> io::Result<Self> {
        let original = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { original })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            warn!(dir = %self.original.display(), error = %e, "failed to restore working directory");
        }
    }
}

/// Held by tests that launch the editor; the working directory is process-wide.
#[cfg(test)]
pub(crate) static WORKING_DIR_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
