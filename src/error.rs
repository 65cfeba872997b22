// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{} no longer exists", .0.display())]
    NotFound(PathBuf),

    #[error("'{0}' does not produce a usable name")]
    InvalidName(String),

    #[error("failed to launch {program}: {source}")]
    ExternalProcess {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl WorkspaceError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }

    /// True for every failure that originates on disk, including the
    /// existence checks done before creating or entering something.
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            Self::Filesystem { .. } | Self::AlreadyExists(_) | Self::NotFound(_)
        )
    }
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
