// src/file/entry.rs
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Project,
    File,
}

/// One listed child of the directory being browsed. Rebuilt on every listing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub modified: Option<DateTime<Local>>,
}

impl Entry {
    pub fn project(path: PathBuf) -> Self {
        Self {
            name: display_name(&path),
            path,
            kind: EntryKind::Project,
            modified: None,
        }
    }

    pub fn file(path: PathBuf) -> Self {
        let modified = path
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);
        Self {
            name: display_name(&path),
            path,
            kind: EntryKind::File,
            modified,
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
