// src/file/mod.rs
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{WorkspaceError, WorkspaceResult};
use crate::utils::{is_slug, slugify};

pub mod entry;
pub mod template;

pub use entry::{Entry, EntryKind};
pub use template::Template;

/// Reads and writes the workspace tree. Holds no location of its own; every
/// operation takes the directory it acts on.
#[derive(Debug)]
pub struct FileManager {
    extension: String,
    template: Template,
    overwrite_existing: bool,
}

impl FileManager {
    pub fn new(extension: impl Into<String>, template: Template, overwrite_existing: bool) -> Self {
        Self {
            extension: extension.into(),
            template,
            overwrite_existing,
        }
    }

    /// Visible subdirectories of `path`, byte-ordered by name.
    pub fn list_projects(&self, path: &Path) -> WorkspaceResult<Vec<Entry>> {
        let mut projects: Vec<PathBuf> = read_children(path)?
            .into_iter()
            .filter(|p| p.is_dir() && !is_hidden(p))
            .collect();
        projects.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(dir = %path.display(), count = projects.len(), "listed projects");
        Ok(projects.into_iter().map(Entry::project).collect())
    }

    /// Files directly inside `path` carrying the CAD extension, byte-ordered by name.
    pub fn list_files(&self, path: &Path) -> WorkspaceResult<Vec<Entry>> {
        let mut files: Vec<PathBuf> = read_children(path)?
            .into_iter()
            .filter(|p| p.is_file() && self.has_extension(p))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(dir = %path.display(), count = files.len(), "listed files");
        Ok(files.into_iter().map(Entry::file).collect())
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.as_encoded_bytes() == self.extension.as_bytes())
    }

    /// Create `current/<slug>` with any missing parents. Existing directories are left alone.
    pub fn create_project(&self, current: &Path, name_input: &str) -> WorkspaceResult<PathBuf> {
        let slug = slug_for(name_input)?;
        let project_path = current.join(slug);
        fs::create_dir_all(&project_path)
            .map_err(|e| WorkspaceError::filesystem(&project_path, e))?;
        info!(path = %project_path.display(), "project directory ready");
        Ok(project_path)
    }

    /// Copy the template to `current/<slug>.<ext>`.
    pub fn create_file(&self, current: &Path, name_input: &str) -> WorkspaceResult<PathBuf> {
        let slug = slug_for(name_input)?;
        let file_path = current.join(format!("{}.{}", slug, self.extension));
        let content = self.template.load()?;

        if self.overwrite_existing {
            fs::write(&file_path, &content).map_err(|e| WorkspaceError::filesystem(&file_path, e))?;
        } else {
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&file_path)
                .map_err(|e| match e.kind() {
                    io::ErrorKind::AlreadyExists => WorkspaceError::AlreadyExists(file_path.clone()),
                    _ => WorkspaceError::filesystem(&file_path, e),
                })?;
            write_or_discard(file, &file_path, &content)?;
        }

        info!(path = %file_path.display(), "created file from template");
        Ok(file_path)
    }

    /// Guard against a listing that went stale before the selection was acted on.
    pub fn verify_project(&self, path: &Path) -> WorkspaceResult<()> {
        if path.is_dir() {
            Ok(())
        } else {
            Err(WorkspaceError::NotFound(path.to_path_buf()))
        }
    }

    pub fn verify_file(&self, path: &Path) -> WorkspaceResult<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(WorkspaceError::NotFound(path.to_path_buf()))
        }
    }
}

fn slug_for(name_input: &str) -> WorkspaceResult<String> {
    let slug = slugify(name_input);
    if !is_slug(&slug) {
        return Err(WorkspaceError::InvalidName(name_input.to_string()));
    }
    Ok(slug)
}

/// A partial write would block every later attempt with `AlreadyExists`, so
/// the file we just created is removed again.
fn write_or_discard<W: Write>(mut file: W, path: &Path, content: &[u8]) -> WorkspaceResult<()> {
    if let Err(e) = file.write_all(content).and_then(|_| file.flush()) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "failed to remove partial file");
        }
        return Err(WorkspaceError::filesystem(path, e));
    }
    Ok(())
}

fn read_children(path: &Path) -> WorkspaceResult<Vec<PathBuf>> {
    let read_dir = fs::read_dir(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => WorkspaceError::NotFound(path.to_path_buf()),
        _ => WorkspaceError::filesystem(path, e),
    })?;
    Ok(read_dir.flatten().map(|entry| entry.path()).collect())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}
