// src/file/template.rs
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use crate::error::{WorkspaceError, WorkspaceResult};

const BUNDLED_EMPTY: &[u8] = include_bytes!("../../assets/empty.slvs");

/// Where the contents of a new CAD file come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Bundled,
    File(PathBuf),
}

impl Template {
    pub fn from_setting(path: Option<PathBuf>) -> Self {
        path.map_or(Template::Bundled, Template::File)
    }

    pub fn load(&self) -> WorkspaceResult<Cow<'static, [u8]>> {
        match self {
            Template::Bundled => Ok(Cow::Borrowed(BUNDLED_EMPTY)),
            Template::File(path) => fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| WorkspaceError::filesystem(path, e)),
        }
    }
}
