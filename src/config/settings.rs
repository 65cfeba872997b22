// src/config/settings.rs
use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::navigation::Ascent;

pub const ENV_PREFIX: &str = "SLVS_WS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Workspace root holding every project directory.
    pub projects_dir: PathBuf,
    /// Editor binary, resolved through PATH.
    pub editor: String,
    /// CAD file extension without the leading dot.
    pub extension: String,
    /// Replaces the bundled empty document when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    /// Keep "go up" from leaving the workspace root.
    pub confine_to_root: bool,
    pub overwrite_existing: bool,
    pub show_modified: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            projects_dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("slvs-projects"),
            editor: "solvespace".to_string(),
            extension: "slvs".to_string(),
            template: None,
            confine_to_root: true,
            overwrite_existing: false,
            show_modified: true,
        }
    }
}

impl Settings {
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("slvs-workspace").join("settings.ron"))
    }

    /// Defaults, then the user settings file, then `explicit`, then the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(Self::user_config_path().as_deref(), explicit, true)
    }

    pub fn load_from(user: Option<&Path>, explicit: Option<&Path>, with_env: bool) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = user {
            builder = builder.add_source(File::from(path).format(FileFormat::Ron).required(false));
        }
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(anyhow!("Settings file not found: {}", path.display()));
            }
            builder = builder.add_source(File::from(path).required(true));
        }
        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));
        }

        let settings: Settings = builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.editor.trim().is_empty() {
            return Err(anyhow!("Setting 'editor' must not be empty"));
        }
        let ext = self.extension.as_str();
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(anyhow!("Setting 'extension' must be a bare suffix such as 'slvs', got '{}'", ext));
        }
        Ok(())
    }

    pub fn ascent(&self) -> Ascent {
        if self.confine_to_root {
            Ascent::Confined
        } else {
            Ascent::Unbounded
        }
    }

    /// Create the workspace root if needed and return its canonical form.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.projects_dir).with_context(|| {
            format!("Failed to create projects directory {}", self.projects_dir.display())
        })?;
        let root = self.projects_dir.canonicalize().with_context(|| {
            format!("Failed to resolve projects directory {}", self.projects_dir.display())
        })?;
        if !root.is_dir() {
            return Err(anyhow!("Projects path is not a directory: {}", root.display()));
        }
        Ok(root)
    }

    /// Write these settings as RON, refusing to replace an existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(anyhow!("Settings file already exists: {}", path.display()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(2),
        )?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }
}
