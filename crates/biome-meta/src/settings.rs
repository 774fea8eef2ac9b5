//! Persisted settings: session file, workspace and project.

use crate::Result;
use biome_fs::ConfigStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The settings record. Empty fields mean "not configured yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Path to `r4LavaEditor2.sessions.ini`
    #[serde(default)]
    pub file_path: PathBuf,
    /// Path to the REDkit `workspace` folder
    #[serde(default)]
    pub workspace: PathBuf,
    /// Project folder name under `workspace/dlc`
    #[serde(default)]
    pub project_name: String,
}

impl Settings {
    /// The session file is set and exists on disk.
    pub fn has_sessions_file(&self) -> bool {
        !self.file_path.as_os_str().is_empty() && self.file_path.is_file()
    }

    /// Workspace exists on disk and a project is named.
    pub fn has_project(&self) -> bool {
        !self.workspace.as_os_str().is_empty()
            && self.workspace.exists()
            && !self.project_name.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.has_sessions_file() && self.has_project()
    }
}

/// Loads and saves [`Settings`] at a fixed path.
///
/// The format follows the file extension (`.json` or `.toml`).
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    store: ConfigStore,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: ConfigStore::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            return Settings::default();
        }
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn try_load(&self) -> Result<Settings> {
        Ok(self.store.load(&self.path)?)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        self.store.save(&self.path, settings)?;
        tracing::debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}
