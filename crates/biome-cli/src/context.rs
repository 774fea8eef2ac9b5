//! Resolved invocation context
//!
//! Flag and environment values are resolved once by clap and carried here,
//! so commands never look at globals.

use biome_meta::SettingsStore;
use biome_presets::PresetLibrary;
use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub settings_path: PathBuf,
    pub presets_dir: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            settings_path: cli.settings.clone(),
            presets_dir: cli.presets_dir.clone(),
        }
    }

    pub fn settings_store(&self) -> SettingsStore {
        SettingsStore::new(&self.settings_path)
    }

    pub fn library(&self) -> PresetLibrary {
        PresetLibrary::new(&self.presets_dir)
    }
}
