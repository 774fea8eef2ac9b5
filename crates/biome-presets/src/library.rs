//! The local preset folder.

use crate::convert::save_document;
use crate::source::PresetSource;
use crate::{Error, Result};
use biome_blocks::{Parsed, PresetTable, load_preset};
use std::fs;
use std::path::{Path, PathBuf};

const PRESET_EXTENSION: &str = "txt";

/// Outcome of [`PresetLibrary::sync_from`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Preset names written, in listing order.
    pub written: Vec<String>,
    /// Listing entries that are not brush files.
    pub ignored: usize,
}

/// A folder of `<name>.txt` preset files.
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    dir: PathBuf,
}

impl PresetLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| biome_fs::Error::io(&self.dir, e))?;
            tracing::info!("Created preset folder {}", self.dir.display());
        }
        Ok(())
    }

    /// Names of available presets, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Err(Error::LibraryMissing {
                path: self.dir.clone(),
            });
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| biome_fs::Error::io(&self.dir, e))?;

        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == PRESET_EXTENSION))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();

        Ok(names)
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PRESET_EXTENSION}"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// Parse the named preset.
    pub fn load(&self, name: &str) -> Result<Parsed<PresetTable>> {
        Ok(load_preset(&self.path_for(name))?)
    }

    /// Download every brush from `source` into this folder.
    ///
    /// Stops at the first failure; presets written before it stay on disk.
    pub fn sync_from(&self, source: &dyn PresetSource) -> Result<SyncReport> {
        self.ensure_dir()?;

        let mut report = SyncReport::default();
        for entry in source.list()? {
            if !entry.is_brush() {
                tracing::debug!("Ignoring {} ({})", entry.name, entry.kind);
                report.ignored += 1;
                continue;
            }

            let doc = source.fetch(&entry)?;
            let name = entry.preset_name();
            save_document(&doc, &self.path_for(&name))?;
            report.written.push(name);
        }

        tracing::info!(
            "Synced {} presets into {}",
            report.written.len(),
            self.dir.display()
        );
        Ok(report)
    }
}
