//! First-run discovery of the session file, workspace and project.
//!
//! Directory selection and list selection are host concerns, supplied
//! through [`Chooser`]. Everything else is plain path resolution.

use crate::constants::{
    BIN_DIR_NAME, DLC_DIR_NAME, PROJECT_PREFIX, REDKIT_DIR_NAME, SESSIONS_FILE_NAME,
    WORKSPACE_DIR_NAME,
};
use crate::{Error, Result, Settings};
use std::fs;
use std::path::{Path, PathBuf};

/// Interactive selection capability provided by the host shell.
pub trait Chooser {
    /// Ask the user for a directory.
    fn choose_directory(&mut self, title: &str) -> Result<PathBuf>;

    /// Ask the user to pick one of `options`; returns its index.
    fn choose_from_list(&mut self, prompt: &str, options: &[String]) -> Result<usize>;
}

/// Locate the session file from a folder the user picked.
///
/// Accepts a `bin` folder, the REDkit install folder, or a folder that
/// contains `The Witcher 3 REDkit`. A `bin` folder is checked first so the
/// install's own `bin` is not joined twice.
pub fn resolve_sessions_file(folder: &Path) -> Result<PathBuf> {
    let lower = folder.to_string_lossy().to_lowercase();

    let candidate = if lower.ends_with(BIN_DIR_NAME) {
        folder.join(SESSIONS_FILE_NAME)
    } else if lower.contains(&REDKIT_DIR_NAME.to_lowercase()) {
        folder.join(BIN_DIR_NAME).join(SESSIONS_FILE_NAME)
    } else {
        let nested = folder
            .join(REDKIT_DIR_NAME)
            .join(BIN_DIR_NAME)
            .join(SESSIONS_FILE_NAME);
        if !nested.exists() {
            return Err(Error::RedkitNotFound {
                path: folder.to_path_buf(),
            });
        }
        nested
    };

    if !candidate.exists() {
        return Err(Error::SessionsFileMissing { path: candidate });
    }

    Ok(candidate)
}

/// Resolve the `workspace` folder from a folder the user picked: either the
/// folder itself or its `workspace` child.
pub fn resolve_workspace(folder: &Path) -> Result<PathBuf> {
    if folder.file_name().is_some_and(|name| name == WORKSPACE_DIR_NAME) {
        return Ok(folder.to_path_buf());
    }

    let nested = folder.join(WORKSPACE_DIR_NAME);
    if !nested.exists() {
        return Err(Error::WorkspaceNotFound {
            path: folder.to_path_buf(),
        });
    }
    Ok(nested)
}

/// Project folders (`paf*`) under `workspace/dlc`, sorted by name.
pub fn list_projects(workspace: &Path) -> Result<Vec<String>> {
    let dlc = workspace.join(DLC_DIR_NAME);
    if !dlc.exists() {
        return Err(Error::DlcNotFound {
            path: workspace.to_path_buf(),
        });
    }

    let entries = fs::read_dir(&dlc).map_err(|e| biome_fs::Error::io(&dlc, e))?;

    let mut projects: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with(PROJECT_PREFIX))
        .collect();
    projects.sort();

    Ok(projects)
}

/// Pick the project: the only candidate, or the chooser's pick among several.
pub fn detect_project(workspace: &Path, chooser: &mut dyn Chooser) -> Result<String> {
    let mut projects = list_projects(workspace)?;

    match projects.len() {
        0 => Err(Error::NoProjects {
            path: workspace.join(DLC_DIR_NAME),
        }),
        1 => Ok(projects.remove(0)),
        count => {
            let index = chooser.choose_from_list("Several projects found, select one", &projects)?;
            if index >= count {
                return Err(Error::InvalidSelection { index, count });
            }
            Ok(projects.swap_remove(index))
        }
    }
}

/// Complete `settings`, asking through `chooser` only for what is missing
/// or no longer exists on disk.
pub fn ensure_paths(settings: &Settings, chooser: &mut dyn Chooser) -> Result<Settings> {
    let mut updated = settings.clone();

    if settings.has_sessions_file() {
        tracing::debug!("Using session file {}", settings.file_path.display());
    } else {
        let folder =
            chooser.choose_directory("Select The Witcher 3 REDkit folder or its bin folder")?;
        updated.file_path = resolve_sessions_file(&folder)?;
        tracing::info!("Session file found at {}", updated.file_path.display());
    }

    if settings.has_project() {
        tracing::debug!(
            "Using workspace {} and project {}",
            settings.workspace.display(),
            settings.project_name
        );
    } else {
        let folder = chooser.choose_directory("Select the workspace folder")?;
        updated.workspace = resolve_workspace(&folder)?;
        updated.project_name = detect_project(&updated.workspace, chooser)?;
        tracing::info!(
            "Workspace {} with project {}",
            updated.workspace.display(),
            updated.project_name
        );
    }

    Ok(updated)
}
