//! Error types for biome-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] biome_fs::Error),

    #[error(
        "Selected folder {path} contains neither 'The Witcher 3 REDkit', 'bin' nor 'The Witcher 3 REDkit/bin'"
    )]
    RedkitNotFound { path: PathBuf },

    #[error("Session file not found: {path}")]
    SessionsFileMissing { path: PathBuf },

    #[error("No 'workspace' folder inside {path}")]
    WorkspaceNotFound { path: PathBuf },

    #[error("No 'dlc' folder in workspace {path}")]
    DlcNotFound { path: PathBuf },

    #[error("No project folders starting with 'paf' in {path}")]
    NoProjects { path: PathBuf },

    #[error("Invalid selection {index}: expected 0..{count}")]
    InvalidSelection { index: usize, count: usize },

    #[error("Selection failed: {message}")]
    Chooser { message: String },
}

impl Error {
    pub fn chooser(message: impl Into<String>) -> Self {
        Self::Chooser {
            message: message.into(),
        }
    }
}
