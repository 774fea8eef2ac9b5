//! Error types for biome-presets

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] biome_fs::Error),

    #[error("Preset error: {0}")]
    Blocks(#[from] biome_blocks::Error),

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid JSON from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Remote entry {name} has no download URL")]
    MissingDownloadUrl { name: String },

    #[error("Preset folder {path} does not exist, run `biome fetch` first")]
    LibraryMissing { path: PathBuf },
}
