//! Error types for biome-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] biome_fs::Error),

    #[error("Failed to write rewritten output: {0}")]
    Output(#[from] std::io::Error),
}
