//! Error types for biome-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from biome-blocks
    #[error(transparent)]
    Blocks(#[from] biome_blocks::Error),

    /// Error from biome-meta
    #[error(transparent)]
    Meta(#[from] biome_meta::Error),

    /// Error from biome-presets
    #[error(transparent)]
    Presets(#[from] biome_presets::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
