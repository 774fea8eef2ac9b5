//! Filesystem primitives for Biome Manager
//!
//! Provides Windows-1251 line I/O, staged (temp-then-swap) file replacement,
//! atomic writes and a format-agnostic settings store.

pub mod config;
pub mod encoding;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use encoding::{LEGACY_ENCODING, LegacyLines, LegacyWriter};
pub use error::{Error, Result};
pub use io::StagedFile;
