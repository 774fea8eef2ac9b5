//! Biome brush presets for Biome Manager.
//!
//! Brushes are published as JSON documents of numbered entries. This crate
//! converts them into the editor's preset text format, fetches them from a
//! [`PresetSource`] and keeps them in a local [`PresetLibrary`].

pub mod convert;
pub mod error;
pub mod library;
pub mod source;

pub use convert::{BrushDocument, BrushEntry, convert_document, convert_json_file, save_document};
pub use error::{Error, Result};
pub use library::{PresetLibrary, SyncReport};
pub use source::{DEFAULT_SOURCE_URL, GithubSource, PresetSource, RemoteEntry};
