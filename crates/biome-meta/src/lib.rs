//! Settings and editor path discovery for Biome Manager.
//!
//! This crate owns the persisted [`Settings`] record (where the editor's
//! session file is, which workspace and which project) and the first-run
//! discovery that fills it in through a host-supplied [`Chooser`].

pub mod constants;
pub mod discovery;
pub mod error;
pub mod settings;

pub use discovery::{
    Chooser, detect_project, ensure_paths, resolve_sessions_file, resolve_workspace,
};
pub use error::{Error, Result};
pub use settings::{Settings, SettingsStore};
