//! Well-known names in the REDkit install and workspace layout.

/// The editor's session file holding terrain tool state.
pub const SESSIONS_FILE_NAME: &str = "r4LavaEditor2.sessions.ini";

/// REDkit install folder name.
pub const REDKIT_DIR_NAME: &str = "The Witcher 3 REDkit";

pub const BIN_DIR_NAME: &str = "bin";

pub const WORKSPACE_DIR_NAME: &str = "workspace";

pub const DLC_DIR_NAME: &str = "dlc";

/// Project folders under `workspace/dlc` start with this prefix.
pub const PROJECT_PREFIX: &str = "paf";

/// Default settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "config.json";
