//! CLI argument parsing using clap derive

use biome_meta::constants::DEFAULT_SETTINGS_FILE;
use biome_presets::DEFAULT_SOURCE_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default preset folder, relative to the working directory.
pub const DEFAULT_PRESETS_DIR: &str = "presets";

/// Biome Manager - Apply biome brush presets to REDkit terrain sessions
#[derive(Parser, Debug)]
#[command(name = "biome")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (.json or .toml)
    #[arg(long, global = true, env = "BIOME_SETTINGS", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Folder holding preset .txt files
    #[arg(long, global = true, env = "BIOME_PRESETS_DIR", default_value = DEFAULT_PRESETS_DIR)]
    pub presets_dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Locate the session file, workspace and project, then save them
    Setup,

    /// Download biome brushes and convert them into presets
    Fetch {
        /// Contents listing to download from
        #[arg(long, env = "BIOME_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
        source_url: String,
    },

    /// List available presets
    List,

    /// Show the blocks of a preset
    Show {
        /// Preset name (file name without .txt)
        name: String,
    },

    /// Apply a preset to the session file
    ///
    /// Examples:
    ///   biome apply forest
    ///   biome apply forest --file r4LavaEditor2.sessions.ini --project pafRiver
    Apply {
        /// Preset name (file name without .txt)
        name: String,

        /// Session file to rewrite instead of the configured one
        #[arg(long)]
        file: Option<PathBuf>,

        /// Project name to match instead of the configured one
        #[arg(long)]
        project: Option<String>,

        /// Copy stray material slot lines instead of dropping them
        #[arg(long)]
        keep_foreign_slots: bool,
    },

    /// Convert a JSON brush file into a preset file
    Convert {
        /// JSON brush document
        json: PathBuf,

        /// Preset file to write
        out: PathBuf,
    },
}
