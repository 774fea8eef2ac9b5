//! Preset loading and session block rewriting for Biome Manager.
//!
//! The editor's session file contains one block per terrain material slot:
//!
//! ```text
//! [Session/dlc\pafProj\data\levels\pafProj\pafProj.w2w/Tools/TerrainEdit/MaterialPairSlot3]
//! VerticalMask=1
//! ...
//! HeightHighLimit=9
//! ```
//!
//! A preset file holds blocks in the same shape. [`rewriter::rewrite_file`]
//! streams the session file once, swaps every block whose header has an
//! entry in the preset, and re-serializes every other recognized block
//! through the fixed [`keys::KEY_ORDER`].
//!
//! Parsing is tolerant: malformed lines are skipped and counted, never
//! reported as errors.

pub mod error;
pub mod header;
pub mod keys;
pub mod preset;
pub mod rewriter;
pub mod writer;

pub use error::{Error, Result};
pub use header::{expected_header, slot_number};
pub use keys::{KEY_ORDER, TERMINAL_KEY};
pub use preset::{Parsed, PresetBlock, PresetTable, load_preset, parse_preset_str};
pub use rewriter::{RewriteOptions, RewriteReport, rewrite_file, rewrite_lines, rewrite_str};
pub use writer::{format_block, write_block};
