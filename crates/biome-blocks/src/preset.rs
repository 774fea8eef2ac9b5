//! Preset file loading.
//!
//! A preset file is a flat list of blocks:
//!
//! ```text
//! [Session/dlc\pafA\data\levels\pafA\pafA.w2w/Tools/TerrainEdit/MaterialPairSlot1]
//! VerticalMask=1
//! HeightHighLimit=9
//! ```
//!
//! A line starting with `[` opens a block. Inside a block, a line with
//! exactly one `=` is a field; anything else is skipped.

use crate::Result;
use biome_fs::LegacyLines;
use std::collections::HashMap;
use std::collections::hash_map;
use std::path::Path;

/// A tolerant parse result: the value plus the number of skipped lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub skipped: usize,
}

/// One block: its full header line and its raw field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetBlock {
    pub header: String,
    pub values: HashMap<String, String>,
}

impl PresetBlock {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Store a field; a repeated key overwrites the earlier value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Preset blocks keyed by header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetTable {
    blocks: HashMap<String, PresetBlock>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block, replacing any earlier block with the same header.
    pub fn insert(&mut self, block: PresetBlock) {
        self.blocks.insert(block.header.clone(), block);
    }

    pub fn get(&self, header: &str) -> Option<&PresetBlock> {
        self.blocks.get(header)
    }

    pub fn contains(&self, header: &str) -> bool {
        self.blocks.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Headers in sorted order.
    pub fn headers(&self) -> Vec<&str> {
        let mut headers: Vec<&str> = self.blocks.keys().map(String::as_str).collect();
        headers.sort_unstable();
        headers
    }

    pub fn iter(&self) -> hash_map::Values<'_, String, PresetBlock> {
        self.blocks.values()
    }
}

impl FromIterator<PresetBlock> for PresetTable {
    fn from_iter<I: IntoIterator<Item = PresetBlock>>(iter: I) -> Self {
        let mut table = Self::new();
        for block in iter {
            table.insert(block);
        }
        table
    }
}

/// Line-at-a-time preset parser.
#[derive(Debug, Default)]
struct PresetParser {
    table: PresetTable,
    current: Option<PresetBlock>,
    skipped: usize,
}

impl PresetParser {
    fn feed(&mut self, line: &str) {
        if line.starts_with('[') {
            if let Some(done) = self.current.replace(PresetBlock::new(line)) {
                self.table.insert(done);
            }
            return;
        }

        if line.trim().is_empty() {
            return;
        }

        let Some(block) = self.current.as_mut() else {
            self.skipped += 1;
            return;
        };

        match line.split_once('=') {
            Some((key, value)) if !value.contains('=') => {
                block.set(key.trim(), value.trim());
            }
            _ => self.skipped += 1,
        }
    }

    fn finish(mut self) -> Parsed<PresetTable> {
        if let Some(done) = self.current.take() {
            self.table.insert(done);
        }
        Parsed {
            value: self.table,
            skipped: self.skipped,
        }
    }
}

/// Parse preset text that is already in memory.
pub fn parse_preset_str(text: &str) -> Parsed<PresetTable> {
    let mut parser = PresetParser::default();
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// Parse preset lines from any decoded line source.
pub fn parse_preset_lines<I>(lines: I) -> Result<Parsed<PresetTable>>
where
    I: IntoIterator<Item = biome_fs::Result<String>>,
{
    let mut parser = PresetParser::default();
    for line in lines {
        parser.feed(&line?);
    }
    Ok(parser.finish())
}

/// Load a Windows-1251 preset file.
///
/// An empty or malformed file yields an empty or partial table; only I/O
/// failures are errors.
pub fn load_preset(path: &Path) -> Result<Parsed<PresetTable>> {
    let parsed = parse_preset_lines(LegacyLines::open(path)?)?;
    tracing::debug!(
        "Parsed {} blocks from preset file {} ({} lines skipped)",
        parsed.value.len(),
        path.display(),
        parsed.skipped
    );
    Ok(parsed)
}
