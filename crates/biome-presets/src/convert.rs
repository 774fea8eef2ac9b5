//! JSON brush document to preset text conversion.
//!
//! A brush document maps `"1".."N"` to entries. Each entry carries the block
//! header in `path` and any of the known keys:
//!
//! ```json
//! {
//!   "1": {
//!     "path": "[Session/dlc\\pafA\\data\\levels\\pafA\\pafA.w2w/Tools/TerrainEdit/MaterialPairSlot1]",
//!     "VerticalMask": 1,
//!     "HeightHighLimit": 9
//!   }
//! }
//! ```

use crate::{Error, Result};
use biome_blocks::KEY_ORDER;
use biome_fs::{encoding, io};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

/// One numbered entry of a brush document.
pub type BrushEntry = serde_json::Map<String, Value>;

/// A whole brush document, keyed by entry number.
pub type BrushDocument = BTreeMap<String, BrushEntry>;

/// Render a JSON value the way it appears after `=` in a preset file.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "<nil>".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Collapse doubled brackets left over from headers that already carry
/// their own brackets.
pub fn collapse_brackets(text: &str) -> String {
    text.replace("[[", "[").replace("]]", "]")
}

fn write_entry(out: &mut String, entry: &BrushEntry) {
    if let Some(path) = entry.get("path") {
        let _ = writeln!(out, "[{}]", collapse_brackets(&format_value(path)));
    }
    for key in KEY_ORDER {
        if let Some(value) = entry.get(key) {
            let _ = writeln!(out, "{key}={}", format_value(value));
        }
    }
}

/// Convert a document into preset text with `\n` line endings.
///
/// Entries are emitted for `1..=N` where `N` is the number of entries; a
/// number with no entry contributes nothing.
pub fn convert_document(doc: &BrushDocument) -> String {
    let mut out = String::new();
    for index in 1..=doc.len() {
        if let Some(entry) = doc.get(&index.to_string()) {
            write_entry(&mut out, entry);
        }
    }
    collapse_brackets(&out)
}

/// Parse a brush document from JSON text.
pub fn parse_document(text: &str, origin: &str) -> Result<BrushDocument> {
    serde_json::from_str(text).map_err(|source| Error::Decode {
        origin: origin.to_string(),
        source,
    })
}

/// Convert `doc` and write it to `out` as Windows-1251 text.
pub fn save_document(doc: &BrushDocument, out: &Path) -> Result<()> {
    let text = convert_document(doc);
    io::write_atomic(out, &encoding::encode(&text))?;
    tracing::info!("Saved {} entries to {}", doc.len(), out.display());
    Ok(())
}

/// Offline conversion of a JSON brush file into a preset text file.
pub fn convert_json_file(json: &Path, out: &Path) -> Result<()> {
    let text = io::read_text(json)?;
    let doc = parse_document(&text, &json.display().to_string())?;
    save_document(&doc, out)
}
