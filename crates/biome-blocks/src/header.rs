//! Material slot header detection.

use regex::Regex;
use std::sync::LazyLock;

/// Matches the slot number anywhere in a line.
static SLOT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MaterialPairSlot(\d+)").expect("Invalid slot regex"));

/// Extracts the decimal slot number from the first `MaterialPairSlot<N>` in
/// `line`, digits exactly as written.
///
/// # Example
/// ```
/// use biome_blocks::header::slot_number;
///
/// assert_eq!(slot_number("[.../MaterialPairSlot12]"), Some("12"));
/// assert_eq!(slot_number("[Session/Other]"), None);
/// ```
pub fn slot_number(line: &str) -> Option<&str> {
    SLOT_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Builds the session header for `slot` of `project`'s level.
///
/// # Example
/// ```
/// use biome_blocks::header::expected_header;
///
/// assert_eq!(
///     expected_header("pafA", "3"),
///     r"[Session/dlc\pafA\data\levels\pafA\pafA.w2w/Tools/TerrainEdit/MaterialPairSlot3]"
/// );
/// ```
pub fn expected_header(project: &str, slot: &str) -> String {
    format!(
        r"[Session/dlc\{project}\data\levels\{project}\{project}.w2w/Tools/TerrainEdit/MaterialPairSlot{slot}]"
    )
}

/// Returns the slot if `line` is exactly the expected header for `project`.
pub fn match_header<'a>(line: &'a str, project: &str) -> Option<&'a str> {
    let slot = slot_number(line)?;
    (line == expected_header(project, slot)).then_some(slot)
}
