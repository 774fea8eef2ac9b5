//! Builder for session documents used as rewrite input.

/// The session header for `slot` of `project`, spelled out literally so the
/// fixtures do not share code with the matcher under test.
pub fn slot_header(project: &str, slot: u32) -> String {
    format!(
        "[Session/dlc\\{p}\\data\\levels\\{p}\\{p}.w2w/Tools/TerrainEdit/MaterialPairSlot{slot}]",
        p = project
    )
}

/// Accumulates session lines.
///
/// # Example
///
/// ```rust
/// use biome_test_utils::SessionBuilder;
///
/// let doc = SessionBuilder::new()
///     .section("[Session/Camera]", &[("Position", "0,0,0")])
///     .slot("pafA", 1, &[("Probability", "7"), ("HeightHighLimit", "5")])
///     .build_crlf();
/// assert!(doc.starts_with("[Session/Camera]\r\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    lines: Vec<String>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append a header followed by `key=value` lines.
    pub fn section(mut self, header: &str, fields: &[(&str, &str)]) -> Self {
        self.lines.push(header.to_string());
        for (key, value) in fields {
            self.lines.push(format!("{key}={value}"));
        }
        self
    }

    /// Append a material slot block for `project`.
    pub fn slot(self, project: &str, slot: u32, fields: &[(&str, &str)]) -> Self {
        let header = slot_header(project, slot);
        self.section(&header, fields)
    }

    pub fn build_lf(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }

    pub fn build_crlf(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\r\n")).collect()
    }
}
