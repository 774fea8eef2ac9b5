//! Convert command: offline JSON to preset conversion

use colored::Colorize;
use std::path::Path;

use crate::error::Result;

pub fn run_convert(json: &Path, out: &Path) -> Result<()> {
    biome_presets::convert_json_file(json, out)?;
    println!(
        "{} Converted {} to {}",
        "OK".green().bold(),
        json.display(),
        out.display()
    );
    Ok(())
}
