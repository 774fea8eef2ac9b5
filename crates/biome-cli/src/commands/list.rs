//! List and show commands for presets

use colored::Colorize;

use crate::context::AppContext;
use crate::error::{CliError, Result};

/// Run the list command
pub fn run_list(ctx: &AppContext) -> Result<()> {
    let names = ctx.library().list()?;

    if names.is_empty() {
        println!(
            "No presets in {}. Use {} to download them.",
            ctx.presets_dir.display(),
            "biome fetch".cyan()
        );
        return Ok(());
    }

    println!("{}", "Available Presets".bold());
    println!();
    for name in &names {
        println!("  {}", name.green());
    }
    println!();
    println!(
        "{} {} presets. Use {} to apply one.",
        "Total:".dimmed(),
        names.len(),
        "biome apply <name>".cyan()
    );

    Ok(())
}

/// Run the show command
pub fn run_show(ctx: &AppContext, name: &str) -> Result<()> {
    let library = ctx.library();
    if !library.contains(name) {
        return Err(CliError::user(format!(
            "Preset '{}' not found in {}",
            name,
            library.dir().display()
        )));
    }

    let parsed = library.load(name)?;
    let table = parsed.value;

    println!("{} {}", "Preset".bold(), name.green().bold());
    println!();
    for header in table.headers() {
        let keys = table.get(header).map_or(0, |block| block.values.len());
        println!("  {} {}", header, format!("({keys} keys)").dimmed());
    }
    println!();
    println!("{} {} blocks", "Total:".dimmed(), table.len());
    if parsed.skipped > 0 {
        println!(
            "{} {} malformed lines skipped",
            "warning:".yellow().bold(),
            parsed.skipped
        );
    }

    Ok(())
}
