//! Setup command: first-run discovery

use biome_meta::{Chooser, Settings, ensure_paths};
use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

/// Run discovery from scratch and save the result.
pub fn run_setup(ctx: &AppContext, chooser: &mut dyn Chooser) -> Result<Settings> {
    let settings = ensure_paths(&Settings::default(), chooser)?;
    ctx.settings_store().save(&settings)?;

    println!("{} Settings saved to {}", "OK".green().bold(), ctx.settings_path.display());
    print_settings(&settings);

    Ok(settings)
}

/// Load saved settings, running discovery only for what is missing.
pub fn load_or_discover(ctx: &AppContext, chooser: &mut dyn Chooser) -> Result<Settings> {
    let store = ctx.settings_store();
    let current = store.load();
    if current.is_complete() {
        return Ok(current);
    }

    println!("{}", "Settings incomplete, starting setup".yellow());
    let settings = ensure_paths(&current, chooser)?;
    store.save(&settings)?;
    print_settings(&settings);
    Ok(settings)
}

fn print_settings(settings: &Settings) {
    println!("  {}: {}", "Session file".dimmed(), settings.file_path.display());
    println!("  {}: {}", "Workspace".dimmed(), settings.workspace.display());
    println!("  {}: {}", "Project".dimmed(), settings.project_name.cyan());
}
