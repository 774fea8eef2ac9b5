//! Fetch command: download presets from the remote source

use biome_presets::GithubSource;
use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

pub fn run_fetch(ctx: &AppContext, source_url: &str) -> Result<()> {
    let source = GithubSource::new(source_url)?;
    let library = ctx.library();

    println!("Fetching biome brushes from {}", source.listing_url().cyan());
    let report = library.sync_from(&source)?;

    for name in &report.written {
        println!("  {} {}", "+".green(), name);
    }
    println!(
        "{} {} presets saved to {}",
        "OK".green().bold(),
        report.written.len(),
        library.dir().display()
    );

    Ok(())
}
