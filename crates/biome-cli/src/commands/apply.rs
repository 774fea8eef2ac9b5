//! Apply command: rewrite the session file from a preset

use biome_blocks::{RewriteOptions, RewriteReport, rewrite_file};
use biome_meta::Chooser;
use colored::Colorize;
use std::path::PathBuf;

use super::setup::load_or_discover;
use crate::context::AppContext;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyArgs {
    pub name: String,
    pub file: Option<PathBuf>,
    pub project: Option<String>,
    pub keep_foreign_slots: bool,
}

/// Run the apply command.
///
/// `--file` and `--project` together bypass saved settings entirely;
/// otherwise missing values come from settings, with discovery if needed.
pub fn run_apply(
    ctx: &AppContext,
    args: &ApplyArgs,
    chooser: &mut dyn Chooser,
) -> Result<RewriteReport> {
    let library = ctx.library();
    if !library.contains(&args.name) {
        return Err(CliError::user(format!(
            "Preset '{}' not found in {}",
            args.name,
            library.dir().display()
        )));
    }

    let (file, project) = match (&args.file, &args.project) {
        (Some(file), Some(project)) => (file.clone(), project.clone()),
        _ => {
            let settings = load_or_discover(ctx, chooser)?;
            (
                args.file.clone().unwrap_or(settings.file_path),
                args.project.clone().unwrap_or(settings.project_name),
            )
        }
    };

    let options = RewriteOptions {
        keep_foreign_slot_lines: args.keep_foreign_slots,
    };
    tracing::debug!("Applying {} to {} for {}", args.name, file.display(), project);

    let report = rewrite_file(&file, &library.path_for(&args.name), &project, options)?;

    for header in &report.replaced {
        println!("  {} {}", "replaced".green(), header);
    }
    println!(
        "{} Preset {} applied to {}",
        "OK".green().bold(),
        args.name.cyan(),
        file.display()
    );
    println!(
        "  {}: {} replaced, {} kept, {} lines dropped",
        "Blocks".dimmed(),
        report.replaced.len(),
        report.echoed,
        report.dropped_lines
    );
    if report.preset_lines_skipped > 0 {
        println!(
            "{} {} malformed preset lines skipped",
            "warning:".yellow().bold(),
            report.preset_lines_skipped
        );
    }

    Ok(report)
}
