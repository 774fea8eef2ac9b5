//! Biome Manager CLI
//!
//! Applies biome brush presets to the REDkit editor's terrain session.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::ApplyArgs;
use context::AppContext;
use error::Result;
use interactive::DialoguerChooser;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = AppContext::from_cli(&cli);

    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => {
            println!("{} Biome Manager CLI", "biome".green().bold());
            println!();
            println!("Run {} for available commands.", "biome --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &AppContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Setup => commands::run_setup(ctx, &mut DialoguerChooser).map(|_| ()),
        Commands::Fetch { source_url } => commands::run_fetch(ctx, &source_url),
        Commands::List => commands::run_list(ctx),
        Commands::Show { name } => commands::run_show(ctx, &name),
        Commands::Apply {
            name,
            file,
            project,
            keep_foreign_slots,
        } => {
            let args = ApplyArgs {
                name,
                file,
                project,
                keep_foreign_slots,
            };
            commands::run_apply(ctx, &args, &mut DialoguerChooser).map(|_| ())
        }
        Commands::Convert { json, out } => commands::run_convert(&json, &out),
    }
}
