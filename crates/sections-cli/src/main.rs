//! Section Manager CLI
//!
//! The command-line driver that keeps marker-delimited sections of
//! documentation files in sync with their content files.

mod cli;
mod commands;
mod error;
mod io;
mod manifest;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

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

    match cli.command {
        Some(Commands::Sync { dry_run }) => commands::run_sync(&cli.manifest, dry_run),
        Some(Commands::Check) => commands::run_check(&cli.manifest),
        None => {
            // No command provided - show help hint
            println!("{} Section Manager CLI", "sections".green().bold());
            println!();
            println!("Run {} for available commands.", "sections --help".cyan());
            Ok(())
        }
    }
}
