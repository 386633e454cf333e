//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Section Manager - Keep marker-delimited sections of documentation in sync
#[derive(Parser, Debug)]
#[command(name = "sections")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the section manifest
    #[arg(short, long, global = true, default_value = "sections.toml")]
    pub manifest: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rewrite every manifest section in the target document
    ///
    /// Reads the target file once, replaces the body between each section's
    /// markers with the contents of its content file, and writes the file
    /// back in place. Nothing is written unless every section is found.
    ///
    /// Examples:
    ///   sections sync                         # Apply sections.toml
    ///   sections sync --manifest docs.toml    # Alternate manifest
    ///   sections sync --dry-run               # Preview without writing
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Report sections whose bodies differ from their content files
    ///
    /// Exits nonzero when any section is stale, so this can gate CI.
    Check,
}
