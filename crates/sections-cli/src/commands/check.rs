//! The check command: report sections that drifted from their content files

use std::path::Path;

use colored::Colorize;

use sections_content::{BodyDiff, Document};

use crate::error::{CliError, Result};
use crate::io;
use crate::manifest::Manifest;

/// Compare every section body against its content file without writing.
///
/// Returns an error when any section is stale so the process exits nonzero
/// and the command can gate CI.
pub fn run_check(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let target = manifest.target(manifest_path);

    let doc = Document::new(io::read_text(&target)?);

    let mut stale = 0usize;
    for entry in &manifest.sections {
        let section = entry.to_section()?;
        let replacement = io::read_text(&manifest.content_path(manifest_path, entry))?;
        let body = doc.body(&section)?;

        let diff = BodyDiff::compute(body, &replacement);
        if diff.is_equivalent {
            println!("{} {}", "clean".green(), entry.name);
        } else {
            stale += 1;
            println!(
                "{} {} (+{} -{} lines)",
                "stale".red().bold(),
                entry.name,
                diff.insertions,
                diff.deletions
            );
        }
    }

    if stale > 0 {
        return Err(CliError::user(format!("{stale} section(s) out of date")));
    }

    println!(
        "{} all {} section(s) up to date",
        "ok".green().bold(),
        manifest.sections.len()
    );
    Ok(())
}
