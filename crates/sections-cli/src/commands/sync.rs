//! The sync command: apply every manifest section and write back

use std::path::Path;

use colored::Colorize;
use tracing::debug;

use sections_content::Document;

use crate::error::Result;
use crate::io;
use crate::manifest::Manifest;

/// Apply every section substitution and overwrite the target file.
///
/// The whole transform runs in memory; nothing is written until every
/// section has been located and replaced, so a missing marker leaves the
/// file on disk untouched.
pub fn run_sync(manifest_path: &Path, dry_run: bool) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let target = manifest.target(manifest_path);

    let mut doc = Document::new(io::read_text(&target)?);

    let mut edits = Vec::with_capacity(manifest.sections.len());
    for entry in &manifest.sections {
        let section = entry.to_section()?;
        let replacement = io::read_text(&manifest.content_path(manifest_path, entry))?;
        let edit = doc.replace(&section, &replacement)?;
        debug!(section = %entry.name, bytes = edit.new_body.len(), "section replaced");
        edits.push(edit);
    }

    for edit in &edits {
        if edit.is_noop() {
            println!("{} {}", "unchanged".dimmed(), edit.section);
        } else {
            println!("{} {}", "updated".green(), edit.section);
        }
    }

    if dry_run {
        println!(
            "{} {} not written",
            "dry-run".yellow().bold(),
            target.display()
        );
        return Ok(());
    }

    if doc.is_modified() {
        io::write_text(&target, doc.source())?;
        println!("{} {}", "wrote".green().bold(), target.display());
    } else {
        println!(
            "{} {} already up to date",
            "ok".green().bold(),
            target.display()
        );
    }

    Ok(())
}
