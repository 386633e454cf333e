//! Basic usage example for sections-content

use sections_content::{BodyDiff, Document, Section};

fn main() -> sections_content::Result<()> {
    let source = "# My Project\n\
                  <!-- install:start -->\n\
                  cargo install my-project\n\
                  <!-- install:end -->\n\
                  More prose.\n";

    let mut doc = Document::new(source);
    let install = Section::new("install", "<!-- install:start -->", "<!-- install:end -->")?;

    println!("Current body:{}", doc.body(&install)?);

    // Replace the section body; both markers stay in place
    let edit = doc.replace(&install, "\ncargo install my-project --locked\n")?;
    println!("Replaced {} ({} -> {} bytes)", edit.section, edit.old_body.len(), edit.new_body.len());

    let diff = BodyDiff::compute(&edit.old_body, &edit.new_body);
    println!("Change summary: +{} -{} lines", diff.insertions, diff.deletions);

    // Roll the change back
    let restored = edit.inverse().apply(doc.source());
    assert_eq!(restored, source);
    println!("\nFinal document:\n{}", doc.source());

    Ok(())
}
