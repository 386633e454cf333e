//! Manifest loading and validation
//!
//! The manifest names the target document and, per section, the marker pair
//! and the file holding the replacement body:
//!
//! ```toml
//! file = "README.md"
//!
//! [[section]]
//! name = "french"
//! start = "## Français"
//! end = "## Italiano"
//! content = "sections/fr.md"
//! ```
//!
//! Paths are resolved relative to the manifest's directory.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use sections_content::Section;

use crate::error::{CliError, Result};
use crate::io;

/// One section entry in the manifest
#[derive(Debug, Clone, Deserialize)]
pub struct SectionEntry {
    /// Label for logs and diagnostics; unique within the manifest
    pub name: String,
    /// Literal start marker
    pub start: String,
    /// Literal end marker
    pub end: String,
    /// File whose full contents become the replacement body
    pub content: PathBuf,
}

impl SectionEntry {
    /// Convert to a validated content-layer section.
    pub fn to_section(&self) -> sections_content::Result<Section> {
        Section::new(&self.name, &self.start, &self.end)
    }
}

/// Parsed section manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Target document, relative to the manifest directory
    pub file: PathBuf,
    /// Sections to keep in sync, applied in order
    #[serde(rename = "section", default)]
    pub sections: Vec<SectionEntry>,
}

impl Manifest {
    /// Load and validate a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = io::read_text(path)?;
        let manifest: Manifest = toml::from_str(&text).map_err(|e| CliError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(CliError::ManifestInvalid {
                message: "no [[section]] entries".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for entry in &self.sections {
            if !seen.insert(entry.name.as_str()) {
                return Err(CliError::ManifestInvalid {
                    message: format!("duplicate section name {:?}", entry.name),
                });
            }
        }
        Ok(())
    }

    /// Resolve the target document path against the manifest's directory.
    pub fn target(&self, manifest_path: &Path) -> PathBuf {
        resolve(manifest_path, &self.file)
    }

    /// Resolve a section's content path against the manifest's directory.
    pub fn content_path(&self, manifest_path: &Path, entry: &SectionEntry) -> PathBuf {
        resolve(manifest_path, &entry.content)
    }
}

fn resolve(manifest_path: &Path, relative: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(relative),
        _ => relative.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r###"
file = "README.md"

[[section]]
name = "french"
start = "## Français"
end = "## Italiano"
content = "sections/fr.md"
"###;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest: Manifest = toml::from_str(MINIMAL).unwrap();
        assert_eq!(manifest.file, PathBuf::from("README.md"));
        assert_eq!(manifest.sections.len(), 1);
        assert_eq!(manifest.sections[0].name, "french");
        assert_eq!(manifest.sections[0].start, "## Français");
    }

    #[test]
    fn test_validate_rejects_empty_section_list() {
        let manifest: Manifest = toml::from_str("file = \"README.md\"\n").unwrap();
        assert!(matches!(
            manifest.validate().unwrap_err(),
            CliError::ManifestInvalid { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let text = format!(
            "{MINIMAL}\n[[section]]\nname = \"french\"\nstart = \"a\"\nend = \"b\"\ncontent = \"c.md\"\n"
        );
        let manifest: Manifest = toml::from_str(&text).unwrap();
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate section name"));
    }

    #[test]
    fn test_paths_resolve_against_manifest_directory() {
        let manifest: Manifest = toml::from_str(MINIMAL).unwrap();
        let manifest_path = Path::new("docs/sections.toml");

        assert_eq!(manifest.target(manifest_path), PathBuf::from("docs/README.md"));
        assert_eq!(
            manifest.content_path(manifest_path, &manifest.sections[0]),
            PathBuf::from("docs/sections/fr.md")
        );
    }

    #[test]
    fn test_bare_manifest_name_resolves_in_place() {
        let manifest: Manifest = toml::from_str(MINIMAL).unwrap();
        assert_eq!(
            manifest.target(Path::new("sections.toml")),
            PathBuf::from("README.md")
        );
    }

    #[test]
    fn test_entry_with_empty_marker_fails_section_conversion() {
        let text = "file = \"R.md\"\n\n[[section]]\nname = \"x\"\nstart = \"\"\nend = \"b\"\ncontent = \"c.md\"\n";
        let manifest: Manifest = toml::from_str(text).unwrap();
        assert!(manifest.sections[0].to_section().is_err());
    }
}
