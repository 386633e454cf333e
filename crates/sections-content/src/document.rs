//! Unified Document type

use crate::edit::Edit;
use crate::error::Result;
use crate::section::Section;

/// A document undergoing section replacement.
///
/// The full text lives in memory; the caller is responsible for loading it
/// and for persisting the result. Replacements are pure string operations,
/// so a failed lookup leaves the document exactly as it was.
pub struct Document {
    /// Source as originally provided (for is_modified tracking)
    original_source: String,
    /// Current source (may differ from original after replacements)
    source: String,
}

impl Document {
    /// Wrap the full text of a document.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            original_source: source.clone(),
            source,
        }
    }

    /// Get current source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consume the document, yielding the current source.
    pub fn into_source(self) -> String {
        self.source
    }

    /// Check if the document has been modified from its original source.
    pub fn is_modified(&self) -> bool {
        self.source != self.original_source
    }

    /// Current body of `section`.
    pub fn body(&self, section: &Section) -> Result<&str> {
        section.body(&self.source)
    }

    /// Replace the body of `section` with `replacement`.
    ///
    /// Returns the applied [`Edit`]. On error the document is untouched.
    pub fn replace(&mut self, section: &Section, replacement: &str) -> Result<Edit> {
        let span = section.locate(&self.source)?;
        let edit = Edit {
            section: section.name.clone(),
            span: span.clone(),
            old_body: self.source[span].to_string(),
            new_body: replacement.to_string(),
        };
        self.source = edit.apply(&self.source);
        Ok(edit)
    }
}
