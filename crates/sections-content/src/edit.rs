//! Edit records for section replacements

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A recorded replacement of one section body.
///
/// Spans refer to the source text the edit was computed against, so an edit
/// can be re-applied or inverted as long as that text is at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// Name of the section that was replaced
    pub section: String,
    /// Byte range of the body in the pre-edit source
    pub span: Range<usize>,
    /// Body text before the replacement
    pub old_body: String,
    /// Body text after the replacement
    pub new_body: String,
}

impl Edit {
    /// Apply this edit to `source`, returning the updated text.
    pub fn apply(&self, source: &str) -> String {
        let mut result =
            String::with_capacity(source.len() - self.span.len() + self.new_body.len());
        result.push_str(&source[..self.span.start]);
        result.push_str(&self.new_body);
        result.push_str(&source[self.span.end..]);
        result
    }

    /// The edit that undoes this one when applied to the post-edit text.
    pub fn inverse(&self) -> Edit {
        Edit {
            section: self.section.clone(),
            span: self.span.start..self.span.start + self.new_body.len(),
            old_body: self.new_body.clone(),
            new_body: self.old_body.clone(),
        }
    }

    /// True when the replacement left the body unchanged.
    pub fn is_noop(&self) -> bool {
        self.old_body == self.new_body
    }
}
