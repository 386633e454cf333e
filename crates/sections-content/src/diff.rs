//! Line-level change summaries for section bodies

use similar::{ChangeTag, TextDiff};

/// Summary of how a section body would change.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDiff {
    /// Are the two bodies identical?
    pub is_equivalent: bool,
    /// Lines present only in the new body
    pub insertions: usize,
    /// Lines present only in the old body
    pub deletions: usize,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
}

impl BodyDiff {
    /// Create a diff indicating the bodies are identical.
    pub fn equivalent() -> Self {
        Self {
            is_equivalent: true,
            insertions: 0,
            deletions: 0,
            similarity: 1.0,
        }
    }

    /// Compute a line-level diff between two bodies.
    ///
    /// Uses the `similar` crate's TextDiff for line-by-line comparison.
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::equivalent();
        }

        let text_diff = TextDiff::from_lines(old, new);
        let similarity = text_diff.ratio() as f64;

        let mut insertions = 0;
        let mut deletions = 0;
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => insertions += 1,
                ChangeTag::Delete => deletions += 1,
                ChangeTag::Equal => {}
            }
        }

        Self {
            is_equivalent: insertions == 0 && deletions == 0,
            insertions,
            deletions,
            similarity,
        }
    }
}

impl Default for BodyDiff {
    fn default() -> Self {
        Self::equivalent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bodies_are_equivalent() {
        let diff = BodyDiff::compute("a\nb\n", "a\nb\n");
        assert!(diff.is_equivalent);
        assert_eq!(diff.similarity, 1.0);
    }

    #[test]
    fn counts_inserted_and_deleted_lines() {
        let diff = BodyDiff::compute("a\nb\n", "a\nc\nd\n");
        assert!(!diff.is_equivalent);
        assert_eq!(diff.deletions, 1);
        assert_eq!(diff.insertions, 2);
        assert!(diff.similarity < 1.0);
    }
}
