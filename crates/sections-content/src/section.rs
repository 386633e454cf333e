//! Section markers and the block replacement primitive

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Error, Result};

/// A named pair of literal markers delimiting a replaceable region.
///
/// The markers are plain substrings used for positional lookup only; the
/// name exists for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Label for this section
    pub name: String,
    /// Literal start marker
    pub start: String,
    /// Literal end marker
    pub end: String,
}

impl Section {
    /// Create a section, rejecting empty markers.
    pub fn new(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self> {
        let section = Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        };
        if section.start.is_empty() {
            return Err(Error::empty_marker("start"));
        }
        if section.end.is_empty() {
            return Err(Error::empty_marker("end"));
        }
        Ok(section)
    }

    /// Locate this section's body in `source`.
    pub fn locate(&self, source: &str) -> Result<Range<usize>> {
        locate_block(source, &self.start, &self.end)
    }

    /// Extract the current body text between the markers.
    pub fn body<'a>(&self, source: &'a str) -> Result<&'a str> {
        let span = self.locate(source)?;
        Ok(&source[span])
    }
}

/// Locate the body delimited by `start` and `end` in `source`.
///
/// The first occurrence of `start` anchors the search; the first occurrence
/// of `end` past that marker terminates it. The returned range covers the
/// body only, exclusive of both markers.
pub fn locate_block(source: &str, start: &str, end: &str) -> Result<Range<usize>> {
    if start.is_empty() {
        return Err(Error::empty_marker("start"));
    }
    if end.is_empty() {
        return Err(Error::empty_marker("end"));
    }

    let start_idx = source
        .find(start)
        .ok_or_else(|| Error::marker_not_found(start, 0))?;
    let body_start = start_idx + start.len();

    let end_rel = source[body_start..]
        .find(end)
        .ok_or_else(|| Error::marker_not_found(end, body_start))?;

    Ok(body_start..body_start + end_rel)
}

/// Replace the body between `start` and `end` in `source` with `replacement`.
///
/// Both markers are retained verbatim; only the text strictly between them
/// is substituted. Fails with [`Error::MarkerNotFound`] before producing any
/// output when either marker cannot be located in order.
pub fn replace_block(source: &str, start: &str, end: &str, replacement: &str) -> Result<String> {
    let span = locate_block(source, start, end)?;

    let mut result =
        String::with_capacity(source.len() - (span.end - span.start) + replacement.len());
    result.push_str(&source[..span.start]);
    result.push_str(replacement);
    result.push_str(&source[span.end..]);
    Ok(result)
}
