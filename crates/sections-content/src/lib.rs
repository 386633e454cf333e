//! Marker-delimited section editing for Section Manager
//!
//! Provides the pure text-substitution core: locating a region bounded by
//! literal start/end markers and replacing its body while both markers stay
//! intact, so the document remains re-editable on later runs.

pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
pub mod section;

pub use diff::BodyDiff;
pub use document::Document;
pub use edit::Edit;
pub use error::{Error, Result};
pub use section::{Section, locate_block, replace_block};
