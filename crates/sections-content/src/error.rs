//! Error types for sections-content

/// Result type for sections-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sections-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Marker not found: {marker:?} (searched from byte {from})")]
    MarkerNotFound { marker: String, from: usize },

    #[error("Empty {role} marker")]
    EmptyMarker { role: String },
}

impl Error {
    pub fn marker_not_found(marker: impl Into<String>, from: usize) -> Self {
        Self::MarkerNotFound {
            marker: marker.into(),
            from,
        }
    }

    pub fn empty_marker(role: impl Into<String>) -> Self {
        Self::EmptyMarker { role: role.into() }
    }
}
