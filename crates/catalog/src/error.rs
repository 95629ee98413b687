use thiserror::Error;

/// Errors surfaced when a [`CatalogSource`](crate::CatalogSource) fetch
/// cannot produce the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The backing source was unreachable or returned malformed data.
    #[error("component catalog fetch failed: {reason}")]
    FetchFailed { reason: String },
}

impl FetchError {
    /// Build a [`FetchError::FetchFailed`] from a human-readable reason.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            reason: reason.into(),
        }
    }
}
