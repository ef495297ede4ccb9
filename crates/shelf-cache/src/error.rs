//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the query cache.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// The fetch this ticket belongs to has been superseded by a newer
    /// fetch for the same key; its result must be discarded.
    #[error("Fetch superseded for key: {0}")]
    Superseded(String),

    /// No entry exists for the ticket's key (it was invalidated while the
    /// fetch was in flight).
    #[error("No entry for key: {0}")]
    NotFound(String),
}
