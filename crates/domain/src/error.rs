//! Common error types used across the workspace.

/// Top-level error for the goty service.
///
/// There is deliberately no validation variant: ids are opaque and never
/// format-checked, so a malformed id is indistinguishable from a missing one
/// and surfaces as [`GotyError::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum GotyError {
    /// The requested vote target does not exist in the store.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The document store failed (connectivity, query, quota).
    /// Never retried internally.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by id matched no document.
#[derive(Debug, thiserror::Error)]
#[error("No existe el juego con ID {id}")]
pub struct NotFoundError {
    /// The identifier that matched nothing.
    pub id: String,
}
