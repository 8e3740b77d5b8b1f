//! Shared application state for axum handlers.

use std::sync::Arc;

use goty_app::ports::GameStore;
use goty_app::services::catalog_service::CatalogService;
use goty_app::services::vote_service::VoteService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying services themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Catalog read service.
    pub catalog_service: Arc<CatalogService<S>>,
    /// Vote recording service.
    pub vote_service: Arc<VoteService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            vote_service: Arc::clone(&self.vote_service),
        }
    }
}

impl<S> AppState<S>
where
    S: GameStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(catalog_service: CatalogService<S>, vote_service: VoteService<S>) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            vote_service: Arc::new(vote_service),
        }
    }
}
