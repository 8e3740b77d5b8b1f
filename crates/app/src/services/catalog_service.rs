//! Catalog service — read the full game collection.

use goty_domain::error::GotyError;
use goty_domain::game::Game;

use crate::ports::GameStore;

/// Application service for listing game entries.
pub struct CatalogService<S> {
    store: S,
}

impl<S: GameStore> CatalogService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every game entry in store order.
    ///
    /// A single snapshot read, projected verbatim: whatever fields the store
    /// holds are returned, nothing filtered, nothing redacted.
    ///
    /// # Errors
    ///
    /// Returns [`GotyError::Storage`] when the store read fails; no retry.
    pub async fn list_games(&self) -> Result<Vec<Game>, GotyError> {
        self.store.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::InMemoryGameStore;
    use serde_json::json;

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let svc = CatalogService::new(InMemoryGameStore::default());
        let games = svc.list_games().await.unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn should_return_every_entry_with_all_fields() {
        let store = InMemoryGameStore::default();
        store.seed(Game::new("g1", "Game A", 5));
        store.seed(Game::new("g2", "Game B", 0).with_field("portada", json!("cover.png")));

        let svc = CatalogService::new(store);
        let games = svc.list_games().await.unwrap();

        assert_eq!(games.len(), 2);
        let b = games.iter().find(|g| g.name == "Game B").unwrap();
        assert_eq!(b.extra["portada"], json!("cover.png"));
    }
}
