//! Storage port — the document-store collaborator contract.
//!
//! Mirrors the three store operations the service consumes: a whole-collection
//! snapshot read, a single-document snapshot read, and a partial field update.
//! Anything the store itself guarantees (or fails to guarantee) about
//! consistency passes straight through this boundary.

use std::future::Future;

use goty_domain::error::GotyError;
use goty_domain::game::Game;
use goty_domain::id::GameId;

/// Document store holding the game collection.
pub trait GameStore {
    /// Snapshot read of every document in the collection, in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Game>, GotyError>> + Send;

    /// Snapshot read of one document by id. `None` when the id matches
    /// nothing; the id is forwarded as-is, never format-checked.
    fn get_by_id(
        &self,
        id: &GameId,
    ) -> impl Future<Output = Result<Option<Game>, GotyError>> + Send;

    /// Partial update setting the vote counter of one document.
    /// Last write wins; there is no compare-and-swap.
    fn set_votes(
        &self,
        id: &GameId,
        votes: u64,
    ) -> impl Future<Output = Result<(), GotyError>> + Send;
}
