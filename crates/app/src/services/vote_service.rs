//! Vote service — record a single vote on a game entry.

use goty_domain::error::{GotyError, NotFoundError};
use goty_domain::id::GameId;
use goty_domain::vote::VoteReceipt;

use crate::ports::GameStore;

/// Application service for casting votes.
pub struct VoteService<S> {
    store: S,
}

impl<S: GameStore> VoteService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record one vote on the entry identified by `id`.
    ///
    /// Fetches a snapshot, confirms existence, then writes back the
    /// incremented counter as a partial update. This is a non-atomic
    /// read-then-write: concurrent votes on the same id can race and the
    /// last write wins. The store is left untouched when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`GotyError::NotFound`] when no entry with `id` exists, or
    /// [`GotyError::Storage`] when either store call fails.
    pub async fn cast_vote(&self, id: &GameId) -> Result<VoteReceipt, GotyError> {
        let Some(game) = self.store.get_by_id(id).await? else {
            return Err(NotFoundError { id: id.to_string() }.into());
        };

        // Existence is confirmed above, so the snapshot carries a counter;
        // no fallback default is needed here.
        self.store.set_votes(id, game.votes + 1).await?;
        tracing::debug!(id = %id, game = %game.name, "vote recorded");

        Ok(VoteReceipt { name: game.name })
    }
}
