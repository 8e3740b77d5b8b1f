//! JSON API handler modules and route assembly.

#[allow(clippy::missing_errors_doc)]
pub mod games;

use axum::Router;
use axum::routing::{get, post};

use goty_app::ports::GameStore;

use crate::state::AppState;

/// Build the game routes.
///
/// The collection is reachable under two equivalent spellings, `/goty` and
/// `/games`; both route to the same handlers.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: GameStore + Send + Sync + 'static,
{
    Router::new()
        .route("/goty", get(games::list::<S>))
        .route("/goty/{id}", post(games::vote::<S>))
        .route("/games", get(games::list::<S>))
        .route("/games/{id}", post(games::vote::<S>))
}
