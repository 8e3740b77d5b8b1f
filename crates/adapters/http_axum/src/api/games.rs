//! JSON handlers for listing games and casting votes.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use goty_app::ports::GameStore;
use goty_domain::game::Game;
use goty_domain::id::GameId;

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation body for a recorded vote.
#[derive(Serialize)]
pub struct VoteConfirmation {
    pub ok: bool,
    pub mensaje: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Game>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the vote endpoint.
pub enum VoteResponse {
    Ok(Json<VoteConfirmation>),
}

impl IntoResponse for VoteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /goty` and `GET /games`
///
/// Returns every game document with all of its fields, in store order.
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: GameStore + Send + Sync + 'static,
{
    let games = state.catalog_service.list_games().await?;
    Ok(ListResponse::Ok(Json(games)))
}

/// `POST /goty/{id}` and `POST /games/{id}`
///
/// The id is opaque: whatever string arrives in the path is forwarded to the
/// store lookup unchanged. An unknown id maps to a 404 body.
pub async fn vote<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<VoteResponse, ApiError>
where
    S: GameStore + Send + Sync + 'static,
{
    let receipt = state.vote_service.cast_vote(&GameId::from(id)).await?;
    Ok(VoteResponse::Ok(Json(VoteConfirmation {
        ok: true,
        mensaje: receipt.mensaje(),
    })))
}
