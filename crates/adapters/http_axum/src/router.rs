//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use goty_app::ports::GameStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the greeting, the health probe, and the game routes. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem, and a permissive [`CorsLayer`] accepting
/// requests from any origin.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: GameStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Greeting body served at the root path.
#[derive(Serialize)]
struct Greeting {
    mensaje: &'static str,
}

async fn greeting() -> Json<Greeting> {
    Json(Greeting {
        mensaje: "Bienvenido a la API de Game of the Year",
    })
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use goty_app::services::catalog_service::CatalogService;
    use goty_app::services::vote_service::VoteService;
    use goty_domain::error::GotyError;
    use goty_domain::game::Game;
    use goty_domain::id::GameId;

    /// Store with no documents in it.
    struct EmptyStore;

    impl GameStore for EmptyStore {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Game>, GotyError>> + Send {
            async { Ok(vec![]) }
        }

        fn get_by_id(
            &self,
            _id: &GameId,
        ) -> impl Future<Output = Result<Option<Game>, GotyError>> + Send {
            async { Ok(None) }
        }

        fn set_votes(
            &self,
            _id: &GameId,
            _votes: u64,
        ) -> impl Future<Output = Result<(), GotyError>> + Send {
            async { Ok(()) }
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            CatalogService::new(EmptyStore),
            VoteService::new(EmptyStore),
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_greeting_at_root() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(value["mensaje"].is_string());
    }

    #[tokio::test]
    async fn should_serve_empty_catalog_on_both_paths() {
        for path in ["/goty", "/games"] {
            let response = test_app()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body = response.into_body().collect().await.unwrap().to_bytes();
            let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(value, serde_json::json!([]));
        }
    }

    #[tokio::test]
    async fn should_return_404_body_when_voting_on_unknown_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/goty/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["ok"], serde_json::json!(false));
        assert_eq!(
            value["mensaje"],
            serde_json::json!("No existe el juego con ID missing")
        );
    }

    #[tokio::test]
    async fn should_allow_any_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/goty")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }
}
