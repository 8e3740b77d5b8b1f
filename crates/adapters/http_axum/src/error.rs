//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use goty_domain::error::GotyError;

/// JSON error body returned by the API.
#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    mensaje: String,
}

/// Maps [`GotyError`] to an HTTP response with appropriate status code.
pub struct ApiError(GotyError);

impl From<GotyError> for ApiError {
    fn from(err: GotyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, mensaje) = match &self.0 {
            GotyError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            GotyError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { ok: false, mensaje })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goty_domain::error::NotFoundError;

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::from(GotyError::from(NotFoundError {
            id: "g9".to_string(),
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_storage_fault_to_500() {
        let err = ApiError::from(GotyError::Storage("connection reset".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
