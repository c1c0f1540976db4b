use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use crate::errors::{AppError, StoreError};

// Every error leaves the API as `{"error": "..."}` with a matching status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),

            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),

            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            // Store errors have specific status codes
            AppError::Store(err) => convert_store_error(err),

            AppError::Session(e) => {
                tracing::error!("Session store failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }

            AppError::Join(e) => {
                tracing::error!("Blocking task failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }

            AppError::Hash(e) => {
                tracing::error!("Password hashing failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// Helper function to map store errors onto HTTP semantics
fn convert_store_error(err: StoreError) -> (StatusCode, String) {
    match err {
        StoreError::UsernameTaken(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        StoreError::ProjectNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        StoreError::UserNotFound(_) => (StatusCode::UNAUTHORIZED, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status_codes() {
        let not_found = AppError::Store(StoreError::ProjectNotFound(7)).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let taken = AppError::Store(StoreError::UsernameTaken("ann".into())).into_response();
        assert_eq!(taken.status(), StatusCode::BAD_REQUEST);

        let too_large = AppError::PayloadTooLarge("body too big".into()).into_response();
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn error_body_is_json() {
        let response = AppError::Forbidden("Project belongs to another user".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Project belongs to another user");
    }
}
