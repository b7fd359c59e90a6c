use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use noteful_core::notes::ValidationError;
use noteful_core::storage::{
    repository_error_to_message, repository_error_to_status_code, RepositoryError,
    INTERNAL_ERROR_MESSAGE,
};

/// Error type returned by every API handler.
///
/// Wraps `anyhow::Error` so handlers can use `?` on validation and
/// repository errors alike; the status and client message are picked by
/// downcasting. Bodies look like `{"error":{"message":"..."}}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        if let Some(validation_error) = self.0.downcast_ref::<ValidationError>() {
            return (StatusCode::BAD_REQUEST, validation_error.to_string());
        }

        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, repository_error_to_message(repo_error));
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_MESSAGE.to_string(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, Json(json!({ "error": { "message": message } }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
