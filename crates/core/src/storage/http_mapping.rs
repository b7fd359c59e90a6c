//! Pure functions for mapping repository errors to HTTP responses.
//!
//! Storage details never reach clients: server-side failures share one
//! generic message and are expected to be logged by the caller.

use super::RepositoryError;

/// Message returned for every 5xx repository failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use noteful_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Folder",
///     id: "12".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`RepositoryError`] to the message shown to API clients.
///
/// ```
/// use noteful_core::storage::{RepositoryError, repository_error_to_message};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Note",
///     id: "3".to_string(),
/// };
/// assert_eq!(repository_error_to_message(&error), "Note doesn't exist");
/// ```
pub fn repository_error_to_message(error: &RepositoryError) -> String {
    match error {
        RepositoryError::NotFound { entity_type, .. } => format!("{entity_type} doesn't exist"),
        // The only constraint a client can trip is the note -> folder reference.
        RepositoryError::InvalidData(_) => "Folder doesn't exist".to_string(),
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_) => INTERNAL_ERROR_MESSAGE.to_string(),
    }
}
