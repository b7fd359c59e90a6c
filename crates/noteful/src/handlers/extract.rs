//! Helpers that turn raw extractor output into domain errors.

use axum::{extract::rejection::JsonRejection, Json};

use noteful_core::notes::ValidationError;
use noteful_core::storage::RepositoryError;

/// Parses a path id. Anything that is not an integer cannot name a row, so
/// it is reported as that entity not existing.
pub fn parse_id(raw: &str, entity_type: &'static str) -> Result<i64, RepositoryError> {
    raw.parse().map_err(|_| RepositoryError::NotFound {
        entity_type,
        id: raw.to_string(),
    })
}

/// Unwraps a JSON body, turning any rejection into a 400.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))
}
