//! Note CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use noteful_core::notes::{CreateNoteRequest, Note, UpdateNoteRequest, ValidationError};
use noteful_core::storage::RepositoryError;

use super::extract::{json_body, parse_id};
use crate::{handlers::AppError, state::AppState};

const ENTITY: &str = "Note";

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ENTITY,
        id: id.to_string(),
    }
}

/// Fetches a note or fails with `NotFound`.
async fn find_note(state: &AppState, id: i64) -> Result<Note, AppError> {
    state
        .note_repo
        .get_note(id)
        .await?
        .ok_or_else(|| not_found(id).into())
}

/// List all notes (GET /api/notes).
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, AppError> {
    let notes = state.note_repo.list_notes().await?;
    Ok(Json(notes.into_iter().map(Note::sanitized).collect()))
}

/// Create a new note (POST /api/notes).
///
/// Fields are checked in the order `note_name`, `note_content`, `folder_id`,
/// then the folder must exist.
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new_note = json_body(body)?.into_new_note(Utc::now())?;

    if state
        .folder_repo
        .get_folder(new_note.folder_id)
        .await?
        .is_none()
    {
        return Err(ValidationError::UnknownFolder(new_note.folder_id).into());
    }

    let note = state.note_repo.create_note(&new_note).await?;

    tracing::info!(
        note_id = note.id,
        folder_id = note.folder_id,
        name = %note.note_name,
        "Created new note"
    );

    let location = format!("/api/notes/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(note.sanitized()),
    ))
}

/// Get a single note by ID (GET /api/notes/{id}).
pub async fn get_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Note>, AppError> {
    let id = parse_id(&raw_id, ENTITY)?;
    let note = find_note(&state, id).await?;
    Ok(Json(note.sanitized()))
}

/// Patch a note by ID (PATCH /api/notes/{id}).
///
/// `modified` is taken from the body when present, otherwise it is set to
/// the current time.
pub async fn update_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id, ENTITY)?;
    find_note(&state, id).await?;

    let patch = json_body(body)?.into_patch(Utc::now())?;
    state.note_repo.update_note(id, &patch).await?;

    tracing::info!(note_id = id, "Updated note");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a note by ID (DELETE /api/notes/{id}).
pub async fn delete_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id, ENTITY)?;
    state.note_repo.delete_note(id).await?;

    tracing::info!(note_id = id, "Deleted note");

    Ok(StatusCode::NO_CONTENT)
}
