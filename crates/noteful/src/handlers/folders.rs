//! Folder CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use noteful_core::notes::{CreateFolderRequest, Folder, UpdateFolderRequest};
use noteful_core::storage::RepositoryError;

use super::extract::{json_body, parse_id};
use crate::{handlers::AppError, state::AppState};

const ENTITY: &str = "Folder";

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ENTITY,
        id: id.to_string(),
    }
}

/// Fetches a folder or fails with `NotFound`.
async fn find_folder(state: &AppState, id: i64) -> Result<Folder, AppError> {
    state
        .folder_repo
        .get_folder(id)
        .await?
        .ok_or_else(|| not_found(id).into())
}

/// List all folders (GET /api/folders).
pub async fn list_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, AppError> {
    let folders = state.folder_repo.list_folders().await?;
    Ok(Json(folders.into_iter().map(Folder::sanitized).collect()))
}

/// Create a new folder (POST /api/folders).
pub async fn create_folder(
    State(state): State<AppState>,
    body: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new_folder = json_body(body)?.into_new_folder()?;

    let folder = state.folder_repo.create_folder(&new_folder).await?;

    tracing::info!(folder_id = folder.id, name = %folder.folder_name, "Created new folder");

    let location = format!("/api/folders/{}", folder.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(folder.sanitized()),
    ))
}

/// Get a single folder by ID (GET /api/folders/{id}).
pub async fn get_folder(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Folder>, AppError> {
    let id = parse_id(&raw_id, ENTITY)?;
    let folder = find_folder(&state, id).await?;
    Ok(Json(folder.sanitized()))
}

/// Patch a folder by ID (PATCH /api/folders/{id}).
///
/// The folder must exist before the body is looked at, so an unknown id is a
/// 404 even when the body is invalid.
pub async fn update_folder(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateFolderRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id, ENTITY)?;
    find_folder(&state, id).await?;

    let patch = json_body(body)?.into_patch()?;
    state.folder_repo.update_folder(id, &patch).await?;

    tracing::info!(folder_id = id, "Updated folder");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a folder by ID (DELETE /api/folders/{id}).
///
/// Notes in the folder are removed with it.
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id, ENTITY)?;
    state.folder_repo.delete_folder(id).await?;

    tracing::info!(folder_id = id, "Deleted folder and its notes");

    Ok(StatusCode::NO_CONTENT)
}
