//! SQLite repository implementation.
//!
//! Implements the repository traits from `noteful_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use noteful_core::notes::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};
use noteful_core::storage::{FolderRepository, NoteRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_folder, row_to_note};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Turns "no row changed" into `QueryReturnedNoRows` so it maps to `NotFound`.
fn require_changed(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository implementation.
///
/// Owns a single connection running on a dedicated thread; calls are
/// serialized through it.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::info!(path, "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// FolderRepository implementation
// ============================================================================

#[async_trait]
impl FolderRepository for SqliteRepository {
    async fn list_folders(&self) -> Result<Vec<Folder>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_FOLDERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_folder).map_err(wrap_err)?;

                let mut folders = Vec::new();
                for row_result in rows {
                    folders.push(row_result.map_err(wrap_err)?);
                }
                Ok(folders)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Folder"))
    }

    async fn get_folder(&self, id: i64) -> Result<Option<Folder>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_FOLDER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_folder) {
                    Ok(folder) => Ok(Some(folder)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Folder", id))
    }

    async fn create_folder(&self, folder: &NewFolder) -> Result<Folder> {
        let folder_name = folder.folder_name.clone();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::INSERT_FOLDER, [folder_name], row_to_folder)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Folder"))
    }

    async fn update_folder(&self, id: i64, patch: &FolderPatch) -> Result<()> {
        let folder_name = patch.folder_name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_FOLDER, rusqlite::params![id, folder_name])
                    .map_err(wrap_err)?;
                require_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Folder", id))
    }

    async fn delete_folder(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_FOLDER, [id])
                    .map_err(wrap_err)?;
                require_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Folder", id))
    }
}

// ============================================================================
// NoteRepository implementation
// ============================================================================

#[async_trait]
impl NoteRepository for SqliteRepository {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_NOTES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_note).map_err(wrap_err)?;

                let mut notes = Vec::new();
                for row_result in rows {
                    notes.push(row_result.map_err(wrap_err)?);
                }
                Ok(notes)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_NOTE_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_note) {
                    Ok(note) => Ok(Some(note)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id))
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let note_name = note.note_name.clone();
        let note_content = note.note_content.clone();
        let folder_id = note.folder_id;
        let modified = format_datetime(&note.modified);

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_NOTE,
                    rusqlite::params![note_name, note_content, folder_id, modified],
                    row_to_note,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn update_note(&self, id: i64, patch: &NotePatch) -> Result<()> {
        let note_name = patch.note_name.clone();
        let note_content = patch.note_content.clone();
        let modified = patch.modified.as_ref().map(format_datetime);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_NOTE,
                        rusqlite::params![id, note_name, note_content, modified],
                    )
                    .map_err(wrap_err)?;
                require_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id))
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_NOTE, [id]).map_err(wrap_err)?;
                require_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id))
    }
}
