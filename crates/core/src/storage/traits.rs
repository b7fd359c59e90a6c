use async_trait::async_trait;

use crate::notes::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

use super::Result;

/// Repository for folder operations.
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// Lists every folder ordered by id.
    async fn list_folders(&self) -> Result<Vec<Folder>>;

    /// Gets a folder by its ID.
    async fn get_folder(&self, id: i64) -> Result<Option<Folder>>;

    /// Persists a new folder and returns it with its assigned id.
    async fn create_folder(&self, folder: &NewFolder) -> Result<Folder>;

    /// Applies a partial update. Fails with `NotFound` when the folder is missing.
    async fn update_folder(&self, id: i64, patch: &FolderPatch) -> Result<()>;

    /// Deletes a folder and, through the foreign key, its notes.
    async fn delete_folder(&self, id: i64) -> Result<()>;
}

/// Repository for note operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Lists every note ordered by id.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Gets a note by its ID.
    async fn get_note(&self, id: i64) -> Result<Option<Note>>;

    /// Persists a new note and returns it with its assigned id.
    ///
    /// Fails with `InvalidData` when `folder_id` does not reference a folder.
    async fn create_note(&self, note: &NewNote) -> Result<Note>;

    /// Applies a partial update. Fails with `NotFound` when the note is missing.
    async fn update_note(&self, id: i64, patch: &NotePatch) -> Result<()>;

    /// Deletes a note by its ID.
    async fn delete_note(&self, id: i64) -> Result<()>;
}
