//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use noteful_core::notes::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};
use noteful_core::storage::{FolderRepository, NoteRepository, RepositoryError, Result};

/// One table: rows keyed by id plus the last id handed out.
///
/// Ids are never reused, matching `AUTOINCREMENT`.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Default)]
struct Tables {
    folders: Table<Folder>,
    notes: Table<Note>,
}

/// In-memory storage backend.
///
/// Both tables sit behind one `RwLock` so the folder reference check and the
/// cascade on delete see a consistent view. Data is lost when the repository
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(entity_type: &'static str, id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type,
        id: id.to_string(),
    }
}

#[async_trait]
impl FolderRepository for InMemoryRepository {
    async fn list_folders(&self) -> Result<Vec<Folder>> {
        let tables = self.tables.read().await;
        Ok(tables.folders.rows.values().cloned().collect())
    }

    async fn get_folder(&self, id: i64) -> Result<Option<Folder>> {
        let tables = self.tables.read().await;
        Ok(tables.folders.rows.get(&id).cloned())
    }

    async fn create_folder(&self, folder: &NewFolder) -> Result<Folder> {
        let mut tables = self.tables.write().await;
        let id = tables.folders.next_id();
        let folder = folder.clone().into_folder(id);
        tables.folders.rows.insert(id, folder.clone());
        Ok(folder)
    }

    async fn update_folder(&self, id: i64, patch: &FolderPatch) -> Result<()> {
        let mut tables = self.tables.write().await;
        let folder = tables
            .folders
            .rows
            .get_mut(&id)
            .ok_or_else(|| not_found("Folder", id))?;
        patch.apply_to(folder);
        Ok(())
    }

    async fn delete_folder(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .folders
            .rows
            .remove(&id)
            .ok_or_else(|| not_found("Folder", id))?;
        tables.notes.rows.retain(|_, note| note.folder_id != id);
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let tables = self.tables.read().await;
        Ok(tables.notes.rows.values().cloned().collect())
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>> {
        let tables = self.tables.read().await;
        Ok(tables.notes.rows.get(&id).cloned())
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let mut tables = self.tables.write().await;
        if !tables.folders.rows.contains_key(&note.folder_id) {
            return Err(RepositoryError::InvalidData(
                "Foreign key constraint violation for Note".to_string(),
            ));
        }
        let id = tables.notes.next_id();
        let note = note.clone().into_note(id);
        tables.notes.rows.insert(id, note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: i64, patch: &NotePatch) -> Result<()> {
        let mut tables = self.tables.write().await;
        let note = tables
            .notes
            .rows
            .get_mut(&id)
            .ok_or_else(|| not_found("Note", id))?;
        patch.apply_to(note);
        Ok(())
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .notes
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("Note", id))
    }
}
