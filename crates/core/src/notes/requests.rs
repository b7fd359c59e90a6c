//! API request types for folder and note operations.
//!
//! Every field is optional at the serde level so that a missing field turns
//! into a [`ValidationError`] with a precise message instead of a generic
//! deserialization failure. Unknown fields are ignored. Converting a request
//! validates it first and then sanitizes the user-supplied text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::{FolderPatch, NewFolder, NewNote, NotePatch};
use super::validation::{require_any, required};
use crate::sanitize::{escape_text, filter_markup};
use crate::serde::{deserialize_optional_string, deserialize_optional_timestamp};

/// Request payload for creating a new folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub folder_name: Option<String>,
}

impl CreateFolderRequest {
    pub fn new(folder_name: impl Into<String>) -> Self {
        Self {
            folder_name: Some(folder_name.into()),
        }
    }

    /// Validates the request and converts it into a sanitized folder.
    pub fn into_new_folder(self) -> Result<NewFolder, ValidationError> {
        let folder_name = required(self.folder_name, "folder_name")?;
        Ok(NewFolder::new(escape_text(&folder_name)))
    }
}

/// Request payload for patching a folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub folder_name: Option<String>,
}

impl UpdateFolderRequest {
    /// Validates the request and converts it into a sanitized patch.
    pub fn into_patch(self) -> Result<FolderPatch, ValidationError> {
        require_any(
            &[self.folder_name.is_some()],
            ValidationError::EmptyFolderPatch,
        )?;

        Ok(FolderPatch {
            folder_name: self.folder_name.as_deref().map(escape_text),
        })
    }
}

/// Request payload for creating a new note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note_content: Option<String>,
    #[serde(default)]
    pub folder_id: Option<i64>,
}

impl CreateNoteRequest {
    pub fn new(
        note_name: impl Into<String>,
        note_content: impl Into<String>,
        folder_id: i64,
    ) -> Self {
        Self {
            note_name: Some(note_name.into()),
            note_content: Some(note_content.into()),
            folder_id: Some(folder_id),
        }
    }

    /// Validates the request and converts it into a sanitized note stamped
    /// with `now`.
    pub fn into_new_note(self, now: DateTime<Utc>) -> Result<NewNote, ValidationError> {
        let note_name = required(self.note_name, "note_name")?;
        let note_content = required(self.note_content, "note_content")?;
        let folder_id = required(self.folder_id, "folder_id")?;

        Ok(NewNote {
            note_name: escape_text(&note_name),
            note_content: filter_markup(&note_content),
            folder_id,
            modified: now,
        })
    }
}

/// Request payload for patching a note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note_content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub modified: Option<DateTime<Utc>>,
}

impl UpdateNoteRequest {
    /// Validates the request and converts it into a sanitized patch.
    ///
    /// A supplied `modified` is honored; otherwise the note is stamped with
    /// `now`.
    pub fn into_patch(self, now: DateTime<Utc>) -> Result<NotePatch, ValidationError> {
        require_any(
            &[self.note_name.is_some(), self.note_content.is_some()],
            ValidationError::EmptyNotePatch,
        )?;

        Ok(NotePatch {
            note_name: self.note_name.as_deref().map(escape_text),
            note_content: self.note_content.as_deref().map(filter_markup),
            modified: Some(self.modified.unwrap_or(now)),
        })
    }
}
