use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sanitize::{escape_text, filter_markup};

/// A named folder that groups notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub folder_name: String,
}

impl Folder {
    /// Returns the folder with its user-supplied text made safe for display.
    pub fn sanitized(self) -> Self {
        Self {
            folder_name: escape_text(&self.folder_name),
            ..self
        }
    }
}

/// A note stored inside a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub note_name: String,
    /// Rich text; a restricted subset of HTML is allowed.
    pub note_content: String,
    pub folder_id: i64,
    /// Last time the note was created or patched.
    pub modified: DateTime<Utc>,
}

impl Note {
    /// Returns the note with its user-supplied text made safe for display.
    pub fn sanitized(self) -> Self {
        Self {
            note_name: escape_text(&self.note_name),
            note_content: filter_markup(&self.note_content),
            ..self
        }
    }
}

/// A folder that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub folder_name: String,
}

impl NewFolder {
    pub fn new(folder_name: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
        }
    }

    /// Attaches a storage-assigned id.
    pub fn into_folder(self, id: i64) -> Folder {
        Folder {
            id,
            folder_name: self.folder_name,
        }
    }
}

/// A note that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub note_name: String,
    pub note_content: String,
    pub folder_id: i64,
    pub modified: DateTime<Utc>,
}

impl NewNote {
    /// Creates a new note stamped with the current time.
    pub fn new(
        note_name: impl Into<String>,
        note_content: impl Into<String>,
        folder_id: i64,
    ) -> Self {
        Self {
            note_name: note_name.into(),
            note_content: note_content.into(),
            folder_id,
            modified: Utc::now(),
        }
    }

    /// Sets a specific modification time (useful for testing).
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    /// Attaches a storage-assigned id.
    pub fn into_note(self, id: i64) -> Note {
        Note {
            id,
            note_name: self.note_name,
            note_content: self.note_content,
            folder_id: self.folder_id,
            modified: self.modified,
        }
    }
}

/// Partial update for a folder. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPatch {
    pub folder_name: Option<String>,
}

impl FolderPatch {
    /// Overwrites the fields present in the patch.
    pub fn apply_to(&self, folder: &mut Folder) {
        if let Some(folder_name) = &self.folder_name {
            folder.folder_name = folder_name.clone();
        }
    }
}

/// Partial update for a note. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub note_name: Option<String>,
    pub note_content: Option<String>,
    pub modified: Option<DateTime<Utc>>,
}

impl NotePatch {
    /// Overwrites the fields present in the patch.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(note_name) = &self.note_name {
            note.note_name = note_name.clone();
        }
        if let Some(note_content) = &self.note_content {
            note.note_content = note_content.clone();
        }
        if let Some(modified) = self.modified {
            note.modified = modified;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_note() -> Note {
        NewNote::new("note1", "content1", 1)
            .with_modified(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
            .into_note(1)
    }

    #[test]
    fn test_folder_serializes_with_snake_case_fields() {
        let folder = NewFolder::new("folder1").into_folder(7);
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "folder_name": "folder1"}));
    }

    #[test]
    fn test_note_serializes_modified_as_rfc3339() {
        let json = serde_json::to_value(sample_note()).unwrap();
        assert_eq!(json["modified"], "2024-01-01T09:00:00Z");
        assert_eq!(json["folder_id"], 1);
    }

    #[test]
    fn test_folder_sanitized_escapes_script() {
        let folder = NewFolder::new("<script>x</script>").into_folder(1);
        assert_eq!(
            folder.sanitized().folder_name,
            "&lt;script&gt;x&lt;/script&gt;"
        );
    }

    #[test]
    fn test_note_sanitized_keeps_id_and_folder() {
        let mut note = sample_note();
        note.note_content = r#"<b onclick="x()">hi</b>"#.to_string();
        let sanitized = note.clone().sanitized();
        assert_eq!(sanitized.note_content, "<b>hi</b>");
        assert_eq!(sanitized.id, note.id);
        assert_eq!(sanitized.folder_id, note.folder_id);
        assert_eq!(sanitized.modified, note.modified);
    }

    #[test]
    fn test_folder_patch_applies_present_fields() {
        let mut folder = NewFolder::new("old").into_folder(1);
        FolderPatch {
            folder_name: Some("new".to_string()),
        }
        .apply_to(&mut folder);
        assert_eq!(folder.folder_name, "new");

        FolderPatch::default().apply_to(&mut folder);
        assert_eq!(folder.folder_name, "new");
    }

    #[test]
    fn test_note_patch_leaves_missing_fields_untouched() {
        let mut note = sample_note();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
        NotePatch {
            note_name: Some("renamed".to_string()),
            note_content: None,
            modified: Some(later),
        }
        .apply_to(&mut note);

        assert_eq!(note.note_name, "renamed");
        assert_eq!(note.note_content, "content1");
        assert_eq!(note.modified, later);
    }
}
