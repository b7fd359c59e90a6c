//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every statement used by the SQLite repository lives
//! here.

/// Enables foreign keys for the connection and creates both tables.
///
/// SQLite only enforces `REFERENCES` clauses when the pragma is on, and the
/// pragma is per connection, so it runs together with the schema.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS folders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    folder_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    note_name TEXT NOT NULL,
    note_content TEXT NOT NULL,
    folder_id INTEGER NOT NULL,
    modified TEXT NOT NULL,
    FOREIGN KEY (folder_id) REFERENCES folders(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_notes_folder_id ON notes(folder_id);
"#;

// Folder queries
pub const SELECT_FOLDERS: &str = r#"
SELECT id, folder_name
FROM folders
ORDER BY id
"#;

pub const SELECT_FOLDER_BY_ID: &str = r#"
SELECT id, folder_name
FROM folders
WHERE id = ?1
"#;

pub const INSERT_FOLDER: &str = r#"
INSERT INTO folders (folder_name)
VALUES (?1)
RETURNING id, folder_name
"#;

pub const UPDATE_FOLDER: &str = r#"
UPDATE folders
SET folder_name = COALESCE(?2, folder_name)
WHERE id = ?1
"#;

pub const DELETE_FOLDER: &str = "DELETE FROM folders WHERE id = ?1";

// Note queries
pub const SELECT_NOTES: &str = r#"
SELECT id, note_name, note_content, folder_id, modified
FROM notes
ORDER BY id
"#;

pub const SELECT_NOTE_BY_ID: &str = r#"
SELECT id, note_name, note_content, folder_id, modified
FROM notes
WHERE id = ?1
"#;

pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (note_name, note_content, folder_id, modified)
VALUES (?1, ?2, ?3, ?4)
RETURNING id, note_name, note_content, folder_id, modified
"#;

pub const UPDATE_NOTE: &str = r#"
UPDATE notes
SET note_name = COALESCE(?2, note_name),
    note_content = COALESCE(?3, note_content),
    modified = COALESCE(?4, modified)
WHERE id = ?1
"#;

pub const DELETE_NOTE: &str = "DELETE FROM notes WHERE id = ?1";
