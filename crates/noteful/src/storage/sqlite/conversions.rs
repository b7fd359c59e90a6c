//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use noteful_core::notes::{Folder, Note};
use rusqlite::Row;

/// Convert a SQLite row to a Folder.
///
/// Expected columns: id, folder_name
pub fn row_to_folder(row: &Row) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        folder_name: row.get(1)?,
    })
}

/// Convert a SQLite row to a Note.
///
/// Expected columns: id, note_name, note_content, folder_id, modified
pub fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let modified: String = row.get(4)?;

    Ok(Note {
        id: row.get(0)?,
        note_name: row.get(1)?,
        note_content: row.get(2)?,
        folder_id: row.get(3)?,
        modified: parse_datetime(4, &modified)?,
    })
}

/// Parse a datetime from RFC 3339 string stored in column `idx`.
fn parse_datetime(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use rusqlite::Connection;

    fn conn() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_row_to_folder() {
        let conn = conn();
        let folder = conn
            .query_row("SELECT 4, 'folder4'", [], row_to_folder)
            .unwrap();
        assert_eq!(
            folder,
            Folder {
                id: 4,
                folder_name: "folder4".to_string()
            }
        );
    }

    #[test]
    fn test_row_to_note() {
        let conn = conn();
        let note = conn
            .query_row(
                "SELECT 1, 'note1', 'content1', 2, '2024-06-15T10:30:00+00:00'",
                [],
                row_to_note,
            )
            .unwrap();

        assert_eq!(note.id, 1);
        assert_eq!(note.note_name, "note1");
        assert_eq!(note.note_content, "content1");
        assert_eq!(note.folder_id, 2);
        assert_eq!(
            note.modified,
            Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_row_to_note_rejects_bad_timestamp() {
        let conn = conn();
        let result = conn.query_row(
            "SELECT 1, 'note1', 'content1', 2, 'yesterday'",
            [],
            row_to_note,
        );
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(4, _, _))
        ));
    }

    #[test]
    fn test_format_datetime_round_trips_full_precision() {
        let dt = Utc
            .with_ymd_and_hms(2024, 6, 15, 10, 30, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let formatted = format_datetime(&dt);
        assert!(formatted.starts_with("2024-06-15T10:30:00.123456789"));
        assert_eq!(parse_datetime(0, &formatted).unwrap(), dt);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime(0, "not-a-datetime").is_err());
    }
}
