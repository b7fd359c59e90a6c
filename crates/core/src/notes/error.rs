use thiserror::Error;

/// Errors raised while validating a request body.
///
/// The display strings are the exact messages returned to API clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),
    #[error("Request body must contain 'folder_name'")]
    EmptyFolderPatch,
    #[error("Request body must contain either 'note_name' or 'note_content'")]
    EmptyNotePatch,
    #[error("Folder doesn't exist")]
    UnknownFolder(i64),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        assert_eq!(
            ValidationError::MissingField("folder_name").to_string(),
            "Missing 'folder_name' in request body"
        );
    }

    #[test]
    fn test_empty_patch_display() {
        assert_eq!(
            ValidationError::EmptyFolderPatch.to_string(),
            "Request body must contain 'folder_name'"
        );
        assert_eq!(
            ValidationError::EmptyNotePatch.to_string(),
            "Request body must contain either 'note_name' or 'note_content'"
        );
    }

    #[test]
    fn test_unknown_folder_display_hides_id() {
        assert_eq!(
            ValidationError::UnknownFolder(42).to_string(),
            "Folder doesn't exist"
        );
    }
}
