//! Required-field rules for create and partial update requests.

use super::error::ValidationError;

/// Unwraps a required field, reporting it by name when absent.
///
/// Chaining calls with `?` reports the first missing field in declaration
/// order.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Checks that at least one field is present, failing with `err` otherwise.
pub fn require_any(present: &[bool], err: ValidationError) -> Result<(), ValidationError> {
    if present.contains(&true) {
        Ok(())
    } else {
        Err(err)
    }
}
