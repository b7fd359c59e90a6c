//! Serde helper functions for JSON request bodies.
//!
//! Clients routinely send empty strings for fields they did not fill in, so
//! these helpers fold blank values into `None` and let the validation layer
//! report them as missing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional timestamp, treating empty strings as None.
///
/// Accepts the formats understood by [`parse_timestamp`].
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}"))),
        _ => Ok(None),
    }
}

/// Parse a timestamp sent by a client.
///
/// Accepts RFC 3339 (`2024-06-15T10:30:00Z`), ISO dates (`2024-06-15`) and
/// US dates (`6/15/2024`). Bare dates resolve to midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
        timestamp_field: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let json = r#"{"string_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let json = r#"{"string_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_null() {
        let json = r#"{"string_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"string_field": "hello"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_wrong_type() {
        let json = r#"{"string_field": 42}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_timestamp_rfc3339() {
        let json = r#"{"timestamp_field": "2024-06-15T10:30:00Z"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.timestamp_field,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_timestamp_empty() {
        let json = r#"{"timestamp_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.timestamp_field, None);
    }

    #[test]
    fn test_deserialize_optional_timestamp_invalid() {
        let json = r#"{"timestamp_field": "yesterday"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let parsed = parse_timestamp("2024-06-15T12:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_iso_date() {
        let parsed = parse_timestamp("2024-06-15").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_us_date() {
        let parsed = parse_timestamp("6/15/2024").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("15th of June").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
