//! Serde helper functions for request deserialization.
//!
//! These functions handle the distinction between missing, `null`, empty and
//! present values in JSON request bodies.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating the empty string as None.
///
/// Whitespace is kept as is: `"   "` is a present value.
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserialize a field that distinguishes `null` from a missing key.
///
/// Must be combined with `#[serde(default)]`: a missing key yields `None`,
/// an explicit `null` yields `Some(None)` and a value yields `Some(Some(v))`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_non_empty_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_nullable")]
        nullable_field: Option<Option<String>>,
    }

    #[test]
    fn test_deserialize_non_empty_string_empty() {
        let json = r#"{"string_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_non_empty_string_keeps_whitespace() {
        let json = r#"{"string_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("   ".to_string()));
    }

    #[test]
    fn test_deserialize_non_empty_string_value() {
        let json = r#"{"string_field": "hello"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_deserialize_non_empty_string_missing() {
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_nullable_missing() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.nullable_field, None);
    }

    #[test]
    fn test_deserialize_nullable_null() {
        let json = r#"{"nullable_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.nullable_field, Some(None));
    }

    #[test]
    fn test_deserialize_nullable_value() {
        let json = r#"{"nullable_field": "US123"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.nullable_field, Some(Some("US123".to_string())));
    }

    #[test]
    fn test_deserialize_nullable_wrong_type() {
        let json = r#"{"nullable_field": 42}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
