//! Lenient field decoders for backend JSON
//!
//! The PHP endpoints serialize MySQL rows as-is, so a column may come back
//! as a string, a number, or `null` depending on the driver and the row.
//! These helpers are used with `#[serde(deserialize_with = ...)]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar JSON value as a string (`null` → empty)
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Interpret a scalar JSON value as an integer, if it holds one
pub fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserialize a string, number or null into a `String`
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_string).unwrap_or_default())
}

/// Deserialize an optional string; blanks and null become `None`
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .map(value_to_string)
        .filter(|s| !s.trim().is_empty()))
}

/// Deserialize a string, number or null into an `i64` (unparsable → 0)
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64).unwrap_or_default())
}

/// Deserialize an optional integer; null and unparsable become `None`
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

/// Deserialize a possibly-null array into a `Vec` (null → empty)
pub fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string")]
        name: String,
        #[serde(default, deserialize_with = "int")]
        age: i64,
        #[serde(default, deserialize_with = "opt_int")]
        relative: Option<i64>,
        #[serde(default, deserialize_with = "opt_string")]
        note: Option<String>,
        #[serde(default, deserialize_with = "vec")]
        items: Vec<String>,
    }

    #[test]
    fn test_numbers_as_strings() {
        let row: Row = serde_json::from_value(json!({
            "name": 17, "age": "42", "relative": "7", "note": 3, "items": ["a"]
        }))
        .unwrap();
        assert_eq!(row.name, "17");
        assert_eq!(row.age, 42);
        assert_eq!(row.relative, Some(7));
        assert_eq!(row.note.as_deref(), Some("3"));
        assert_eq!(row.items, vec!["a".to_string()]);
    }

    #[test]
    fn test_nulls_and_missing() {
        let row: Row = serde_json::from_value(json!({
            "name": null, "relative": null, "note": "  ", "items": null
        }))
        .unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.age, 0);
        assert_eq!(row.relative, None);
        assert_eq!(row.note, None);
        assert!(row.items.is_empty());
    }

    #[test]
    fn test_garbage_integer_defaults_to_zero() {
        let row: Row = serde_json::from_value(json!({ "age": "unknown" })).unwrap();
        assert_eq!(row.age, 0);
    }
}
