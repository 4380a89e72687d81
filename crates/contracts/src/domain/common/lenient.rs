//! Lenient serde helpers for backend payloads.
//!
//! The REST API is not strict about scalar types: ids and amounts arrive as
//! numbers or strings, text columns arrive as `null`. These helpers normalise
//! all of that into `String` so records stay simple.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Number, string, bool or null into a `String` (`null` becomes empty).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(scalar_to_string).unwrap_or_default())
}

/// Same as [`string_or_number`] but keeps `None` for null / missing values.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| !v.is_null())
        .map(scalar_to_string)
        .filter(|s| !s.is_empty()))
}

/// Bool, 0/1 or "true"/"false"; anything else is `false`.
pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Writes a numeric id back as a JSON number, anything else as a string.
pub fn numeric_string<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value.parse::<i64>() {
        Ok(n) => serializer.serialize_i64(n),
        Err(_) => serializer.serialize_str(value),
    }
}

/// Parses a money-like string ("1,499.50", " 200 ") into `f64`, 0.0 when blank or invalid.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        amount: Option<String>,
        #[serde(default, deserialize_with = "flexible_bool")]
        active: bool,
    }

    #[test]
    fn test_numbers_and_nulls_normalise() {
        let p: Payload = serde_json::from_str(r#"{"id": 42, "amount": null, "active": 1}"#).unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.amount, None);
        assert!(p.active);

        let p: Payload = serde_json::from_str(r#"{"id": "A-1", "amount": 10.5}"#).unwrap();
        assert_eq!(p.id, "A-1");
        assert_eq!(p.amount.as_deref(), Some("10.5"));
        assert!(!p.active);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,499.50"), 1499.5);
        assert_eq!(parse_amount(" 200 "), 200.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("n/a"), 0.0);
    }
}
