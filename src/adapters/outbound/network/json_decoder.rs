//! Case-insensitive JSON decoding for loosely specified registry payloads.
//!
//! Object keys are folded to lowercase before the typed decode, so wire
//! structs declare their field names in lowercase. Missing fields decode as
//! `None`; the helpers in [`lenient`] additionally accept the alternative
//! shapes the registries are known to emit for the same attribute.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decodes raw bytes into `T`, matching object keys case-insensitively.
///
/// When two keys of one object differ only by case, a single one of them is kept.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    serde_json::from_value(fold_keys(value))
}

fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut folded = Map::with_capacity(map.len());
            for (key, inner) in map {
                folded
                    .entry(key.to_lowercase())
                    .or_insert_with(|| fold_keys(inner));
            }
            Value::Object(folded)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// `deserialize_with` helpers that normalize alternative value shapes.
///
/// Each helper maps JSON `null` to the empty value and rejects shapes it
/// cannot interpret, which fails the decode of the whole document.
pub mod lenient {
    use chrono::{DateTime, FixedOffset, NaiveDateTime};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar_text(value: Value) -> Result<Option<String>, String> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(part) = scalar_text(item)? {
                        parts.push(part);
                    }
                }
                Ok((!parts.is_empty()).then(|| parts.join(", ")))
            }
            Value::Object(_) => Err("expected a string, found an object".to_string()),
        }
    }

    /// String, number, boolean, or a list of those (joined with `, `)
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        scalar_text(value).map_err(D::Error::custom)
    }

    /// A list of strings, or a single string treated as a one-element list.
    /// `null` stays absent; an empty array is a present, empty list.
    pub fn string_list<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(text) = scalar_text(item).map_err(D::Error::custom)? {
                        list.push(text);
                    }
                }
                Ok(Some(list))
            }
            other => Ok(scalar_text(other)
                .map_err(D::Error::custom)?
                .map(|text| vec![text])),
        }
    }

    /// A URL given either directly as a string or as a JSON-LD node with an `@id`
    pub fn link<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let link = match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Object(mut node) => match node.remove("@id") {
                Some(Value::String(s)) => Some(s),
                Some(Value::Null) | None => None,
                Some(_) => return Err(D::Error::custom("'@id' of a linked node must be a string")),
            },
            _ => return Err(D::Error::custom("expected a URL string or a node with '@id'")),
        };
        Ok(link.filter(|url| !url.trim().is_empty()))
    }

    /// Boolean, or the strings `"true"` / `"false"` in any case
    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(b)),
            Value::String(s) => match s.to_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(D::Error::custom(format!("invalid boolean '{}'", s))),
            },
            other => Err(D::Error::custom(format!("expected a boolean, found {}", other))),
        }
    }

    /// Unsigned integer, or a string holding one
    pub fn unsigned<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_u64()
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected an unsigned integer, found {}", n))),
            Value::String(s) => s
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid unsigned integer '{}': {}", s, e))),
            other => Err(D::Error::custom(format!(
                "expected an unsigned integer, found {}",
                other
            ))),
        }
    }

    /// RFC 3339 timestamp; a timestamp without offset is taken as UTC
    pub fn timestamp<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        if let Ok(parsed) = DateTime::parse_from_rfc3339(&text) {
            return Ok(Some(parsed));
        }

        NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc().fixed_offset()))
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", text, e)))
    }
}
