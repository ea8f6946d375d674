/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Serde helpers for the loosely typed Pocket payloads
//!
//! The API mixes strings and numbers for the same field depending on the
//! endpoint and encodes empty maps as `[]`.

use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Deserializes a string, number, bool or null into a `String`
///
/// Null becomes an empty string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Int(i)) => i.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        Some(Scalar::Bool(b)) => if b { "1" } else { "0" }.to_string(),
    })
}

/// Deserializes a number or a numeric string into an `i64`
///
/// Null and empty strings become `0`.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Scalar::Int(i)) => Ok(i),
        Some(Scalar::Float(f)) => Ok(f as i64),
        Some(Scalar::Bool(b)) => Ok(i64::from(b)),
        Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

/// Deserializes a JSON object keyed by id, accepting `[]` and null as empty
///
/// Entries are decoded one by one so a bad entry is reported with its key.
pub fn map_or_empty_seq<'de, D, V>(deserializer: D) -> Result<HashMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(HashMap::new()),
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(key, value)| match serde_json::from_value(value) {
                Ok(v) => Ok((key, v)),
                Err(e) => Err(de::Error::custom(format!("entry {key:?}: {e}"))),
            })
            .collect(),
        Some(Value::Array(seq)) if seq.is_empty() => Ok(HashMap::new()),
        Some(Value::Array(seq)) => Err(de::Error::custom(format!(
            "expected an object, got an array of {} elements",
            seq.len()
        ))),
        Some(other) => Err(de::Error::custom(format!(
            "expected an object or an empty array, got {other}"
        ))),
    }
}

/// Deserializes null as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a unix timestamp sent as a string; `"0"` means unset
#[must_use]
pub fn parse_unix_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match raw.trim().parse::<i64>() {
        Ok(secs) if secs > 0 => DateTime::from_timestamp(secs, 0),
        _ => None,
    }
}

/// Joins tags into the comma-separated form the API expects
///
/// Blank tags are dropped and each tag is trimmed.
pub fn join_tags<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
