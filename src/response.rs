//! Tolerant mapping from raw response bytes to a uniform keyed structure.
//!
//! Every payload becomes a [`ResponseMap`], whatever its shape:
//! - a JSON object is used as-is;
//! - a JSON array is stored under [`keys::RESULTS`];
//! - anything else, including bytes that fail to decode, stores an empty
//!   string under [`keys::RESULTS`].
//!
//! Decode failures are logged and swallowed here. Callers tell a malformed
//! body from an empty one only by the absence of the keys they expect.

use crate::shared::keys;
use serde_json::{Map, Value};

/// String-keyed view of a decoded response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMap(Map<String, Value>);

impl ResponseMap {
    /// Decode `bytes` under the placeholder policy described in the module docs.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self(map),
            Ok(array @ Value::Array(_)) => Self::with_results(array),
            Ok(other) => {
                tracing::debug!(kind = json_kind(&other), "Scalar response replaced by placeholder");
                Self::placeholder()
            }
            Err(e) => {
                tracing::warn!(error = %e, len = bytes.len(), "Undecodable response replaced by placeholder");
                Self::placeholder()
            }
        }
    }

    fn with_results(value: Value) -> Self {
        let mut map = Map::new();
        map.insert(keys::RESULTS.to_string(), value);
        Self(map)
    }

    fn placeholder() -> Self {
        Self::with_results(Value::String(String::new()))
    }

    /// Whether the server flagged the response as successful.
    pub fn is_ok(&self) -> bool {
        self.bool(keys::OK) == Some(true)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Also accepts floats with no fractional part, such as `100.0`.
    pub fn i64(&self, key: &str) -> Option<i64> {
        let value = self.get(key)?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    /// Also accepts JSON integers.
    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn array(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    /// Build a record from each element of the array under `key`.
    ///
    /// `None` when the key is missing or not an array. Elements that are not
    /// objects yield records with every field absent.
    pub fn list<T: FromResponse>(&self, key: &str) -> Option<Vec<T>> {
        let items = self.array(key)?;
        Some(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => T::from_response(&ResponseMap(map.clone())),
                    _ => T::from_response(&ResponseMap::default()),
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Parse into the record type for the operation that produced this map.
    pub fn parse<T: FromResponse>(&self) -> T {
        T::from_response(self)
    }
}

impl From<Map<String, Value>> for ResponseMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl std::fmt::Display for ResponseMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// A typed record built field-by-field from a [`ResponseMap`].
///
/// Construction never fails: fields that are missing or of the wrong type are
/// left as `None`.
pub trait FromResponse: Sized {
    fn from_response(map: &ResponseMap) -> Self;
}

impl FromResponse for ResponseMap {
    fn from_response(map: &ResponseMap) -> Self {
        map.clone()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
