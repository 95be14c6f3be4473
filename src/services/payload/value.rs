use std::time::SystemTime;

use crate::types::errors::{ExtractError, ExtractResult};

/// Decoded property-list value.
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Date(SystemTime),
    Data(Vec<u8>),
    Array(Vec<PlistValue>),
    Dictionary(PlistDict),
}

impl PlistValue {
    /// Human-readable shape name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PlistValue::String(_) => "string",
            PlistValue::Integer(_) => "integer",
            PlistValue::Real(_) => "real",
            PlistValue::Boolean(_) => "boolean",
            PlistValue::Date(_) => "date",
            PlistValue::Data(_) => "data",
            PlistValue::Array(_) => "array",
            PlistValue::Dictionary(_) => "dictionary",
        }
    }
}

/// Ordered string-keyed mapping, as stored in the payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlistDict {
    entries: Vec<(String, PlistValue)>,
}

impl PlistDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: PlistValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// String value of `key`; `None` when absent, error on any other shape.
    pub fn get_str(&self, key: &str) -> ExtractResult<Option<&str>> {
        match self.get(key) {
            None => Ok(None),
            Some(PlistValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(unexpected_shape(key, "string", other)),
        }
    }

    /// Array-of-strings value of `key`; empty when absent.
    pub fn get_string_list(&self, key: &str) -> ExtractResult<Vec<&str>> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(PlistValue::Array(items)) => items
                .iter()
                .map(|item| match item {
                    PlistValue::String(s) => Ok(s.as_str()),
                    other => Err(unexpected_shape(key, "array of strings", other)),
                })
                .collect(),
            Some(other) => Err(unexpected_shape(key, "array of strings", other)),
        }
    }

    /// Integer value of `key`, accepting decimal strings as well.
    ///
    /// Missing keys and unparsable values are both errors.
    pub fn get_integer_like(&self, key: &str) -> ExtractResult<i64> {
        match self.get(key) {
            None => Err(ExtractError::MalformedMetadata(format!("'{key}' is missing"))),
            Some(PlistValue::Integer(n)) => Ok(*n),
            Some(PlistValue::String(s)) => s.trim().parse::<i64>().map_err(|e| {
                ExtractError::MalformedMetadata(format!("'{key}' is not an integer ({s:?}): {e}"))
            }),
            Some(other) => Err(unexpected_shape(key, "integer", other)),
        }
    }
}

impl FromIterator<(String, PlistValue)> for PlistDict {
    fn from_iter<T: IntoIterator<Item = (String, PlistValue)>>(iter: T) -> Self {
        let mut dict = PlistDict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

fn unexpected_shape(key: &str, expected: &str, found: &PlistValue) -> ExtractError {
    ExtractError::MalformedMetadata(format!(
        "'{key}' should be {expected}, found {}",
        found.type_name()
    ))
}
