//! Property-list payload decoding.
//! Wraps the `plist` crate and converts its output into [`PlistValue`] so field
//! extraction can match on shapes exhaustively.

mod value;

pub use value::{PlistDict, PlistValue};

use crate::types::errors::{ExtractError, ExtractResult};
use std::io::Cursor;

/// Decode a binary or XML property list whose root is a dictionary.
pub fn decode_plist(bytes: &[u8]) -> ExtractResult<PlistDict> {
    let root = plist::Value::from_reader(Cursor::new(bytes))?;
    match convert_value(root)? {
        PlistValue::Dictionary(dict) => Ok(dict),
        other => Err(ExtractError::MalformedMetadata(format!(
            "root should be dictionary, found {}",
            other.type_name()
        ))),
    }
}

/// Convert a `plist::Value` into our tagged representation.
fn convert_value(value: plist::Value) -> ExtractResult<PlistValue> {
    let converted = match value {
        plist::Value::String(s) => PlistValue::String(s),
        plist::Value::Integer(i) => match i.as_signed() {
            Some(n) => PlistValue::Integer(n),
            None => {
                return Err(ExtractError::MalformedMetadata(format!(
                    "integer {i:?} is out of range"
                )))
            }
        },
        plist::Value::Real(r) => PlistValue::Real(r),
        plist::Value::Boolean(b) => PlistValue::Boolean(b),
        plist::Value::Date(d) => PlistValue::Date(d.into()),
        plist::Value::Data(bytes) => PlistValue::Data(bytes),
        plist::Value::Array(items) => PlistValue::Array(
            items
                .into_iter()
                .map(convert_value)
                .collect::<ExtractResult<Vec<_>>>()?,
        ),
        plist::Value::Dictionary(dict) => PlistValue::Dictionary(
            dict.into_iter()
                .map(|(k, v)| convert_value(v).map(|v| (k, v)))
                .collect::<ExtractResult<PlistDict>>()?,
        ),
        other => {
            return Err(ExtractError::MalformedMetadata(format!(
                "unsupported value {other:?}"
            )))
        }
    };
    Ok(converted)
}

#[cfg(test)]
#[path = "tests/payload_tests.rs"]
mod tests;
