// Attribute tokens: arbitrary feature properties as `key*value`.
//
// Keys and values are sanitized (grammar separators become `_`) before the
// whole token is percent-encoded, so a decoded feature can never smuggle a
// separator back into the grammar.  Sanitization is lossy on purpose.
// Decoded values stay raw strings; only the style channel casts.

use std::collections::BTreeMap;

use super::error::FormatError;
use super::escape;
use super::style::legacy_rename;
use crate::model::Value;

/// Emit one sanitized, percent-encoded token per property.
///
/// The geometry lives in its own struct field, so no property needs to be
/// excluded by name here.
pub fn encode_attributes(props: &BTreeMap<String, Value>, tokens: &mut Vec<String>) {
    for (key, value) in props {
        let key = escape::sanitize(key);
        let value = value.to_string();
        let value = escape::sanitize(&value);
        tokens.push(escape::encode_token(&format!("{key}*{value}")));
    }
}

/// Parse a token sequence into raw string properties.
///
/// With `legacy_keys` set, the style channel's key-rename table is applied
/// to attribute keys as well.
pub fn decode_attributes(
    text: &str,
    legacy_keys: bool,
    props: &mut BTreeMap<String, Value>,
) -> Result<(), FormatError> {
    for token in text.split('\'') {
        let raw = escape::decode_token(token)?;
        let (key, value) = raw
            .split_once('*')
            .ok_or_else(|| FormatError::MalformedToken(raw.clone()))?;
        let key = if legacy_keys { legacy_rename(key) } else { key };
        props.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(())
}
