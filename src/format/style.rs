// Style tokens: a fixed, enumerated set of visual properties.
//
// Encoding walks the style descriptors and emits only the properties
// relevant to the feature's geometry kind, each as a percent-encoded
// `name*value` token.  Decoding reverses that and applies the
// legacy-compatibility passes: values are cast by their raw key spelling,
// keys are remapped through the rename table, then geometry-specific
// pruning and font-size normalization run against the current names.

use std::collections::BTreeMap;

use super::error::FormatError;
use super::escape;
use crate::model::{GeometryKind, StyleDescriptor, Stroke, Value};

/// Keys whose decoded values are cast to numbers.
const NUMERIC_KEYS: &[&str] = &[
    "angle",
    "opacity",
    "size",
    "stroke",
    "pointRadius",
    "strokeWidth",
];

/// Keys whose decoded values are `true` iff the raw text is `"true"`.
const BOOLEAN_KEYS: &[&str] = &[
    "isCircle",
    "isRectangle",
    "isText",
    "isLabel",
    "showMeasure",
    "iscircle",
    "isrectangle",
    "istext",
    "islabel",
    "showmeasure",
];

/// Legacy key spellings remapped to current property names.
const LEGACY_KEYS: &[(&str, &str)] = &[
    ("fillcolor", "fillColor"),
    ("fillopacity", "fillOpacity"),
    ("strokecolor", "strokeColor"),
    ("strokewidth", "strokeWidth"),
    ("pointradius", "pointRadius"),
    ("fontsize", "fontSize"),
    ("fontcolor", "fontColor"),
    ("iscircle", "isCircle"),
    ("isrectangle", "isRectangle"),
    ("islabel", "isText"),
    ("isLabel", "isText"),
    ("istext", "isText"),
    ("showmeasure", "showMeasure"),
];

/// Current name for a possibly-legacy key.
pub(crate) fn legacy_rename(key: &str) -> &str {
    LEGACY_KEYS
        .iter()
        .find(|(legacy, _)| *legacy == key)
        .map_or(key, |(_, current)| current)
}

fn push_token(tokens: &mut Vec<String>, name: &str, value: &str) {
    let value = escape::sanitize(value);
    tokens.push(escape::encode_token(&format!("{name}*{value}")));
}

fn push_stroke(tokens: &mut Vec<String>, stroke: &Stroke) {
    push_token(tokens, "strokeColor", &stroke.color.to_hex());
    push_token(tokens, "strokeWidth", &stroke.width.to_string());
}

/// Emit style tokens for `styles`, keeping only the properties relevant
/// to `kind`: polygon fill then stroke, line stroke, point radius with the
/// symbol's own fill/stroke, and for any kind the text sub-style (font
/// size as the second token of the font shorthand, then font color).
pub fn encode_styles(styles: &[StyleDescriptor], kind: GeometryKind, tokens: &mut Vec<String>) {
    for style in styles {
        match kind {
            GeometryKind::Polygon | GeometryKind::MultiPolygon => {
                if let Some(fill) = &style.fill {
                    push_token(tokens, "fillColor", &fill.color.to_hex());
                }
                if let Some(stroke) = &style.stroke {
                    push_stroke(tokens, stroke);
                }
            }
            GeometryKind::LineString | GeometryKind::MultiLineString => {
                if let Some(stroke) = &style.stroke {
                    push_stroke(tokens, stroke);
                }
            }
            GeometryKind::Point | GeometryKind::MultiPoint => {
                if let Some(point) = &style.point {
                    push_token(tokens, "pointRadius", &point.radius.to_string());
                    if let Some(fill) = &point.fill {
                        push_token(tokens, "fillColor", &fill.color.to_hex());
                    }
                    if let Some(stroke) = &point.stroke {
                        push_stroke(tokens, stroke);
                    }
                }
            }
        }
        if let Some(text) = &style.text {
            if let Some(size) = text.font.split_whitespace().nth(1) {
                push_token(tokens, "fontSize", size);
            }
            if let Some(color) = text.color {
                push_token(tokens, "fontColor", &color.to_hex());
            }
        }
    }
}

fn cast_value(key: &str, raw: &str) -> Value {
    if NUMERIC_KEYS.contains(&key) {
        match raw.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::String(raw.to_string()),
        }
    } else if BOOLEAN_KEYS.contains(&key) {
        Value::Bool(raw == "true")
    } else {
        Value::String(raw.to_string())
    }
}

/// Numeric prefix of a CSS size like `12px` or `10.5pt`.
fn parse_size_prefix(s: &str) -> Option<f64> {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

fn flag(map: &BTreeMap<String, Value>, key: &str) -> bool {
    match map.get(key) {
        Some(Value::Bool(b)) => *b,
        // Attribute values are raw strings; only the literal counts.
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// Decode a style token sequence into typed properties on `props`.
pub fn decode_styles(
    text: &str,
    kind: GeometryKind,
    props: &mut BTreeMap<String, Value>,
) -> Result<(), FormatError> {
    let mut decoded: BTreeMap<String, Value> = BTreeMap::new();
    for token in text.split('\'') {
        let raw = escape::decode_token(token)?;
        let (key, value) = raw
            .split_once('*')
            .ok_or_else(|| FormatError::MalformedToken(raw.clone()))?;
        // Cast by the raw spelling (the tables carry the legacy forms),
        // store under the current name so pruning and font normalization
        // see one spelling.
        decoded.insert(legacy_rename(key).to_string(), cast_value(key, value));
    }

    // Geometry-specific pruning, kept for permalink compatibility.  The
    // text/label flag may arrive as a style token (legacy permalinks) or
    // as an attribute already decoded into `props`.
    let is_text = flag(&decoded, "isText")
        || ["isText", "isLabel", "istext", "islabel"]
            .iter()
            .any(|key| flag(props, key));
    match kind {
        GeometryKind::Point | GeometryKind::MultiPoint => {
            if is_text {
                decoded.remove("strokeColor");
                decoded.remove("fillColor");
            } else {
                decoded.remove("fontColor");
                decoded.remove("fontSize");
            }
        }
        _ => {
            decoded.remove("fontColor");
            if matches!(
                kind,
                GeometryKind::LineString | GeometryKind::MultiLineString
            ) {
                decoded.remove("fillColor");
                decoded.remove("fillOpacity");
            }
        }
    }

    // Font sizes normalize to points and become plain numbers.
    if let Some(Value::String(raw)) = decoded.get("fontSize") {
        if let Some(number) = parse_size_prefix(raw) {
            let number = if raw.contains("px") {
                (number / 1.333333).round()
            } else {
                number
            };
            decoded.insert("fontSize".to_string(), Value::Number(number));
        }
    }

    props.append(&mut decoded);
    Ok(())
}
