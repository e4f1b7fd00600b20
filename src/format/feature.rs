// Top-level feature and collection wire format.
//
// One feature is its geometry text with the trailing `)` pushed back to
// the very end: `<geom-without-)>` `~attrs` `~styles` `)`.  The attribute
// section may be present but empty; the style section exists only when at
// least one style token does.  A collection is the literal `F` followed by
// the concatenation of self-terminated feature texts.
//
// Delta state is scoped to one feature: `read_geometry`/`write_geometry`
// construct it fresh, so a shared `FeatureHash` value is safe to use from
// concurrent callers.

use std::collections::BTreeMap;

use log::debug;

use super::attributes;
use super::coords::DEFAULT_ACCURACY;
use super::error::FormatError;
use super::geometry;
use super::style;
use crate::model::Feature;

/// Encoding/decoding options. Holds no per-call state.
#[derive(Debug, Clone)]
pub struct FeatureHash {
    /// Coordinate scale factor; values are floored after scaling, so
    /// accuracies above 1 are lossy by design.
    pub accuracy: f64,
    /// Emit style tokens when writing features.
    pub write_styles: bool,
    /// Apply the legacy key-rename table to attribute keys on decode.
    pub legacy_keys: bool,
}

impl Default for FeatureHash {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
            write_styles: true,
            legacy_keys: false,
        }
    }
}

impl FeatureHash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode one feature as a self-terminated hash string.
    pub fn write_feature(&self, feature: &Feature) -> String {
        let mut text = String::new();
        geometry::write_geometry(&feature.geometry, self.accuracy, &mut text);

        let mut attr_tokens = Vec::new();
        attributes::encode_attributes(&feature.properties, &mut attr_tokens);
        let mut style_tokens = Vec::new();
        if self.write_styles {
            style::encode_styles(&feature.styles, feature.geometry.kind(), &mut style_tokens);
        }

        if !attr_tokens.is_empty() || !style_tokens.is_empty() {
            text.pop();
            text.push('~');
            text.push_str(&attr_tokens.join("'"));
            if !style_tokens.is_empty() {
                text.push('~');
                text.push_str(&style_tokens.join("'"));
            }
            text.push(')');
        }
        text
    }

    /// Decode one feature. All-or-nothing: any structural violation is an
    /// error, never a partial feature.
    pub fn read_feature(&self, text: &str) -> Result<Feature, FormatError> {
        let Some(tilde) = text.find('~') else {
            let geometry = geometry::read_geometry(text, self.accuracy)?;
            return Ok(Feature::new(geometry));
        };

        if !text.ends_with(')') {
            return Err(FormatError::MissingCloseParen);
        }
        let mut geometry_text = text[..tilde].to_string();
        geometry_text.push(')');
        let geometry = geometry::read_geometry(&geometry_text, self.accuracy)?;

        let rest = &text[tilde + 1..text.len() - 1];
        let (attrs_text, styles_text) = match rest.find('~') {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };

        let mut properties = BTreeMap::new();
        if !attrs_text.is_empty() {
            attributes::decode_attributes(attrs_text, self.legacy_keys, &mut properties)?;
        }
        if let Some(styles_text) = styles_text {
            if !styles_text.is_empty() {
                style::decode_styles(styles_text, geometry.kind(), &mut properties)?;
            }
        }

        Ok(Feature {
            geometry,
            properties,
            styles: Vec::new(),
        })
    }

    /// Encode a feature collection: `F` plus each feature's text.
    pub fn write_features(&self, features: &[Feature]) -> String {
        let mut text = String::from("F");
        for feature in features {
            text.push_str(&self.write_feature(feature));
        }
        text
    }

    /// Decode a feature collection. A malformed feature propagates its
    /// error; the caller decides whether to drop it and re-read the rest.
    pub fn read_features(&self, text: &str) -> Result<Vec<Feature>, FormatError> {
        let rest = text
            .strip_prefix('F')
            .ok_or(FormatError::MissingCollectionPrefix)?;
        let bytes = rest.as_bytes();
        let mut features = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let end = feature_end(bytes, pos).ok_or(FormatError::MissingCloseParen)?;
            features.push(self.read_feature(&rest[pos..end])?);
            pos = end;
        }
        debug!("decoded {} features from {} bytes", features.len(), text.len());
        Ok(features)
    }
}

/// Exclusive end of the feature starting at `pos`: one past the first `)`
/// not immediately followed by `(`.  A `)(` pair joins the polygons of a
/// MultiPolygon and never terminates a feature; the next feature always
/// starts with a tag letter.
fn feature_end(bytes: &[u8], pos: usize) -> Option<usize> {
    for i in pos..bytes.len() {
        if bytes[i] == b')' && bytes.get(i + 1) != Some(&b'(') {
            return Some(i + 1);
        }
    }
    None
}
