// Feature object model shared by the codec and its embedders.
//
// Geometries use the flat-coordinate layout: one `Vec<f64>` with stride 2
// (x then y), plus boundary indices for multi-part kinds.  `ends` marks one
// level of parts (line strings, polygon rings); `endss` marks two levels
// (polygons within a multi-polygon).  Polygon rings are stored closed: the
// first coordinate pair is repeated at the end of each ring.  The wire
// format never carries that duplicate; dropping and reconstructing it is
// the codec's job.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of scalars per coordinate.
pub const STRIDE: usize = 2;

// ---------------------------------------------------------------------------
// Geometry kinds and tags
// ---------------------------------------------------------------------------

/// The six geometry kinds the wire format supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    /// One-character wire tag for this kind.
    pub const fn tag(self) -> char {
        match self {
            GeometryKind::Point => 'p',
            GeometryKind::LineString => 'l',
            GeometryKind::Polygon => 'a',
            GeometryKind::MultiPoint => 'P',
            GeometryKind::MultiLineString => 'L',
            GeometryKind::MultiPolygon => 'A',
        }
    }

    /// Inverse of [`tag`](Self::tag). `None` for any other character.
    pub const fn from_tag(c: char) -> Option<Self> {
        match c {
            'p' => Some(GeometryKind::Point),
            'l' => Some(GeometryKind::LineString),
            'a' => Some(GeometryKind::Polygon),
            'P' => Some(GeometryKind::MultiPoint),
            'L' => Some(GeometryKind::MultiLineString),
            'A' => Some(GeometryKind::MultiPolygon),
            _ => None,
        }
    }

}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A geometry in flat-coordinate form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// A single coordinate pair.
    Point { coords: Vec<f64> },
    /// An open sequence of coordinate pairs.
    LineString { coords: Vec<f64> },
    /// Closed rings; `ends[i]` is the exclusive end index of ring `i`.
    Polygon { coords: Vec<f64>, ends: Vec<usize> },
    /// Any number of independent points.
    MultiPoint { coords: Vec<f64> },
    /// `ends[i]` is the exclusive end index of line `i`.
    MultiLineString { coords: Vec<f64>, ends: Vec<usize> },
    /// `endss[p]` holds the ring ends of polygon `p`.
    MultiPolygon {
        coords: Vec<f64>,
        endss: Vec<Vec<usize>>,
    },
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point { .. } => GeometryKind::Point,
            Geometry::LineString { .. } => GeometryKind::LineString,
            Geometry::Polygon { .. } => GeometryKind::Polygon,
            Geometry::MultiPoint { .. } => GeometryKind::MultiPoint,
            Geometry::MultiLineString { .. } => GeometryKind::MultiLineString,
            Geometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
        }
    }

    /// The flat coordinate array, regardless of kind.
    pub fn flat_coordinates(&self) -> &[f64] {
        match self {
            Geometry::Point { coords }
            | Geometry::LineString { coords }
            | Geometry::Polygon { coords, .. }
            | Geometry::MultiPoint { coords }
            | Geometry::MultiLineString { coords, .. }
            | Geometry::MultiPolygon { coords, .. } => coords,
        }
    }
}

// ---------------------------------------------------------------------------
// Property values
// ---------------------------------------------------------------------------

/// An attribute or decoded style value.
///
/// Attributes always decode as `String`; style tokens decode through the
/// cast tables into `Number`/`Bool` where the key calls for it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// An opaque RGB color. Alpha is not representable in the wire channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used by the style channel.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// Area fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fill {
    pub color: Color,
}

/// Outline stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Circle symbol for point features.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointSymbol {
    pub radius: f64,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

/// Label styling. `font` is a CSS-like shorthand ("bold 12px sans-serif");
/// only its second whitespace-separated token reaches the wire.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextStyle {
    pub font: String,
    pub color: Option<Color>,
}

/// A fixed bag of optional visual properties tied to the feature's
/// geometry kind. Never an arbitrary object.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleDescriptor {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub point: Option<PointSymbol>,
    pub text: Option<TextStyle>,
}

// ---------------------------------------------------------------------------
// Feature
// ---------------------------------------------------------------------------

/// One geometry, its attributes, and zero or more style descriptors.
///
/// `BTreeMap` keeps token order deterministic: the same feature always
/// encodes to the same permalink.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feature {
    pub geometry: Geometry,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: BTreeMap<String, Value>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub styles: Vec<StyleDescriptor>,
}

impl Feature {
    /// A feature with no attributes and no styles.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: BTreeMap::new(),
            styles: Vec::new(),
        }
    }
}
