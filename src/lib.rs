//! Featurehash: a compact reversible text codec for map features.
//!
//! The crate turns a geometry, its attribute map, and an optional style
//! description into a short URL-safe string and back: a variable-length
//! signed-integer encoding over a 64-symbol alphabet, coordinate
//! delta-compression with state spanning all parts of a geometry, and a
//! grammar with four reserved separators (`~`, `'`, `(`, `)`).
//!
//! # Quick Start
//!
//! ```
//! use featurehash::{Feature, FeatureHash, Geometry};
//!
//! let hash = FeatureHash::new();
//! let feature = Feature::new(Geometry::Point {
//!     coords: vec![5.0, 5.0],
//! });
//!
//! let text = hash.write_feature(&feature);
//! assert_eq!(text, "p(FF)");
//! assert_eq!(hash.read_feature(&text).unwrap(), feature);
//! ```

pub mod format;
pub mod model;

#[cfg(feature = "cli")]
pub mod cli;

pub use format::{DEFAULT_ACCURACY, FeatureHash, FormatError};
pub use model::{
    Color, Feature, Fill, Geometry, GeometryKind, PointSymbol, StyleDescriptor, Stroke, TextStyle,
    Value,
};
