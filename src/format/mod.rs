// Feature-hash wire format.
//
// This module implements the codec leaf-first:
//
// - `alphabet`   — 64-symbol numeral alphabet and reserved separators
// - `varint`     — variable-length zig-zag signed integers
// - `coords`     — delta-compressed coordinate runs and their state
// - `geometry`   — `<tag>(<body>)` geometry texts, ring reconstruction
// - `escape`     — reserved-set sanitization and percent-encoding
// - `style`      — style tokens, casting, pruning, legacy renames
// - `attributes` — arbitrary properties as sanitized tokens
// - `feature`    — feature and collection assembly/parsing
// - `error`      — the `FormatError` taxonomy

pub mod alphabet;
pub mod attributes;
pub mod coords;
pub mod error;
pub mod escape;
pub mod feature;
pub mod geometry;
pub mod style;
pub mod varint;

// Re-export key types for convenience.
pub use coords::{DEFAULT_ACCURACY, DeltaState};
pub use error::FormatError;
pub use feature::FeatureHash;
