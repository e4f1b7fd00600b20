// Delta-compressed coordinate runs.
//
// Coordinates are scaled by the accuracy factor, floored, and encoded as
// successive deltas against the running state.  The state lives for one
// top-level geometry: it is created once per encode/decode call and
// threaded by `&mut` through every part and ring, never reset in between.
// Keeping it a call-local value (instead of a codec field) makes a shared
// format object safe under concurrent callers.

use super::error::FormatError;
use super::varint;
use crate::model::STRIDE;

/// Default coordinate scale: one unit of input per encoded unit.
pub const DEFAULT_ACCURACY: f64 = 1.0;

/// Last absolute scaled coordinate seen while encoding or decoding one
/// geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaState {
    pub prev_x: i64,
    pub prev_y: i64,
}

#[inline]
fn scale(value: f64, accuracy: f64) -> i64 {
    (value / accuracy).floor() as i64
}

/// Encode `coords[start..end]` (flat, stride 2) as a delta run.
///
/// No separator is emitted between the two numbers of one pair, nor
/// between consecutive pairs.
pub fn encode_run(
    coords: &[f64],
    start: usize,
    end: usize,
    state: &mut DeltaState,
    accuracy: f64,
    out: &mut String,
) {
    for pair in coords[start..end].chunks_exact(STRIDE) {
        let x = scale(pair[0], accuracy);
        let y = scale(pair[1], accuracy);
        varint::encode_signed(x - state.prev_x, out);
        varint::encode_signed(y - state.prev_y, out);
        state.prev_x = x;
        state.prev_y = y;
    }
}

/// Decode a full delta run, appending reconstructed coordinates into
/// `coords` so multi-part geometries share one growing list.
pub fn decode_run(
    text: &[u8],
    state: &mut DeltaState,
    accuracy: f64,
    coords: &mut Vec<f64>,
) -> Result<(), FormatError> {
    let mut pos = 0;
    while pos < text.len() {
        let dx = varint::decode_signed(text, &mut pos)?;
        if pos >= text.len() {
            return Err(FormatError::TruncatedCoordinatePair);
        }
        let dy = varint::decode_signed(text, &mut pos)?;
        state.prev_x += dx;
        state.prev_y += dy;
        coords.push(state.prev_x as f64 * accuracy);
        coords.push(state.prev_y as f64 * accuracy);
    }
    Ok(())
}
