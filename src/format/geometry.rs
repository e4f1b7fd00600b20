// Geometry wire codec: `<tag>(<body>)`.
//
// Tags: p/l/a for Point, LineString, Polygon; P/L/A for their multi
// variants.  Parts and rings are separated by `'`; the polygons of a
// MultiPolygon are separated by the two-character sequence `)(`.  Dispatch
// is an exhaustive match on `GeometryKind`, so an unhandled kind cannot
// slip through at runtime.
//
// Delta state is created exactly once per call, before any part or ring,
// and threaded through all of them.  Polygon rings travel open on the wire;
// the decoder closes each one.  Ring 0 closes onto its own first
// coordinate; every later ring closes onto the *previous* ring's first
// coordinate.  The lagging rule for hole rings is a legacy convention of
// the wire format and existing permalinks depend on it.

use log::trace;

use super::coords::{self, DeltaState};
use super::error::FormatError;
use crate::model::{Geometry, GeometryKind, STRIDE};

/// Append the full wire text of `geometry` (tag, parens, body) to `out`.
pub fn write_geometry(geometry: &Geometry, accuracy: f64, out: &mut String) {
    let mut state = DeltaState::default();
    out.push(geometry.kind().tag());
    out.push('(');
    match geometry {
        Geometry::Point { coords } | Geometry::LineString { coords } => {
            coords::encode_run(coords, 0, coords.len(), &mut state, accuracy, out);
        }
        Geometry::MultiPoint { coords } => {
            for (i, start) in (0..coords.len()).step_by(STRIDE).enumerate() {
                if i > 0 {
                    out.push('\'');
                }
                coords::encode_run(coords, start, start + STRIDE, &mut state, accuracy, out);
            }
        }
        Geometry::MultiLineString { coords, ends } => {
            let mut offset = 0;
            for (i, &end) in ends.iter().enumerate() {
                if i > 0 {
                    out.push('\'');
                }
                coords::encode_run(coords, offset, end, &mut state, accuracy, out);
                offset = end;
            }
        }
        Geometry::Polygon { coords, ends } => {
            let mut offset = 0;
            write_rings(coords, ends, &mut offset, &mut state, accuracy, out);
        }
        Geometry::MultiPolygon { coords, endss } => {
            let mut offset = 0;
            for (p, ends) in endss.iter().enumerate() {
                if p > 0 {
                    out.push_str(")(");
                }
                write_rings(coords, ends, &mut offset, &mut state, accuracy, out);
            }
        }
    }
    out.push(')');
}

/// Write each ring's run, dropping the closing duplicate pair (`STRIDE`
/// scalars before the ring end).
fn write_rings(
    coords: &[f64],
    ends: &[usize],
    offset: &mut usize,
    state: &mut DeltaState,
    accuracy: f64,
    out: &mut String,
) {
    for (i, &end) in ends.iter().enumerate() {
        if i > 0 {
            out.push('\'');
        }
        let stop = end.saturating_sub(STRIDE).max(*offset);
        coords::encode_run(coords, *offset, stop, state, accuracy, out);
        *offset = end;
    }
}

/// Parse one full geometry text (`<tag>(<body>)`).
pub fn read_geometry(text: &str, accuracy: f64) -> Result<Geometry, FormatError> {
    let tag = text.chars().next().ok_or(FormatError::UnexpectedEnd)?;
    let kind = GeometryKind::from_tag(tag).ok_or(FormatError::UnknownTag(tag))?;
    if text.as_bytes().get(1) != Some(&b'(') {
        return Err(FormatError::MissingOpenParen);
    }
    if text.len() < 3 || !text.ends_with(')') {
        return Err(FormatError::MissingCloseParen);
    }
    let body = &text[2..text.len() - 1];
    trace!("decoding geometry tag {tag:?}, body {} bytes", body.len());

    let mut state = DeltaState::default();
    match kind {
        GeometryKind::Point => {
            let mut coords = Vec::new();
            coords::decode_run(body.as_bytes(), &mut state, accuracy, &mut coords)?;
            if coords.len() != STRIDE {
                return Err(FormatError::InvalidInput(format!(
                    "point body must hold exactly one coordinate pair, got {}",
                    coords.len() / STRIDE
                )));
            }
            Ok(Geometry::Point { coords })
        }
        GeometryKind::LineString => {
            let mut coords = Vec::new();
            coords::decode_run(body.as_bytes(), &mut state, accuracy, &mut coords)?;
            Ok(Geometry::LineString { coords })
        }
        GeometryKind::MultiPoint => {
            // Any `'`-split grouping decodes identically because the delta
            // state persists across runs.
            let mut coords = Vec::new();
            for run in body.split('\'') {
                coords::decode_run(run.as_bytes(), &mut state, accuracy, &mut coords)?;
            }
            Ok(Geometry::MultiPoint { coords })
        }
        GeometryKind::MultiLineString => {
            let mut coords = Vec::new();
            let mut ends = Vec::new();
            for run in body.split('\'') {
                coords::decode_run(run.as_bytes(), &mut state, accuracy, &mut coords)?;
                ends.push(coords.len());
            }
            Ok(Geometry::MultiLineString { coords, ends })
        }
        GeometryKind::Polygon => {
            let mut coords = Vec::new();
            let ends = read_rings(body, &mut state, accuracy, &mut coords)?;
            Ok(Geometry::Polygon { coords, ends })
        }
        GeometryKind::MultiPolygon => {
            let mut coords = Vec::new();
            let mut endss = Vec::new();
            for polygon in body.split(")(") {
                endss.push(read_rings(polygon, &mut state, accuracy, &mut coords)?);
            }
            Ok(Geometry::MultiPolygon { coords, endss })
        }
    }
}

/// Decode `'`-separated rings, closing each one.  The lagging index starts
/// at the first ring of the current polygon, so ring 0 closes onto itself
/// and later rings onto their predecessor's first coordinate.
fn read_rings(
    body: &str,
    state: &mut DeltaState,
    accuracy: f64,
    coords: &mut Vec<f64>,
) -> Result<Vec<usize>, FormatError> {
    let mut ends = Vec::new();
    let mut prev_ring_start = coords.len();
    for ring in body.split('\'') {
        let ring_start = coords.len();
        coords::decode_run(ring.as_bytes(), state, accuracy, coords)?;
        if coords.len() == ring_start {
            return Err(FormatError::InvalidInput("empty polygon ring".into()));
        }
        let close_x = coords[prev_ring_start];
        let close_y = coords[prev_ring_start + 1];
        coords.push(close_x);
        coords.push(close_y);
        ends.push(coords.len());
        prev_ring_start = ring_start;
    }
    Ok(ends)
}
