//! Arc length of freehand strokes.
//!
//! The canvas stores a freehand stroke as a list of SVG-like segments
//! (`["M", x, y]`, `["Q", cx, cy, x, y]`, `["L", x, y]`). We flatten them into
//! one path description string and let `kurbo` measure it.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg};
use serde::Serialize;

use crate::doc::DrawnObject;

/// Error tolerance passed to `kurbo`'s arc length solver, in pixels.
pub const ARCLEN_ACCURACY: f64 = 1e-6;

#[derive(Debug, thiserror::Error)]
pub enum ArcLengthError {
    #[error("path {index} is not a valid path description: {source}")]
    Parse {
        index: usize,
        #[source]
        source: kurbo::SvgParseError,
    },
}

/// Measured length of one stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathLength {
    /// Ordinal among the strokes of the snapshot.
    pub index: usize,
    pub length: f64,
}

impl PathLength {
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Path {} has length {:.3} pixels", self.index, self.length)
    }
}

/// Join every element of every segment with single spaces.
///
/// Strings are kept verbatim, numbers use their JSON text form.
#[must_use]
pub fn path_description(segments: &[Vec<serde_json::Value>]) -> String {
    segments
        .iter()
        .flatten()
        .map(|element| match element {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Total arc length of a stroke given as canvas path segments.
///
/// # Errors
///
/// Returns `Parse` if the joined description is not a valid SVG path.
pub fn path_length(segments: &[Vec<serde_json::Value>]) -> Result<f64, ArcLengthError> {
    measure(0, segments)
}

fn measure(index: usize, segments: &[Vec<serde_json::Value>]) -> Result<f64, ArcLengthError> {
    let description = path_description(segments);
    let path = BezPath::from_svg(&description).map_err(|source| ArcLengthError::Parse { index, source })?;
    Ok(path.segments().map(segment_length).sum())
}

/// `kurbo` yields NaN for a quad whose points all coincide (a repeated pointer
/// sample); such a segment has no extent, so fall back to its chord.
fn segment_length(seg: PathSeg) -> f64 {
    let len = seg.arclen(ARCLEN_ACCURACY);
    if len.is_finite() { len } else { seg.start().distance(seg.end()) }
}

/// Lengths of every object carrying a `path`, numbered in stroke order.
///
/// # Errors
///
/// Fails on the first stroke whose description does not parse.
pub fn arc_lengths(objects: &[DrawnObject]) -> Result<Vec<PathLength>, ArcLengthError> {
    objects
        .iter()
        .filter_map(|obj| obj.path.as_deref())
        .enumerate()
        .map(|(index, segments)| measure(index, segments).map(|length| PathLength { index, length }))
        .collect()
}

#[cfg(test)]
#[path = "arc_length_test.rs"]
mod tests;
