//! Collinear segment finders.
//!
//! Purpose
//! - Report every maximal set of ≥ 4 collinear points once, as the segment
//!   between its smallest and largest member.
//!
//! Shared pipeline
//! - Copy the caller's points (never mutated), sort them by the point order,
//!   reject adjacent duplicates, then run the finder on the private copy.
//! - All work happens in the constructor; the result is frozen afterwards.
//!
//! Finders
//! - `BruteCollinearFinder`: every quadruple, O(N⁴). Assumes no line holds
//!   more than four input points.
//! - `FastCollinearFinder`: slope sort per origin, O(N² log N). Exact for any
//!   number of collinear points.

mod brute;
mod fast;

pub use brute::BruteCollinearFinder;
pub use fast::FastCollinearFinder;

use crate::error::CollinearError;
use crate::geom::{LineSegment, Point};
use crate::sort::merge_sort_by;

/// Read-only view of a finished detection.
pub trait CollinearFinder {
    /// Number of segments found; equals `segments().len()`.
    fn segment_count(&self) -> usize;
    /// Materialized copy of the segments, in a stable order.
    fn segments(&self) -> Vec<LineSegment>;
}

/// Unwrap nullable input, failing on the first absent entry.
///
/// `None` for the whole collection maps to `NullInput { index: None }`.
pub fn collect_points(points: Option<&[Option<Point>]>) -> Result<Vec<Point>, CollinearError> {
    let points = points.ok_or(CollinearError::NullInput { index: None })?;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| p.ok_or(CollinearError::NullInput { index: Some(i) }))
        .collect()
}

/// Private copy of `points`, sorted by the point order, without duplicates.
pub(crate) fn sorted_distinct(points: &[Point]) -> Result<Vec<Point>, CollinearError> {
    let mut sorted = points.to_vec();
    merge_sort_by(&mut sorted, Point::cmp);
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(CollinearError::DuplicatePoint { point: w[0] });
    }
    tracing::debug!(points = sorted.len(), "validated point set");
    Ok(sorted)
}

#[cfg(test)]
mod tests;
