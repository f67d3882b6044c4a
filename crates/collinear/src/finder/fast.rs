use super::{collect_points, sorted_distinct, CollinearFinder};
use crate::error::CollinearError;
use crate::geom::{LineSegment, Point};
use crate::segments::SegmentList;
use crate::sort::{merge_sort_with, MergeFinalizer};

/// Slope-sort finder.
///
/// For each origin `p` (in point order), all points are sorted by slope to
/// `p`; runs of ≥ 3 equal slopes are collinear with `p`. A run is reported
/// only when `p` is its anchor (no member smaller than `p`), so a line with
/// k ≥ 4 points is emitted exactly once, from its smallest point, as
/// `(p, max(run))`.
///
/// The run scan happens inside the final merge of each sort (see
/// `RunScanner`), directly on the merged buffer.
#[derive(Clone, Debug)]
pub struct FastCollinearFinder {
    segments: SegmentList,
}

impl FastCollinearFinder {
    pub fn new(points: &[Point]) -> Result<Self, CollinearError> {
        let sorted = sorted_distinct(points)?;
        let segments = search_slope_runs(&sorted);
        tracing::debug!(
            points = sorted.len(),
            segments = segments.len(),
            "slope-sort search complete"
        );
        Ok(Self { segments })
    }

    /// Like `new`, for input that may be absent or contain absent entries.
    pub fn from_nullable(points: Option<&[Option<Point>]>) -> Result<Self, CollinearError> {
        Self::new(&collect_points(points)?)
    }

    #[inline]
    pub fn as_slice(&self) -> &[LineSegment] {
        self.segments.as_slice()
    }
}

impl CollinearFinder for FastCollinearFinder {
    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<LineSegment> {
        self.segments.to_vec()
    }
}

fn search_slope_runs(points: &[Point]) -> SegmentList {
    let mut out = SegmentList::new();
    if points.len() < 4 {
        return out;
    }
    let mut scratch = Vec::with_capacity(points.len());
    for &origin in points {
        // origin stays in the buffer; its -inf slope keeps it in a run of one
        scratch.clear();
        scratch.extend_from_slice(points);
        let mut scanner = RunScanner {
            origin,
            out: &mut out,
        };
        merge_sort_with(&mut scratch, origin.slope_order(), &mut scanner);
    }
    out
}

/// Merge hook that scans the final merged buffer for equal-slope runs.
///
/// Intermediate merges copy back as usual; the final merge is consumed in
/// place and the scratch slice is left unsorted.
struct RunScanner<'a> {
    origin: Point,
    out: &'a mut SegmentList,
}

impl MergeFinalizer<Point> for RunScanner<'_> {
    fn finish(&mut self, dst: &mut [Point], merged: &[Point], is_final: bool) {
        if !is_final {
            dst.copy_from_slice(merged);
            return;
        }
        let mut start = 0;
        while start < merged.len() {
            let slope = self.origin.slope_to(&merged[start]);
            let end = start
                + 1
                + merged[start + 1..]
                    .iter()
                    .take_while(|q| self.origin.slope_to(q) == slope)
                    .count();
            self.emit_if_anchor(&merged[start..end]);
            start = end;
        }
    }
}

impl RunScanner<'_> {
    /// Emit `(origin, max(run))` if the run plus origin is ≥ 4 points and no
    /// member precedes the origin.
    fn emit_if_anchor(&mut self, run: &[Point]) {
        if run.len() < 3 {
            return;
        }
        let mut last = self.origin;
        for &q in run {
            if q < self.origin {
                return;
            }
            if q > last {
                last = q;
            }
        }
        self.out.push(LineSegment::new(self.origin, last));
    }
}
