use super::{collect_points, sorted_distinct, CollinearFinder};
use crate::error::CollinearError;
use crate::geom::{LineSegment, Point};
use crate::segments::SegmentList;

/// Exhaustive quadruple check.
///
/// For sorted points `a < b < c < d`, the quadruple is collinear when
/// `slope(a,b) == slope(a,c) == slope(a,d)`; the segment `(a, d)` is emitted.
///
/// Pre (not enforced): no line holds five or more input points. Otherwise
/// every collinear quadruple is reported, sub-segments included; use
/// `FastCollinearFinder` for such inputs.
#[derive(Clone, Debug)]
pub struct BruteCollinearFinder {
    segments: SegmentList,
}

impl BruteCollinearFinder {
    pub fn new(points: &[Point]) -> Result<Self, CollinearError> {
        let sorted = sorted_distinct(points)?;
        let segments = search_quadruples(&sorted);
        tracing::debug!(
            points = sorted.len(),
            segments = segments.len(),
            "brute-force search complete"
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

impl CollinearFinder for BruteCollinearFinder {
    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<LineSegment> {
        self.segments.to_vec()
    }
}

fn search_quadruples(points: &[Point]) -> SegmentList {
    let mut out = SegmentList::new();
    let n = points.len();
    if n < 4 {
        return out;
    }
    for i in 0..n {
        let a = points[i];
        for j in i + 1..n {
            let s_ab = a.slope_to(&points[j]);
            for k in j + 1..n {
                if a.slope_to(&points[k]) != s_ab {
                    continue;
                }
                for &d in &points[k + 1..] {
                    if a.slope_to(&d) == s_ab {
                        out.push(LineSegment::new(a, d));
                    }
                }
            }
        }
    }
    out
}
