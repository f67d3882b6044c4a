use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// Segment between two distinct points; intermediate points are not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    p: Point,
    q: Point,
}

impl LineSegment {
    /// Pre: `p != q`.
    #[inline]
    pub fn new(p: Point, q: Point) -> Self {
        debug_assert_ne!(p, q, "degenerate segment");
        Self { p, q }
    }

    #[inline]
    pub fn p(&self) -> Point {
        self.p
    }

    #[inline]
    pub fn q(&self) -> Point {
        self.q
    }

    /// Endpoints as `(min, max)` under the point order; direction-free key.
    #[inline]
    pub fn normalized(&self) -> (Point, Point) {
        if self.p <= self.q {
            (self.p, self.q)
        } else {
            (self.q, self.p)
        }
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}
