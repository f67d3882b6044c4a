use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable point with integer coordinates.
///
/// Ordered by `y`, then by `x`; equality is coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Largest absolute coordinate for which `f64` slope equality is exact.
    ///
    /// Coordinate differences stay below `2^16`, so two distinct slopes differ
    /// by at least `2^-32` while one `f64` ulp at magnitude `2^16` is `2^-36`.
    pub const MAX_EXACT_COORD: i32 = 32767;

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// True when both coordinates lie within `±MAX_EXACT_COORD`.
    #[inline]
    pub fn within_exact_range(&self) -> bool {
        self.x.unsigned_abs() <= Self::MAX_EXACT_COORD as u32
            && self.y.unsigned_abs() <= Self::MAX_EXACT_COORD as u32
    }

    /// Slope of the line from `self` to `other`.
    ///
    /// Never fails: coincident points give `-inf`, vertical lines `+inf`,
    /// horizontal lines `+0.0`. Symmetric in its arguments.
    pub fn slope_to(&self, other: &Point) -> f64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        match (dx, dy) {
            (0, 0) => f64::NEG_INFINITY,
            (0, _) => f64::INFINITY,
            (_, 0) => 0.0,
            _ => dy as f64 / dx as f64,
        }
    }

    /// Comparator ordering points by their slope to `self`.
    ///
    /// Points on the same ray or line through `self` compare `Equal`
    /// regardless of position, so a stable sort places them adjacently.
    /// `self` itself sorts first (`-inf`).
    pub fn slope_order(self) -> impl Fn(&Point, &Point) -> Ordering + Copy {
        // total_cmp is a valid total order here: slopes are never NaN and
        // horizontal slopes are normalised to +0.0.
        move |q, r| self.slope_to(q).total_cmp(&self.slope_to(r))
    }
}

impl Ord for Point {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
