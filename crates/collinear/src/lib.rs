//! Collinear point detection in the integer plane.
//!
//! Given N distinct points, report every maximal set of four or more
//! collinear points as a single line segment between its smallest and
//! largest member (points ordered by `y`, then `x`).
//!
//! Two finders share one validation path:
//! - `BruteCollinearFinder`: O(N⁴) quadruple check. Correctness oracle for
//!   inputs with at most four points on any line.
//! - `FastCollinearFinder`: O(N² log N). Sorts all points by slope to each
//!   origin and fuses run detection into the last merge of the sort.
//!
//! API Policy
//! - Finders do all work at construction and are read-only afterwards.
//! - No I/O lives here; the `cli` crate reads point files and renders output.

pub mod error;
pub mod finder;
pub mod geom;
pub mod rand;
pub mod segments;
pub mod sort;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::CollinearError;
pub use finder::{BruteCollinearFinder, CollinearFinder, FastCollinearFinder};
pub use geom::{LineSegment, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::CollinearError;
    pub use crate::finder::{
        collect_points, BruteCollinearFinder, CollinearFinder, FastCollinearFinder,
    };
    pub use crate::geom::{LineSegment, Point};
    pub use crate::rand::{draw_point_cloud, CloudCfg, LineLength, ReplayToken};
    pub use crate::segments::SegmentList;
    pub use crate::sort::{merge_sort_by, merge_sort_with, CopyBack, MergeFinalizer};
}
