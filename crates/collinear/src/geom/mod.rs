//! Integer points and the segments reported between them.
//!
//! Purpose
//! - `Point`: immutable lattice point with the bottom-to-top, left-to-right
//!   total order and the slope rules the finders rely on.
//! - `LineSegment`: the two extreme members of a collinear run.
//!
//! Slope conventions
//! - `p.slope_to(p)` is `-inf` (sorts before every real slope).
//! - Vertical pairs give `+inf`, horizontal pairs give `+0.0` (never `-0.0`).
//! - Otherwise `(y₂−y₁)/(x₂−x₁)` in `f64`. For coordinates within
//!   `Point::MAX_EXACT_COORD`, equal `f64` slopes mean exactly collinear.

mod point;
mod segment;

pub use point::Point;
pub use segment::LineSegment;
