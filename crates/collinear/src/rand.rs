//! Random point clouds with planted collinear lines (replay tokens).
//!
//! Purpose
//! - Reproducible inputs for benches, tests and the CLI `gen` command.
//!
//! Model
//! - Plant `lines` lattice lines: a random start inside the square
//!   `[-extent, extent]²`, a random primitive step `(dx, dy)`, and `LineLength`
//!   consecutive points along it (clipped to the square).
//! - Add `noise_points` uniform points, drop duplicates, shuffle.
//! - Noise points may extend a planted line or form new collinear sets; the
//!   sampler does not prevent it.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Points-per-line distribution.
#[derive(Clone, Copy, Debug)]
pub enum LineLength {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl LineLength {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            LineLength::Fixed(n) => n,
            LineLength::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Uniform background points.
    pub noise_points: usize,
    /// Number of planted lines.
    pub lines: usize,
    pub per_line: LineLength,
    /// Half-width of the coordinate square. Clamped to `[1, MAX_EXACT_COORD]`.
    pub extent: i32,
    /// Largest step component along a planted line. Clamped to `[1, extent]`.
    pub max_step: i32,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            noise_points: 64,
            lines: 4,
            per_line: LineLength::Uniform { min: 4, max: 6 },
            extent: 1000,
            max_step: 7,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a shuffled set of distinct points with planted lines.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let extent = cfg.extent.clamp(1, Point::MAX_EXACT_COORD);
    let max_step = cfg.max_step.clamp(1, extent);
    let mut seen = HashSet::new();
    let mut points = Vec::new();
    let mut push = |p: Point| {
        if seen.insert(p) {
            points.push(p);
        }
    };

    for _ in 0..cfg.lines {
        let (dx, dy) = primitive_step(&mut rng, max_step);
        let mut x = rng.gen_range(-extent..=extent);
        let mut y = rng.gen_range(-extent..=extent);
        for _ in 0..cfg.per_line.sample(&mut rng) {
            if x.abs() > extent || y.abs() > extent {
                break;
            }
            push(Point::new(x, y));
            x += dx;
            y += dy;
        }
    }
    for _ in 0..cfg.noise_points {
        push(Point::new(
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
        ));
    }
    points.shuffle(&mut rng);
    points
}

/// Random nonzero step with `gcd(|dx|, |dy|) == 1`, so consecutive points
/// along a planted line have no lattice point between them.
fn primitive_step<R: Rng>(rng: &mut R, max_step: i32) -> (i32, i32) {
    loop {
        let dx = rng.gen_range(-max_step..=max_step);
        let dy = rng.gen_range(-max_step..=max_step);
        if gcd(dx.unsigned_abs(), dy.unsigned_abs()) == 1 {
            return (dx, dy);
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
