use super::*;
use crate::rand::{draw_point_cloud, CloudCfg, LineLength, ReplayToken};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

fn seg(a: (i32, i32), b: (i32, i32)) -> (Point, Point) {
    LineSegment::new(a.into(), b.into()).normalized()
}

fn keys(segments: &[LineSegment]) -> Vec<(Point, Point)> {
    let mut k: Vec<_> = segments.iter().map(LineSegment::normalized).collect();
    k.sort();
    k
}

/// Maximal segments by exact integer cross products, independent of slopes.
fn oracle(points: &[Point]) -> Vec<(Point, Point)> {
    let mut found = BTreeSet::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let on_line: Vec<Point> = points
                .iter()
                .copied()
                .filter(|c| {
                    let (abx, aby) = (i64::from(b.x() - a.x()), i64::from(b.y() - a.y()));
                    let (acx, acy) = (i64::from(c.x() - a.x()), i64::from(c.y() - a.y()));
                    abx * acy - aby * acx == 0
                })
                .collect();
            if on_line.len() >= 4 {
                let lo = *on_line.iter().min().unwrap();
                let hi = *on_line.iter().max().unwrap();
                found.insert((lo, hi));
            }
        }
    }
    found.into_iter().collect()
}

fn max_points_on_a_line(points: &[Point]) -> usize {
    let mut best = points.len().min(2);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let n = points
                .iter()
                .filter(|c| {
                    i64::from(b.x() - a.x()) * i64::from(c.y() - a.y())
                        - i64::from(b.y() - a.y()) * i64::from(c.x() - a.x())
                        == 0
                })
                .count();
            best = best.max(n);
        }
    }
    best
}

#[test]
fn diagonal_with_stray_point() {
    let input = pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (0, 1)]);
    let expected = vec![seg((0, 0), (3, 3))];
    let brute = BruteCollinearFinder::new(&input).unwrap();
    let fast = FastCollinearFinder::new(&input).unwrap();
    assert_eq!(brute.segment_count(), 1);
    assert_eq!(fast.segment_count(), 1);
    assert_eq!(keys(&brute.segments()), expected);
    assert_eq!(keys(&fast.segments()), expected);
}

#[test]
fn l_shape_has_no_segment() {
    let input = pts(&[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)]);
    assert_eq!(BruteCollinearFinder::new(&input).unwrap().segment_count(), 0);
    assert_eq!(FastCollinearFinder::new(&input).unwrap().segment_count(), 0);
}

#[test]
fn duplicate_point_is_rejected() {
    let input = pts(&[(1, 1), (1, 1)]);
    let expected = CollinearError::DuplicatePoint {
        point: Point::new(1, 1),
    };
    assert_eq!(BruteCollinearFinder::new(&input).unwrap_err(), expected);
    assert_eq!(FastCollinearFinder::new(&input).unwrap_err(), expected);
}

#[test]
fn duplicate_is_found_regardless_of_position() {
    let input = pts(&[(9, 9), (0, 0), (5, -3), (2, 7), (5, -3), (1, 1)]);
    assert!(matches!(
        FastCollinearFinder::new(&input),
        Err(CollinearError::DuplicatePoint { point }) if point == Point::new(5, -3)
    ));
}

#[test]
fn five_collinear_points_give_one_maximal_segment() {
    let input = pts(&[(4, 4), (0, 0), (2, 2), (3, 3), (1, 1)]);
    let fast = FastCollinearFinder::new(&input).unwrap();
    assert_eq!(fast.segment_count(), 1);
    assert_eq!(keys(&fast.segments()), vec![seg((0, 0), (4, 4))]);
    // emitted from the anchor, towards the largest member
    assert_eq!(fast.segments()[0].p(), Point::new(0, 0));
    assert_eq!(fast.segments()[0].q(), Point::new(4, 4));
}

#[test]
fn anchor_rule_emits_each_line_once_from_its_smallest_point() {
    // horizontal, vertical and two diagonals sharing points
    let mut coords = Vec::new();
    for i in 0..6 {
        coords.push((i, 0));
        coords.push((0, i + 1));
    }
    coords.extend([(1, 1), (2, 2), (3, 3), (4, 4), (-1, 5), (-2, 6)]);
    let input = pts(&coords);
    let fast = FastCollinearFinder::new(&input).unwrap();
    let segments = fast.segments();
    for s in &segments {
        let (lo, _) = s.normalized();
        assert_eq!(s.p(), lo, "segment {s} not emitted from its anchor");
    }
    assert_eq!(keys(&segments), oracle(&input));
    let unique: BTreeSet<_> = segments.iter().map(LineSegment::normalized).collect();
    assert_eq!(unique.len(), segments.len());
}

#[test]
fn vertical_and_horizontal_lines() {
    let input = pts(&[
        (7, 0),
        (7, 10),
        (7, 20),
        (7, 30),
        (-5, 3),
        (0, 3),
        (5, 3),
        (10, 3),
        (15, 3),
    ]);
    let mut expected = vec![seg((-5, 3), (15, 3)), seg((7, 0), (7, 30))];
    expected.sort();
    assert_eq!(keys(&FastCollinearFinder::new(&input).unwrap().segments()), expected);
}

#[test]
fn small_inputs_have_no_segments() {
    for n in 0..4 {
        let input: Vec<Point> = (0..n).map(|i| Point::new(i, i)).collect();
        assert_eq!(BruteCollinearFinder::new(&input).unwrap().segment_count(), 0);
        assert_eq!(FastCollinearFinder::new(&input).unwrap().segment_count(), 0);
    }
}

#[test]
fn exactly_four_collinear_points_are_found() {
    let input = pts(&[(3, 6), (0, 0), (2, 4), (1, 2)]);
    let expected = vec![seg((0, 0), (3, 6))];
    assert_eq!(keys(&BruteCollinearFinder::new(&input).unwrap().segments()), expected);
    assert_eq!(keys(&FastCollinearFinder::new(&input).unwrap().segments()), expected);
}

#[test]
fn caller_input_is_not_mutated() {
    let input = pts(&[(3, 3), (2, 2), (1, 1), (0, 0), (5, 1)]);
    let before = input.clone();
    let _ = FastCollinearFinder::new(&input).unwrap();
    let _ = BruteCollinearFinder::new(&input).unwrap();
    assert_eq!(input, before);
}

#[test]
fn segments_are_stable_across_calls() {
    let input = draw_point_cloud(CloudCfg::default(), ReplayToken { seed: 3, index: 1 });
    let fast = FastCollinearFinder::new(&input).unwrap();
    assert_eq!(fast.segments(), fast.segments());
    assert_eq!(fast.segments().len(), fast.segment_count());
    assert_eq!(fast.as_slice(), fast.segments().as_slice());
}

#[test]
fn nullable_input_is_validated() {
    assert_eq!(
        FastCollinearFinder::from_nullable(None).unwrap_err(),
        CollinearError::NullInput { index: None }
    );
    let with_hole = [Some(Point::new(0, 0)), None, Some(Point::new(1, 1))];
    assert_eq!(
        BruteCollinearFinder::from_nullable(Some(&with_hole[..])).unwrap_err(),
        CollinearError::NullInput { index: Some(1) }
    );
    // null check runs before the duplicate check
    let both = [Some(Point::new(0, 0)), Some(Point::new(0, 0)), None];
    assert_eq!(
        FastCollinearFinder::from_nullable(Some(&both[..])).unwrap_err(),
        CollinearError::NullInput { index: Some(2) }
    );
    let ok: Vec<Option<Point>> = (0..4).map(|i| Some(Point::new(i, 2 * i))).collect();
    assert_eq!(
        FastCollinearFinder::from_nullable(Some(ok.as_slice())).unwrap().segment_count(),
        1
    );
}

#[test]
fn planted_clouds_match_oracle() {
    let cfg = CloudCfg {
        noise_points: 40,
        lines: 5,
        per_line: LineLength::Uniform { min: 4, max: 8 },
        extent: 60,
        max_step: 5,
    };
    for index in 0..20 {
        let input = draw_point_cloud(cfg, ReplayToken { seed: 99, index });
        let fast = FastCollinearFinder::new(&input).unwrap();
        assert_eq!(keys(&fast.segments()), oracle(&input), "index {index}");
    }
}

fn small_cloud(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::btree_set((-6i32..6, -6i32..6), 0..max_len)
        .prop_map(|set| set.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn fast_matches_exact_oracle(input in small_cloud(20)) {
        let fast = FastCollinearFinder::new(&input).unwrap();
        prop_assert_eq!(fast.segment_count(), fast.segments().len());
        prop_assert_eq!(keys(&fast.segments()), oracle(&input));
    }

    #[test]
    fn brute_matches_fast_with_at_most_four_per_line(input in small_cloud(12)) {
        prop_assume!(max_points_on_a_line(&input) <= 4);
        let brute = BruteCollinearFinder::new(&input).unwrap();
        let fast = FastCollinearFinder::new(&input).unwrap();
        prop_assert_eq!(brute.segment_count(), brute.segments().len());
        prop_assert_eq!(keys(&brute.segments()), keys(&fast.segments()));
    }

    #[test]
    fn any_duplicate_fails_construction(input in small_cloud(12), pick in any::<prop::sample::Index>()) {
        prop_assume!(!input.is_empty());
        let mut input = input;
        let dup = input[pick.index(input.len())];
        input.push(dup);
        prop_assert_eq!(
            FastCollinearFinder::new(&input).unwrap_err(),
            CollinearError::DuplicatePoint { point: dup }
        );
        prop_assert_eq!(
            BruteCollinearFinder::new(&input).unwrap_err(),
            CollinearError::DuplicatePoint { point: dup }
        );
    }
}
