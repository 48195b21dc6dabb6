use super::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn assert_monotonic(table: &ArcLengthTable) {
    for pair in table.samples().windows(2) {
        assert!(pair[1].distance >= pair[0].distance);
        assert!(pair[1].t >= pair[0].t);
    }
}

#[test]
fn cumulative_distance_never_decreases() {
    let configs = [
        pts(&[(0.0, 0.0), (100.0, 0.0)]),
        pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]),
        pts(&[
            (0.0, 0.0),
            (40.0, 80.0),
            (90.0, -10.0),
            (130.0, 60.0),
            (130.0, 60.0),
            (170.0, 0.0),
            (200.0, 120.0),
            (150.0, 200.0),
            (60.0, 160.0),
            (10.0, 220.0),
            (-30.0, 100.0),
        ]),
    ];
    for points in configs {
        let table = ArcLengthTable::build(&points);
        assert_eq!(table.samples().len(), ARC_LENGTH_SAMPLES + 1);
        assert_monotonic(&table);
        assert!(table.total_length() > 0.0);
    }
}

#[test]
fn two_point_curve_is_the_straight_segment() {
    let table = ArcLengthTable::build(&pts(&[(0.0, 0.0), (100.0, 0.0)]));
    assert!((table.total_length() - 100.0).abs() < 1e-9);
    let mid = table.point_at(50.0);
    assert!((mid.pos.x - 50.0).abs() < 1e-6);
    assert!(mid.pos.y.abs() < 1e-9);
    assert!(mid.angle.abs() < 1e-9);
}

#[test]
fn curve_passes_through_end_anchors_and_clamps() {
    let points = pts(&[(0.0, 0.0), (50.0, 80.0), (120.0, 10.0)]);
    let table = ArcLengthTable::build(&points);
    let start = table.point_at(-10.0);
    assert!(start.pos.distance(points[0]) < 1e-9);
    let end = table.point_at(table.total_length() + 10.0);
    assert!(end.pos.distance(points[2]) < 1e-9);
}

#[test]
fn curve_visits_interior_anchor() {
    let points = pts(&[(0.0, 0.0), (50.0, 80.0), (120.0, 10.0)]);
    let table = ArcLengthTable::build(&points);
    let hit = table
        .samples()
        .iter()
        .find(|s| (s.t - 0.5).abs() < 1e-12)
        .copied()
        .unwrap();
    assert!(hit.pos.distance(points[1]) < 1e-9);
}

#[test]
fn derivative_tangent_follows_the_first_leg() {
    let points = pts(&[(0.0, 0.0), (0.0, 100.0)]);
    let (_, d) = catmull_rom(&points, 0.0);
    assert!((d.atan2() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn fewer_than_two_points_is_degenerate() {
    let empty = ArcLengthTable::build(&[]);
    assert_eq!(empty.total_length(), 0.0);
    assert_eq!(empty.point_at(5.0).pos, Point::ORIGIN);

    let single = ArcLengthTable::build(&pts(&[(3.0, 4.0)]));
    assert_eq!(single.total_length(), 0.0);
    assert_eq!(single.point_at(5.0).pos, Point::new(3.0, 4.0));
}
