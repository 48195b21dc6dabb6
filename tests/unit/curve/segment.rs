use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn line_interpolates_and_points_along_travel() {
    let s = PathSegment::line(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
    assert!(close(s.length(), 10.0));
    let p = s.point_at(4.0);
    assert!(close(p.pos.y, 4.0));
    assert!(close(p.angle, FRAC_PI_2));
}

#[test]
fn arc_tangent_is_radial_plus_quarter_turn() {
    let s = PathSegment::arc(Point::ORIGIN, 10.0, 0.0, FRAC_PI_2);
    assert!(close(s.length(), 10.0 * FRAC_PI_2));
    let p = s.point_at(0.0);
    assert!(close(p.pos.x, 10.0));
    assert!(close(p.angle, FRAC_PI_2));
    let end = s.point_at(s.length());
    assert!(close(end.pos.y, 10.0));
    assert!(close(end.angle, PI));
}

#[test]
fn reversed_arc_turns_the_other_way() {
    let s = PathSegment::arc(Point::ORIGIN, 5.0, FRAC_PI_2, 0.0);
    assert!(close(s.point_at(0.0).angle, 0.0));
}

#[test]
fn lookup_skips_zero_length_runs() {
    let path = SegmentPath::new(vec![
        PathSegment::line(Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
        PathSegment::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        PathSegment::line(Point::new(10.0, 0.0), Point::new(10.0, 0.0)),
        PathSegment::line(Point::new(10.0, 0.0), Point::new(0.0, 0.0)),
    ]);
    assert!(close(path.total_length(), 20.0));
    let p = path.point_at(0.0);
    assert!(close(p.angle, 0.0));
    let q = path.point_at(15.0);
    assert!(close(q.pos.x, 5.0));
    assert!(close(q.angle, PI));
}

#[test]
fn lookup_wraps_out_of_range_distances() {
    let path = SegmentPath::new(vec![
        PathSegment::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        PathSegment::line(Point::new(10.0, 0.0), Point::new(0.0, 0.0)),
    ]);
    assert_eq!(path.point_at(-5.0).pos, path.point_at(15.0).pos);
    assert_eq!(path.point_at(25.0).pos, path.point_at(5.0).pos);
}

#[test]
fn empty_path_is_origin() {
    let path = SegmentPath::new(vec![]);
    assert_eq!(path.total_length(), 0.0);
    assert_eq!(path.point_at(3.0).pos, Point::ORIGIN);
}

#[test]
fn arc_end_point_meets_the_next_segment() {
    let arc = PathSegment::arc(Point::ORIGIN, 10.0, 0.0, FRAC_PI_2);
    let line = PathSegment::line(Point::new(0.0, 10.0), Point::new(-20.0, 10.0));
    let end = arc.end_point();
    let next = line.start_point();
    assert!(close(end.x, next.x) && close(end.y, next.y));
    assert_eq!(line.end_point(), Point::new(-20.0, 10.0));
}
