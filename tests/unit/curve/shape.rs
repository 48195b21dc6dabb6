use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPS: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn segment_sum(segments: &[PathSegment]) -> f64 {
    segments.iter().map(PathSegment::length).sum()
}

#[test]
fn circle_starts_on_positive_x_axis() {
    let c = CircleCurve::new(100.0);
    assert!(close(c.total_length(), 2.0 * PI * 100.0));
    let p = c.point_at(0.0);
    assert!(close(p.pos.x, 100.0));
    assert!(close(p.pos.y, 0.0));
    assert!(close(p.angle, FRAC_PI_2));

    let half = c.point_at(c.total_length() / 2.0);
    assert!(close(half.pos.x, -100.0));
    assert!(close(half.pos.y, 0.0));
    assert!(close(half.angle, PI + FRAC_PI_2));
}

#[test]
fn zero_radius_circle_is_degenerate() {
    let c = CircleCurve::new(0.0);
    assert_eq!(c.total_length(), 0.0);
    assert_eq!(c.point_at(12.0).pos, Point::ORIGIN);
}

#[test]
fn rect_perimeter_matches_closed_form() {
    for (w, h, r) in [
        (200.0, 100.0, 0.0),
        (200.0, 100.0, 50.0),
        (200.0, 100.0, 80.0),
        (300.0, 120.0, 17.5),
        (64.0, 64.0, 32.0),
    ] {
        let rect = RectCurve::new(w, h, r);
        assert!(
            close(segment_sum(rect.segments()), rect.perimeter()),
            "w={w} h={h} r={r}"
        );
        assert!(close(rect.total_length(), rect.perimeter()));
    }
}

#[test]
fn corner_radius_is_clamped_to_half_the_short_side() {
    let rect = RectCurve::new(200.0, 100.0, 80.0);
    assert_eq!(rect.corner_radius(), 50.0);
    assert_eq!(rect.segments().len(), 8);
    assert!(close(rect.perimeter(), 2.0 * 100.0 + PI * 100.0));
}

#[test]
fn sharp_rect_has_four_segments() {
    let rect = RectCurve::sharp(200.0, 100.0);
    assert!(rect.is_sharp());
    assert_eq!(rect.segments().len(), 4);
    assert!(close(rect.total_length(), 600.0));
}

#[test]
fn sharp_rect_starts_top_left_and_runs_right() {
    let rect = RectCurve::sharp(200.0, 100.0);
    let p = rect.point_at(0.0);
    assert!(close(p.pos.x, -100.0));
    assert!(close(p.pos.y, -50.0));
    assert!(close(p.angle, 0.0));

    let q = rect.point_at(250.0);
    assert!(close(q.pos.x, 100.0));
    assert!(close(q.pos.y, 0.0));
    assert!(close(q.angle, FRAC_PI_2));
}

#[test]
fn rounded_rect_arc_tangent_is_continuous() {
    let rect = RectCurve::new(200.0, 100.0, 20.0);
    let top_len = 200.0 - 40.0;
    let before = rect.point_at(top_len - 1e-9);
    let after = rect.point_at(top_len + 1e-9);
    assert!((before.angle - after.angle).abs() < 1e-6);
    let arc_end = rect.point_at(top_len + 20.0 * FRAC_PI_2);
    assert!(close(arc_end.pos.x, 100.0));
    assert!(close(arc_end.pos.y, -30.0));
}

#[test]
fn closed_curves_meet_at_the_seam() {
    let curves: Vec<Box<dyn PathGeometry>> = vec![
        Box::new(CircleCurve::new(37.0)),
        Box::new(RectCurve::sharp(120.0, 80.0)),
        Box::new(RectCurve::new(120.0, 80.0, 12.0)),
        Box::new(FrameCurve::new(
            Canvas {
                width: 640.0,
                height: 480.0,
            },
            24.0,
            FrameCorners::Rounded,
        )),
    ];
    for c in curves {
        assert!(c.is_closed());
        let a = c.point_at(0.0).pos;
        let b = c.point_at(c.total_length()).pos;
        assert!(a.distance(b) < EPS);
    }
}

#[test]
fn frame_is_inset_from_canvas_edges() {
    let canvas = Canvas {
        width: 640.0,
        height: 480.0,
    };
    let frame = FrameCurve::new(canvas, 20.0, FrameCorners::Sharp);
    assert!(close(frame.total_length(), 2.0 * 600.0 + 2.0 * 440.0));
    let p = frame.point_at(0.0);
    assert!(close(p.pos.x, 20.0));
    assert!(close(p.pos.y, 20.0));
}

#[test]
fn rounded_frame_radius_is_limited_by_inset() {
    let canvas = Canvas {
        width: 400.0,
        height: 300.0,
    };
    let small = FrameCurve::new(canvas, 10.0, FrameCorners::Rounded);
    assert_eq!(small.rect().corner_radius(), 5.0);
    let large = FrameCurve::new(canvas, 100.0, FrameCorners::Rounded);
    assert_eq!(large.rect().corner_radius(), FRAME_CORNER_RADIUS);
    assert_eq!(large.segments().len(), 8);
    let none = FrameCurve::new(canvas, 0.0, FrameCorners::Rounded);
    assert!(none.rect().is_sharp());
}
