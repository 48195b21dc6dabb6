use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    curve::{
        PathGeometry,
        segment::{PathSegment, SegmentPath},
    },
    foundation::{
        core::{Canvas, PathPoint, Point},
        math::wrap_distance,
    },
};

/// Corner radius used by rounded canvas frames, further limited to half the inset.
pub const FRAME_CORNER_RADIUS: f64 = 20.0;

/// Circle of `radius` centred on the origin, starting at angle 0 (the +x axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleCurve {
    radius: f64,
}

impl CircleCurve {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl PathGeometry for CircleCurve {
    fn total_length(&self) -> f64 {
        TAU * self.radius
    }

    fn point_at(&self, distance: f64) -> PathPoint {
        if self.radius <= 0.0 {
            return PathPoint::new(0.0, 0.0, FRAC_PI_2);
        }
        let theta = wrap_distance(distance, self.total_length()) / self.radius;
        PathPoint::new(
            self.radius * theta.cos(),
            self.radius * theta.sin(),
            theta + FRAC_PI_2,
        )
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Axis-aligned rectangle centred on the origin, optionally with rounded corners.
///
/// A clamped corner radius of 0 yields the four-segment sharp rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectCurve {
    width: f64,
    height: f64,
    corner_radius: f64,
    path: SegmentPath,
}

impl RectCurve {
    pub fn new(width: f64, height: f64, corner_radius: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let corner_radius = corner_radius.min(width / 2.0).min(height / 2.0).max(0.0);
        let path = SegmentPath::new(rect_segments(width, height, corner_radius));
        Self {
            width,
            height,
            corner_radius,
            path,
        }
    }

    pub fn sharp(width: f64, height: f64) -> Self {
        Self::new(width, height, 0.0)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Corner radius after clamping to half the shorter side.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn is_sharp(&self) -> bool {
        self.corner_radius == 0.0
    }

    /// Closed-form perimeter: four straight runs plus four quarter arcs.
    pub fn perimeter(&self) -> f64 {
        let r = self.corner_radius;
        2.0 * (self.width - 2.0 * r) + 2.0 * (self.height - 2.0 * r) + TAU * r
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.path.segments()
    }
}

impl PathGeometry for RectCurve {
    fn total_length(&self) -> f64 {
        self.path.total_length()
    }

    fn point_at(&self, distance: f64) -> PathPoint {
        self.path.point_at(distance)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

fn rect_segments(width: f64, height: f64, r: f64) -> Vec<PathSegment> {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let p = Point::new;
    if r <= 0.0 {
        return vec![
            PathSegment::line(p(-hw, -hh), p(hw, -hh)),
            PathSegment::line(p(hw, -hh), p(hw, hh)),
            PathSegment::line(p(hw, hh), p(-hw, hh)),
            PathSegment::line(p(-hw, hh), p(-hw, -hh)),
        ];
    }
    vec![
        PathSegment::line(p(-hw + r, -hh), p(hw - r, -hh)),
        PathSegment::arc(p(hw - r, -hh + r), r, -FRAC_PI_2, 0.0),
        PathSegment::line(p(hw, -hh + r), p(hw, hh - r)),
        PathSegment::arc(p(hw - r, hh - r), r, 0.0, FRAC_PI_2),
        PathSegment::line(p(hw - r, hh), p(-hw + r, hh)),
        PathSegment::arc(p(-hw + r, hh - r), r, FRAC_PI_2, PI),
        PathSegment::line(p(-hw, hh - r), p(-hw, -hh + r)),
        PathSegment::arc(p(-hw + r, -hh + r), r, PI, PI + FRAC_PI_2),
    ]
}

/// Corner treatment of a canvas frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameCorners {
    #[default]
    Sharp,
    Rounded,
}

/// Rectangle following the canvas border at `inset` pixels, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameCurve {
    canvas: Canvas,
    inset: f64,
    corners: FrameCorners,
    rect: RectCurve,
    path: SegmentPath,
}

impl FrameCurve {
    pub fn new(canvas: Canvas, inset: f64, corners: FrameCorners) -> Self {
        let inset = inset.max(0.0);
        let radius = match corners {
            FrameCorners::Sharp => 0.0,
            FrameCorners::Rounded => FRAME_CORNER_RADIUS.min(inset / 2.0),
        };
        let rect = RectCurve::new(
            canvas.width - 2.0 * inset,
            canvas.height - 2.0 * inset,
            radius,
        );
        let path = rect.path.translated(canvas.center().to_vec2());
        Self {
            canvas,
            inset,
            corners,
            rect,
            path,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn inset(&self) -> f64 {
        self.inset
    }

    pub fn corners(&self) -> FrameCorners {
        self.corners
    }

    /// The inner rectangle before translation to the canvas centre.
    pub fn rect(&self) -> &RectCurve {
        &self.rect
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.path.segments()
    }
}

impl PathGeometry for FrameCurve {
    fn total_length(&self) -> f64 {
        self.path.total_length()
    }

    fn point_at(&self, distance: f64) -> PathPoint {
        self.path.point_at(distance)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/shape.rs"]
mod tests;
