//! Path families that text can be laid out along.
//!
//! Every family answers the same three questions: how long the path is, where a given arc-length
//! distance lands (position plus tangent angle), and whether the path closes on itself.

pub(crate) mod arclen;
pub(crate) mod segment;
pub(crate) mod shape;
pub(crate) mod spline;

use std::f64::consts::TAU;

use crate::{
    foundation::core::{PathPoint, Point},
    render::surface::DrawSurface,
};

use self::{
    segment::PathSegment,
    shape::{CircleCurve, FrameCurve, RectCurve},
    spline::{CurveType, SplineCurve},
};

/// Distance-addressable path geometry.
pub trait PathGeometry {
    /// Exact path length (closed form, or from the cached table for curved splines).
    fn total_length(&self) -> f64;

    /// Position and travel direction at `distance` along the path.
    ///
    /// Closed paths wrap `distance` into `[0, total_length)`; open paths clamp to their ends.
    fn point_at(&self, distance: f64) -> PathPoint;

    fn is_closed(&self) -> bool;
}

/// Family selector, used by the renderer and configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathFamily {
    Circle,
    Rect,
    Frame,
    Spline,
}

/// The active path, one variant per family.
#[derive(Clone, Debug, PartialEq)]
pub enum PathCurve {
    Circle(CircleCurve),
    Rect(RectCurve),
    Frame(FrameCurve),
    Spline(SplineCurve),
}

impl PathCurve {
    pub fn family(&self) -> PathFamily {
        match self {
            Self::Circle(_) => PathFamily::Circle,
            Self::Rect(_) => PathFamily::Rect,
            Self::Frame(_) => PathFamily::Frame,
            Self::Spline(_) => PathFamily::Spline,
        }
    }

    /// Short human-readable kind, distinguishing sharp/rounded rectangles and spline modes.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Rect(r) if r.is_sharp() => "sharp_rect",
            Self::Rect(_) => "rounded_rect",
            Self::Frame(f) if f.rect().is_sharp() => "sharp_frame",
            Self::Frame(_) => "rounded_frame",
            Self::Spline(s) => match s.curve_type() {
                CurveType::Linear => "linear_spline",
                CurveType::Curved => "curved_spline",
            },
        }
    }

    /// Whether the curve is expressed around the origin (and needs centring on a canvas).
    pub fn is_origin_centred(&self) -> bool {
        matches!(self, Self::Circle(_) | Self::Rect(_))
    }

    /// Analytic segments for rectangle and frame curves; empty otherwise.
    pub fn segments(&self) -> &[PathSegment] {
        match self {
            Self::Rect(r) => r.segments(),
            Self::Frame(f) => f.segments(),
            Self::Circle(_) | Self::Spline(_) => &[],
        }
    }

    pub fn as_spline(&self) -> Option<&SplineCurve> {
        match self {
            Self::Spline(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_spline_mut(&mut self) -> Option<&mut SplineCurve> {
        match self {
            Self::Spline(s) => Some(s),
            _ => None,
        }
    }

    /// Issue outline primitives for this path (no stroke).
    pub fn trace<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::Circle(c) => {
                if c.radius() > 0.0 {
                    surface.move_to(Point::new(c.radius(), 0.0));
                    surface.arc_to(Point::ORIGIN, c.radius(), 0.0, TAU);
                }
            }
            Self::Rect(_) | Self::Frame(_) => trace_segments(self.segments(), surface),
            Self::Spline(s) => {
                let mut points: Vec<Point> = match s.curve_type() {
                    CurveType::Linear => s.points().to_vec(),
                    CurveType::Curved => s
                        .arc_length_table()
                        .samples()
                        .iter()
                        .map(|row| row.pos)
                        .collect(),
                };
                points.dedup();
                if let Some((first, rest)) = points.split_first() {
                    surface.move_to(*first);
                    for p in rest {
                        surface.line_to(*p);
                    }
                }
            }
        }
    }
}

fn trace_segments<S: DrawSurface + ?Sized>(segments: &[PathSegment], surface: &mut S) {
    let Some(first) = segments.first() else {
        return;
    };
    surface.move_to(first.start_point());
    for seg in segments {
        match *seg {
            PathSegment::Line { end, length, .. } => {
                if length > 0.0 {
                    surface.line_to(end);
                }
            }
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => surface.arc_to(center, radius, start_angle, end_angle),
        }
    }
}

impl PathGeometry for PathCurve {
    fn total_length(&self) -> f64 {
        match self {
            Self::Circle(c) => c.total_length(),
            Self::Rect(r) => r.total_length(),
            Self::Frame(f) => f.total_length(),
            Self::Spline(s) => s.total_length(),
        }
    }

    fn point_at(&self, distance: f64) -> PathPoint {
        match self {
            Self::Circle(c) => c.point_at(distance),
            Self::Rect(r) => r.point_at(distance),
            Self::Frame(f) => f.point_at(distance),
            Self::Spline(s) => s.point_at(distance),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Circle(c) => c.is_closed(),
            Self::Rect(r) => r.is_closed(),
            Self::Frame(f) => f.is_closed(),
            Self::Spline(s) => s.is_closed(),
        }
    }
}

impl From<CircleCurve> for PathCurve {
    fn from(c: CircleCurve) -> Self {
        Self::Circle(c)
    }
}

impl From<RectCurve> for PathCurve {
    fn from(r: RectCurve) -> Self {
        Self::Rect(r)
    }
}

impl From<FrameCurve> for PathCurve {
    fn from(f: FrameCurve) -> Self {
        Self::Frame(f)
    }
}

impl From<SplineCurve> for PathCurve {
    fn from(s: SplineCurve) -> Self {
        Self::Spline(s)
    }
}
