use std::f64::consts::FRAC_PI_2;

use crate::foundation::{
    core::{PathPoint, Point, Vec2},
    math::{lerp, wrap_distance},
};

/// One analytic piece of a rectangle or frame outline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSegment {
    /// Straight run from `start` to `end`.
    Line { start: Point, end: Point, length: f64 },
    /// Circular arc swept from `start_angle` to `end_angle` (radians, either direction).
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        length: f64,
    },
}

impl PathSegment {
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line {
            start,
            end,
            length: start.distance(end),
        }
    }

    pub fn arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            length: radius * (end_angle - start_angle).abs(),
        }
    }

    pub fn length(&self) -> f64 {
        match *self {
            Self::Line { length, .. } | Self::Arc { length, .. } => length,
        }
    }

    pub fn start_point(&self) -> Point {
        self.point_at(0.0).pos
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.length()).pos
    }

    /// Point at `local` distance from this segment's start, clamped to the segment.
    pub fn point_at(&self, local: f64) -> PathPoint {
        let len = self.length();
        let t = if len > 0.0 {
            (local / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        match *self {
            Self::Line { start, end, .. } => {
                let d = end - start;
                PathPoint {
                    pos: start.lerp(end, t),
                    angle: d.y.atan2(d.x),
                }
            }
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                let a = lerp(start_angle, end_angle, t);
                let turn = if end_angle >= start_angle {
                    FRAC_PI_2
                } else {
                    -FRAC_PI_2
                };
                PathPoint {
                    pos: center + Vec2::from_angle(a) * radius,
                    angle: a + turn,
                }
            }
        }
    }

    fn translated(self, by: Vec2) -> Self {
        match self {
            Self::Line { start, end, length } => Self::Line {
                start: start + by,
                end: end + by,
                length,
            },
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                length,
            } => Self::Arc {
                center: center + by,
                radius,
                start_angle,
                end_angle,
                length,
            },
        }
    }
}

/// An ordered, gap-free run of segments with cumulative end distances for lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentPath {
    segments: Vec<PathSegment>,
    ends: Vec<f64>,
    total: f64,
}

impl SegmentPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        let mut ends = Vec::with_capacity(segments.len());
        let mut total = 0.0;
        for s in &segments {
            total += s.length();
            ends.push(total);
        }
        Self {
            segments,
            ends,
            total,
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn total_length(&self) -> f64 {
        self.total
    }

    /// Point at `d` along the closed outline; `d` is wrapped into `[0, total)`.
    pub fn point_at(&self, d: f64) -> PathPoint {
        let Some(first) = self.segments.first() else {
            return PathPoint::new(0.0, 0.0, 0.0);
        };
        if self.total <= 0.0 {
            return first.point_at(0.0);
        }
        let d = wrap_distance(d, self.total);
        // First segment whose end lies beyond `d`; zero-length runs are skipped.
        let idx = self
            .ends
            .partition_point(|&end| end <= d)
            .min(self.segments.len() - 1);
        let seg_start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        self.segments[idx].point_at(d - seg_start)
    }

    pub(crate) fn translated(&self, by: Vec2) -> Self {
        Self {
            segments: self.segments.iter().map(|s| s.translated(by)).collect(),
            ends: self.ends.clone(),
            total: self.total,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/segment.rs"]
mod tests;
