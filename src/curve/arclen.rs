use crate::foundation::{
    core::{PathPoint, Point, Vec2},
    math::lerp_angle,
};

/// Number of parameter steps sampled per table build (the table holds one more row).
pub const ARC_LENGTH_SAMPLES: usize = 200;

/// One row of an [`ArcLengthTable`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArcLengthSample {
    /// Global Catmull-Rom parameter in `[0, 1]`.
    pub t: f64,
    /// Chord-summed distance from the curve start.
    pub distance: f64,
    pub pos: Point,
    /// Tangent angle from the analytic derivative.
    pub angle: f64,
}

/// Distance-indexed samples of a Catmull-Rom curve.
///
/// Both `t` and `distance` are non-decreasing front to back, so lookups binary-search on
/// `distance`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcLengthTable {
    samples: Vec<ArcLengthSample>,
    total_length: f64,
}

impl ArcLengthTable {
    pub fn build(points: &[Point]) -> Self {
        Self::build_with_resolution(points, ARC_LENGTH_SAMPLES)
    }

    pub fn build_with_resolution(points: &[Point], resolution: usize) -> Self {
        if points.len() < 2 {
            let pos = points.first().copied().unwrap_or(Point::ORIGIN);
            return Self {
                samples: vec![ArcLengthSample {
                    t: 0.0,
                    distance: 0.0,
                    pos,
                    angle: 0.0,
                }],
                total_length: 0.0,
            };
        }

        let resolution = resolution.max(1);
        let mut samples = Vec::with_capacity(resolution + 1);
        let mut distance = 0.0;
        let mut prev: Option<Point> = None;
        let mut prev_angle = 0.0;
        for i in 0..=resolution {
            let t = i as f64 / resolution as f64;
            let (pos, deriv) = catmull_rom(points, t);
            if let Some(p) = prev {
                distance += p.distance(pos);
            }
            let angle = if deriv.hypot2() > 1e-12 {
                deriv.atan2()
            } else {
                prev_angle
            };
            samples.push(ArcLengthSample {
                t,
                distance,
                pos,
                angle,
            });
            prev = Some(pos);
            prev_angle = angle;
        }

        Self {
            samples,
            total_length: distance,
        }
    }

    pub fn samples(&self) -> &[ArcLengthSample] {
        &self.samples
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Point at `distance`, clamped to `[0, total_length]`.
    pub fn point_at(&self, distance: f64) -> PathPoint {
        let d = distance.clamp(0.0, self.total_length);
        let hi = self
            .samples
            .partition_point(|s| s.distance < d)
            .min(self.samples.len() - 1);
        if hi == 0 {
            let s = self.samples[0];
            return PathPoint {
                pos: s.pos,
                angle: s.angle,
            };
        }
        let a = self.samples[hi - 1];
        let b = self.samples[hi];
        let span = b.distance - a.distance;
        let u = if span > 0.0 { (d - a.distance) / span } else { 0.0 };
        PathPoint {
            pos: a.pos.lerp(b.pos, u),
            angle: lerp_angle(a.angle, b.angle, u),
        }
    }
}

/// Evaluate the Catmull-Rom chain through `points` at global `t` in `[0, 1]`.
///
/// End anchors are repeated as their own outer neighbours so the curve passes through the first
/// and last point. Returns the position and the derivative with respect to the local parameter.
/// Requires at least two points.
pub fn catmull_rom(points: &[Point], t: f64) -> (Point, Vec2) {
    let n = points.len();
    debug_assert!(n >= 2);
    let segments = n - 1;
    let s = t.clamp(0.0, 1.0) * segments as f64;
    let i = (s.floor() as usize).min(segments - 1);
    let u = s - i as f64;

    let p0 = points[i.saturating_sub(1)].to_vec2();
    let p1 = points[i].to_vec2();
    let p2 = points[i + 1].to_vec2();
    let p3 = points[(i + 2).min(n - 1)].to_vec2();

    let c1 = p2 - p0;
    let c2 = p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3;
    let c3 = p1 * 3.0 - p0 - p2 * 3.0 + p3;

    let pos = (p1 * 2.0 + c1 * u + c2 * (u * u) + c3 * (u * u * u)) * 0.5;
    let mut deriv = (c1 + c2 * (2.0 * u) + c3 * (3.0 * u * u)) * 0.5;
    if deriv.hypot2() <= 1e-12 {
        deriv = p2 - p1;
    }
    (pos.to_point(), deriv)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/arclen.rs"]
mod tests;
