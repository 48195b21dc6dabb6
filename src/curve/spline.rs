use std::cell::OnceCell;

use crate::{
    curve::{PathGeometry, arclen::ArcLengthTable},
    foundation::core::{PathPoint, Point},
};

/// How a spline joins its control points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    /// Straight segments between consecutive points.
    Linear,
    /// Catmull-Rom interpolation through every point.
    #[default]
    Curved,
}

/// User-drawn open path through an ordered list of control points.
///
/// Curved splines answer distance queries from a lazily built [`ArcLengthTable`]. Every edit
/// drops the table; the next query rebuilds it.
#[derive(Clone, Debug, Default)]
pub struct SplineCurve {
    points: Vec<Point>,
    curve_type: CurveType,
    table: OnceCell<ArcLengthTable>,
}

impl SplineCurve {
    pub fn new(points: Vec<Point>, curve_type: CurveType) -> Self {
        Self {
            points,
            curve_type,
            table: OnceCell::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Whether the arc-length table is currently built.
    pub fn is_table_valid(&self) -> bool {
        self.table.get().is_some()
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
        self.invalidate();
    }

    /// Insert before `index`; `index == len` appends. Returns `false` when out of range.
    pub fn insert_point(&mut self, index: usize, p: Point) -> bool {
        if index > self.points.len() {
            return false;
        }
        self.points.insert(index, p);
        self.invalidate();
        true
    }

    pub fn remove_point(&mut self, index: usize) -> Option<Point> {
        if index >= self.points.len() {
            return None;
        }
        let p = self.points.remove(index);
        self.invalidate();
        Some(p)
    }

    pub fn move_point(&mut self, index: usize, p: Point) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            return false;
        };
        *slot = p;
        self.invalidate();
        true
    }

    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        if self.curve_type != curve_type {
            self.curve_type = curve_type;
            self.invalidate();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate();
    }

    /// Index of the control point closest to `p` within `radius`, if any.
    pub fn nearest_point(&self, p: Point, radius: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.distance(p)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// The curved-mode lookup table, built on first use after an edit.
    pub fn arc_length_table(&self) -> &ArcLengthTable {
        self.table.get_or_init(|| {
            let table = ArcLengthTable::build(&self.points);
            tracing::debug!(
                points = self.points.len(),
                total_length = table.total_length(),
                "rebuilt arc-length table"
            );
            table
        })
    }

    fn invalidate(&mut self) {
        self.table.take();
    }

    fn linear_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    fn linear_point_at(&self, distance: f64) -> PathPoint {
        let Some(&first) = self.points.first() else {
            return PathPoint::new(0.0, 0.0, 0.0);
        };
        let last = self.points[self.points.len() - 1];
        if self.points.len() < 2 {
            return PathPoint {
                pos: first,
                angle: 0.0,
            };
        }

        let mut remaining = distance.max(0.0);
        let mut angle = 0.0;
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            let len = a.distance(b);
            if len <= 0.0 {
                continue;
            }
            let d = b - a;
            angle = d.y.atan2(d.x);
            if remaining <= len {
                return PathPoint {
                    pos: a.lerp(b, remaining / len),
                    angle,
                };
            }
            remaining -= len;
        }
        PathPoint { pos: last, angle }
    }
}

impl PartialEq for SplineCurve {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.curve_type == other.curve_type
    }
}

impl PathGeometry for SplineCurve {
    fn total_length(&self) -> f64 {
        match self.curve_type {
            CurveType::Linear => self.linear_length(),
            CurveType::Curved => self.arc_length_table().total_length(),
        }
    }

    fn point_at(&self, distance: f64) -> PathPoint {
        match self.curve_type {
            CurveType::Linear => self.linear_point_at(distance),
            CurveType::Curved => self.arc_length_table().point_at(distance),
        }
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/spline.rs"]
mod tests;
