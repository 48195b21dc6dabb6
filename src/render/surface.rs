use crate::foundation::core::{Affine, BezPath, Point, Vec2};

/// Drawing primitives issued by the engine. Surface lifecycle belongs to the host.
pub trait DrawSurface {
    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Circular arc around `center`, continuing the current sub-path from its current point.
    fn arc_to(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Stroke the pending sub-paths and start a fresh path.
    fn stroke(&mut self, width: f64);

    /// Draw `ch` with its baseline origin placed by `transform`.
    fn draw_glyph(&mut self, ch: char, transform: Affine, font_size: f64);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    ArcTo {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke {
        width: f64,
    },
    Glyph {
        ch: char,
        /// Affine coefficients `[a, b, c, d, e, f]`.
        transform: [f64; 6],
        font_size: f64,
    },
}

/// Surface that records every call, for tests and JSON dumps.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCmd> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn glyph_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Glyph { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Stroke { .. }))
            .count()
    }

    /// Rebuild each stroked path as a `BezPath` (arcs are flattened by kurbo).
    pub fn stroked_paths(&self) -> Vec<BezPath> {
        let mut out = Vec::new();
        let mut current = BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                DrawCmd::MoveTo { x, y } => current.move_to((x, y)),
                DrawCmd::LineTo { x, y } => current.line_to((x, y)),
                DrawCmd::ArcTo {
                    cx,
                    cy,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    let arc = kurbo::Arc::new(
                        (cx, cy),
                        Vec2::new(radius, radius),
                        start_angle,
                        end_angle - start_angle,
                        0.0,
                    );
                    if current.elements().is_empty() {
                        current.move_to(arc.center + Vec2::from_angle(start_angle) * radius);
                    }
                    arc.to_cubic_beziers(0.1, |p1, p2, p3| current.curve_to(p1, p2, p3));
                }
                DrawCmd::Stroke { .. } => {
                    out.push(std::mem::take(&mut current));
                }
                DrawCmd::Glyph { .. } => {}
            }
        }
        out
    }
}

impl DrawSurface for RecordingSurface {
    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCmd::MoveTo { x: p.x, y: p.y });
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCmd::LineTo { x: p.x, y: p.y });
    }

    fn arc_to(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCmd::ArcTo {
            cx: center.x,
            cy: center.y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self, width: f64) {
        self.commands.push(DrawCmd::Stroke { width });
    }

    fn draw_glyph(&mut self, ch: char, transform: Affine, font_size: f64) {
        self.commands.push(DrawCmd::Glyph {
            ch,
            transform: transform.as_coeffs(),
            font_size,
        });
    }
}

/// Moves every primitive by a fixed offset before forwarding it.
pub struct TranslatedSurface<'a, S: DrawSurface + ?Sized> {
    inner: &'a mut S,
    offset: Vec2,
}

impl<'a, S: DrawSurface + ?Sized> TranslatedSurface<'a, S> {
    pub fn new(inner: &'a mut S, offset: Vec2) -> Self {
        Self { inner, offset }
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for TranslatedSurface<'_, S> {
    fn move_to(&mut self, p: Point) {
        self.inner.move_to(p + self.offset);
    }

    fn line_to(&mut self, p: Point) {
        self.inner.line_to(p + self.offset);
    }

    fn arc_to(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.inner
            .arc_to(center + self.offset, radius, start_angle, end_angle);
    }

    fn stroke(&mut self, width: f64) {
        self.inner.stroke(width);
    }

    fn draw_glyph(&mut self, ch: char, transform: Affine, font_size: f64) {
        self.inner
            .draw_glyph(ch, Affine::translate(self.offset) * transform, font_size);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
