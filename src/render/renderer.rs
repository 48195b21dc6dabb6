use std::collections::HashMap;

use crate::{
    animation::clock::AnimationClock,
    curve::{
        PathCurve, PathFamily, PathGeometry,
        spline::{CurveType, SplineCurve},
    },
    foundation::core::{Canvas, Degrees, Direction, Point, Vec2},
    layout::{
        glyphs::{TextLayout, offset_to_distance},
        words::{WordSpan, split_words},
    },
    render::{
        metrics::TextMetrics,
        surface::{DrawSurface, TranslatedSurface},
    },
    ribbon::compose::RibbonComposer,
};

/// Stroke width of the optional path outline.
pub const GUIDE_STROKE_WIDTH: f64 = 1.0;

/// Per-frame summary returned to the host loop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    pub offset: Degrees,
    pub offset_distance: f64,
    pub total_length: f64,
    pub glyphs: usize,
    pub ribbons: usize,
}

/// Frame-driven orchestrator: clock tick, layout, ribbons, then drawing.
///
/// One curve is kept per family so switching away from a spline and back keeps its points.
#[derive(Clone, Debug)]
pub struct PathRenderer {
    canvas: Canvas,
    family: PathFamily,
    curves: HashMap<PathFamily, PathCurve>,
    text: String,
    words: Vec<WordSpan>,
    clock: AnimationClock,
    direction: Direction,
    ribbons: RibbonComposer,
    font_size: f64,
    show_guide: bool,
    running: bool,
}

impl PathRenderer {
    pub fn new(canvas: Canvas, curve: PathCurve, text: impl Into<String>) -> Self {
        let family = curve.family();
        let text = text.into();
        let words = split_words(&text);
        Self {
            canvas,
            family,
            curves: HashMap::from([(family, curve)]),
            text,
            words,
            clock: AnimationClock::default(),
            direction: Direction::Clockwise,
            ribbons: RibbonComposer::default(),
            font_size: 32.0,
            show_guide: false,
            running: false,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn family(&self) -> PathFamily {
        self.family
    }

    pub fn curve(&self) -> &PathCurve {
        &self.curves[&self.family]
    }

    pub fn curve_for(&self, family: PathFamily) -> Option<&PathCurve> {
        self.curves.get(&family)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[WordSpan] {
        &self.words
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn ribbons(&self) -> &RibbonComposer {
        &self.ribbons
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.words = split_words(&self.text);
    }

    pub fn set_clock(&mut self, clock: AnimationClock) {
        self.clock = clock;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_ribbons(&mut self, ribbons: RibbonComposer) {
        self.ribbons = ribbons;
    }

    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    pub fn set_show_guide(&mut self, show: bool) {
        self.show_guide = show;
    }

    /// Store `curve` for its family and make it active.
    pub fn set_curve(&mut self, curve: PathCurve) {
        let family = curve.family();
        self.curves.insert(family, curve);
        self.select_path(family);
    }

    /// Activate a previously stored family. The degree offset carries over unchanged, so text
    /// keeps the same fraction of the path. Returns `false` if no curve of that family exists.
    pub fn select_path(&mut self, family: PathFamily) -> bool {
        if !self.curves.contains_key(&family) {
            return false;
        }
        if self.family != family {
            tracing::debug!(from = ?self.family, to = ?family, "path family selected");
        }
        self.family = family;
        true
    }

    pub fn add_point(&mut self, p: Point) {
        self.spline_mut().add_point(p);
    }

    pub fn insert_point(&mut self, index: usize, p: Point) -> bool {
        self.spline_mut().insert_point(index, p)
    }

    pub fn remove_point(&mut self, index: usize) -> Option<Point> {
        self.spline_mut().remove_point(index)
    }

    pub fn move_point(&mut self, index: usize, p: Point) -> bool {
        self.spline_mut().move_point(index, p)
    }

    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        self.spline_mut().set_curve_type(curve_type);
    }

    pub fn clear_points(&mut self) {
        self.spline_mut().clear();
    }

    /// The stored spline, created empty on first edit.
    fn spline_mut(&mut self) -> &mut SplineCurve {
        match self
            .curves
            .entry(PathFamily::Spline)
            .or_insert_with(|| PathCurve::Spline(SplineCurve::default()))
        {
            PathCurve::Spline(s) => s,
            _ => unreachable!("curves are keyed by their own family"),
        }
    }

    /// Begin animating. Calling it while running does nothing.
    pub fn start(&mut self, now_ms: f64) {
        if self.running {
            return;
        }
        self.running = true;
        self.clock.resume(now_ms);
    }

    /// Stop animating. Calling it while stopped does nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run one frame: tick the clock to `now_ms`, then draw. `None` while stopped.
    #[tracing::instrument(skip(self, surface, metrics))]
    pub fn frame<S, M>(&mut self, now_ms: f64, surface: &mut S, metrics: &M) -> Option<FrameReport>
    where
        S: DrawSurface + ?Sized,
        M: TextMetrics + ?Sized,
    {
        if !self.running {
            return None;
        }
        self.clock.tick(now_ms);
        let report = self.draw(surface, metrics);
        tracing::trace!(
            offset = report.offset.0,
            glyphs = report.glyphs,
            ribbons = report.ribbons,
            "frame drawn"
        );
        Some(report)
    }

    /// Lay out and draw the current state without advancing the clock.
    pub fn draw<S, M>(&self, surface: &mut S, metrics: &M) -> FrameReport
    where
        S: DrawSurface + ?Sized,
        M: TextMetrics + ?Sized,
    {
        let curve = self.curve();
        let total_length = curve.total_length();
        let offset = self.clock.offset();
        let offset_distance = offset_to_distance(offset, total_length);

        let layout = TextLayout::compute(&self.text, curve, offset_distance, self.direction);
        let strokes = self.ribbons.compose(curve, &layout, &self.words, metrics);
        let glyphs = layout.resolve(curve, metrics);

        let shift = if curve.is_origin_centred() {
            self.canvas.center().to_vec2()
        } else {
            Vec2::ZERO
        };
        let mut out = TranslatedSurface::new(surface, shift);

        if self.show_guide {
            curve.trace(&mut out);
            out.stroke(GUIDE_STROKE_WIDTH);
        }
        self.ribbons.draw(&strokes, &mut out);
        for g in &glyphs {
            out.draw_glyph(g.ch, g.transform, self.font_size);
        }

        FrameReport {
            offset,
            offset_distance,
            total_length,
            glyphs: glyphs.len(),
            ribbons: strokes.len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
