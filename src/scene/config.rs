use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::clock::{AnimationClock, AnimationMode, PulseConfig},
    curve::{
        PathCurve,
        shape::{CircleCurve, FrameCorners, FrameCurve, RectCurve},
        spline::{CurveType, SplineCurve},
    },
    foundation::{
        core::{Canvas, Direction, Point},
        error::{PathTextError, PathTextResult},
    },
    render::{metrics::FixedMetrics, renderer::PathRenderer},
    ribbon::compose::{RibbonComposer, RibbonMode, RibbonStyle},
};

/// Path family and its parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathConfig {
    Circle {
        radius: f64,
    },
    Rect {
        width: f64,
        height: f64,
        #[serde(default)]
        corner_radius: f64,
    },
    Frame {
        inset: f64,
        #[serde(default)]
        corners: FrameCorners,
    },
    Spline {
        points: Vec<Point>,
        #[serde(default)]
        curve: CurveType,
    },
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::Circle { radius: 250.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub mode: AnimationMode,
    /// Linear-mode speed multiplier.
    pub speed: f64,
    pub direction: Direction,
    pub pulse: PulseConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            mode: AnimationMode::Linear,
            speed: 1.0,
            direction: Direction::Clockwise,
            pulse: PulseConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RibbonConfig {
    pub mode: RibbonMode,
    #[serde(flatten)]
    pub style: RibbonStyle,
}

/// Everything needed to build a [`PathRenderer`].
///
/// Omitted fields fall back to their defaults, so `{}` is a valid scene (a circle on an 800x800
/// canvas).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub canvas: Canvas,
    pub text: String,
    pub font_size: f64,
    pub path: PathConfig,
    pub animation: AnimationConfig,
    /// Order in which characters are laid out along the path.
    pub layout_direction: Direction,
    pub ribbon: RibbonConfig,
    pub show_guide: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            text: "TEXT ON A PATH ".to_string(),
            font_size: 32.0,
            path: PathConfig::default(),
            animation: AnimationConfig::default(),
            layout_direction: Direction::Clockwise,
            ribbon: RibbonConfig::default(),
            show_guide: false,
        }
    }
}

impl SceneConfig {
    /// Parse a scene from a JSON reader. Does not validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> PathTextResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PathTextError::serde(format!("parse scene JSON: {e}")))
    }

    pub fn from_json(s: &str) -> PathTextResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PathTextError::serde(format!("parse scene JSON: {e}")))
    }

    /// Read, parse and validate a scene file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> PathTextResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PathTextError::config(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        let scene = Self::from_reader(BufReader::new(f))?;
        scene.validate()?;
        tracing::debug!(
            family = scene.path_kind(),
            chars = scene.text.chars().count(),
            "scene loaded"
        );
        Ok(scene)
    }

    fn path_kind(&self) -> &'static str {
        match self.path {
            PathConfig::Circle { .. } => "circle",
            PathConfig::Rect { .. } => "rect",
            PathConfig::Frame { .. } => "frame",
            PathConfig::Spline { .. } => "spline",
        }
    }

    /// Reject parameters the geometry core would otherwise silently degrade.
    pub fn validate(&self) -> PathTextResult<()> {
        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        positive("font_size", self.font_size)?;

        match &self.path {
            PathConfig::Circle { radius } => non_negative("path.radius", *radius)?,
            PathConfig::Rect {
                width,
                height,
                corner_radius,
            } => {
                non_negative("path.width", *width)?;
                non_negative("path.height", *height)?;
                non_negative("path.corner_radius", *corner_radius)?;
            }
            PathConfig::Frame { inset, .. } => {
                non_negative("path.inset", *inset)?;
                if 2.0 * inset > self.canvas.width.min(self.canvas.height) {
                    return Err(PathTextError::validation(format!(
                        "path.inset {inset} leaves no room inside a {}x{} canvas",
                        self.canvas.width, self.canvas.height
                    )));
                }
            }
            PathConfig::Spline { points, .. } => {
                if let Some(i) = points.iter().position(|p| !p.is_finite()) {
                    return Err(PathTextError::validation(format!(
                        "path.points[{i}] is not finite"
                    )));
                }
            }
        }

        let anim = &self.animation;
        non_negative("animation.speed", anim.speed)?;
        positive("animation.pulse.time", anim.pulse.time)?;
        non_negative("animation.pulse.hold", anim.pulse.hold)?;
        non_negative("animation.pulse.distance", anim.pulse.distance)?;
        if !(0.0..=1.0).contains(&anim.pulse.ease) {
            return Err(PathTextError::validation(format!(
                "animation.pulse.ease must be in [0, 1], got {}",
                anim.pulse.ease
            )));
        }

        non_negative("ribbon.padding", self.ribbon.style.padding)?;
        non_negative("ribbon.stroke_width", self.ribbon.style.stroke_width)?;
        Ok(())
    }

    /// The configured curve. Frames are placed on the configured canvas.
    pub fn build_curve(&self) -> PathCurve {
        match &self.path {
            PathConfig::Circle { radius } => CircleCurve::new(*radius).into(),
            PathConfig::Rect {
                width,
                height,
                corner_radius,
            } => RectCurve::new(*width, *height, *corner_radius).into(),
            PathConfig::Frame { inset, corners } => {
                FrameCurve::new(self.canvas, *inset, *corners).into()
            }
            PathConfig::Spline { points, curve } => SplineCurve::new(points.clone(), *curve).into(),
        }
    }

    pub fn build_clock(&self) -> AnimationClock {
        let a = &self.animation;
        AnimationClock::new(a.mode, a.speed, a.direction, a.pulse)
    }

    /// Metrics matching the configured font size, for hosts without a real font.
    pub fn metrics(&self) -> FixedMetrics {
        FixedMetrics::new(self.font_size)
    }

    /// Validate, then assemble a stopped renderer.
    pub fn build_renderer(&self) -> PathTextResult<PathRenderer> {
        self.validate()?;
        let mut renderer = PathRenderer::new(self.canvas, self.build_curve(), self.text.clone());
        renderer.set_clock(self.build_clock());
        renderer.set_direction(self.layout_direction);
        renderer.set_ribbons(RibbonComposer::new(self.ribbon.mode, self.ribbon.style));
        renderer.set_font_size(self.font_size);
        renderer.set_show_guide(self.show_guide);
        Ok(renderer)
    }
}

fn non_negative(field: &str, v: f64) -> PathTextResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(PathTextError::validation(format!(
            "{field} must be finite and non-negative, got {v}"
        )))
    }
}

fn positive(field: &str, v: f64) -> PathTextResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(PathTextError::validation(format!(
            "{field} must be finite and positive, got {v}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
