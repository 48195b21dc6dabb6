//! pathtext lays text out along animated paths.
//!
//! A path is a circle, a (rounded) rectangle, a frame following the canvas border, or a
//! user-drawn spline. Characters are spaced evenly by true arc length, a clock advances a degree
//! offset every frame, and optional ribbons are drawn underneath the text.
//!
//! # Pipeline overview
//!
//! 1. **Tick**: [`AnimationClock`] turns a monotonic millisecond timestamp into a [`Degrees`]
//!    offset (constant rotation, or eased pulses separated by holds).
//! 2. **Convert**: [`offset_to_distance`] maps the offset onto the active path's length.
//! 3. **Lay out**: [`TextLayout`] assigns every character a distance and resolves it through
//!    [`PathGeometry::point_at`] into a position, tangent angle and glyph transform.
//! 4. **Ribbons**: [`RibbonComposer`] turns characters, words or the whole path into stroke
//!    bands, splitting any band that crosses the start/end seam of the path.
//! 5. **Draw**: [`PathRenderer`] issues guide, ribbon and glyph calls on a [`DrawSurface`].
//!
//! The geometry, layout and animation core never fails; degenerate input yields empty output.
//! Only [`SceneConfig`] loading and validation return [`PathTextError`].
#![forbid(unsafe_code)]

mod animation;
mod curve;
mod foundation;
mod layout;
mod render;
mod ribbon;
mod scene;

pub use animation::clock::{
    AnimationClock, AnimationMode, AnimationState, LINEAR_BASE_RATE, PulseConfig,
};
pub use animation::ease::{Ease, PULSE_EASE_BANDS};
pub use curve::arclen::{ARC_LENGTH_SAMPLES, ArcLengthSample, ArcLengthTable, catmull_rom};
pub use curve::segment::{PathSegment, SegmentPath};
pub use curve::shape::{
    CircleCurve, FRAME_CORNER_RADIUS, FrameCorners, FrameCurve, RectCurve,
};
pub use curve::spline::{CurveType, SplineCurve};
pub use curve::{PathCurve, PathFamily, PathGeometry};
pub use foundation::core::{
    Affine, BezPath, Canvas, Degrees, Direction, PathPoint, Point, Vec2,
};
pub use foundation::error::{PathTextError, PathTextResult};
pub use layout::glyphs::{CharacterSlot, GlyphPlacement, TextLayout, offset_to_distance};
pub use layout::words::{WordSpan, split_words};
pub use render::metrics::{FixedMetrics, GlyphMetrics, TextMetrics};
pub use render::renderer::{FrameReport, GUIDE_STROKE_WIDTH, PathRenderer};
pub use render::surface::{DrawCmd, DrawSurface, RecordingSurface, TranslatedSurface};
pub use ribbon::compose::{
    PathInterval, RibbonComposer, RibbonMode, RibbonStroke, RibbonStyle, sample_count,
    sample_interval, split_interval,
};
pub use scene::config::{AnimationConfig, PathConfig, RibbonConfig, SceneConfig};
