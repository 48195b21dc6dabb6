use crate::{
    curve::PathGeometry,
    foundation::core::{BezPath, Direction, Point},
    layout::{glyphs::TextLayout, words::WordSpan},
    render::{metrics::TextMetrics, surface::DrawSurface},
};

/// Which overlay to draw under the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RibbonMode {
    #[default]
    None,
    /// One short band per character.
    Character,
    /// One band along the whole path.
    Path,
    /// One band per whitespace-delimited word.
    Word,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RibbonStyle {
    /// Extra path distance added beyond half the glyph advance at each end of a band.
    pub padding: f64,
    pub stroke_width: f64,
}

impl Default for RibbonStyle {
    fn default() -> Self {
        Self {
            padding: 4.0,
            stroke_width: 24.0,
        }
    }
}

/// A half-open distance interval `[start, end)` inside `[0, total_length]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PathInterval {
    pub start: f64,
    pub end: f64,
}

impl PathInterval {
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    fn mirrored(self, total_length: f64) -> Self {
        Self {
            start: total_length - self.end,
            end: total_length - self.start,
        }
    }
}

/// Sampled band geometry for one interval.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RibbonStroke {
    pub interval: PathInterval,
    pub points: Vec<Point>,
}

impl RibbonStroke {
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some((first, rest)) = self.points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
        }
        path
    }
}

/// Split an unwrapped interval into pieces that never cross the `total_length -> 0` seam.
///
/// Intervals covering the whole path collapse to `[0, total_length)`; empty pieces are dropped.
pub fn split_interval(raw_start: f64, raw_end: f64, total_length: f64) -> Vec<PathInterval> {
    if total_length <= 0.0 || raw_end <= raw_start {
        return Vec::new();
    }
    if raw_end - raw_start >= total_length {
        return vec![PathInterval {
            start: 0.0,
            end: total_length,
        }];
    }

    let start_lap = (raw_start / total_length).floor();
    let end_lap = (raw_end / total_length).floor();
    let start = raw_start - start_lap * total_length;
    let end = raw_end - end_lap * total_length;

    let pieces = if start_lap != end_lap {
        vec![
            PathInterval {
                start,
                end: total_length,
            },
            PathInterval { start: 0.0, end },
        ]
    } else {
        vec![PathInterval { start, end }]
    };
    pieces.into_iter().filter(|p| !p.is_empty()).collect()
}

/// Number of points used to sample a band spanning `span` path units.
pub fn sample_count(span: f64) -> usize {
    let by_length = (span.max(0.0) / 5.0).ceil() as usize;
    by_length.max(10)
}

/// Sample `interval` through repeated point lookups, both ends included.
pub fn sample_interval<C: PathGeometry + ?Sized>(curve: &C, interval: PathInterval) -> Vec<Point> {
    let n = sample_count(interval.len());
    (0..n)
        .map(|i| {
            let u = i as f64 / (n - 1) as f64;
            curve.point_at(interval.start + interval.len() * u).pos
        })
        .collect()
}

/// Builds ribbon overlays from a text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RibbonComposer {
    pub mode: RibbonMode,
    pub style: RibbonStyle,
}

impl RibbonComposer {
    pub fn new(mode: RibbonMode, style: RibbonStyle) -> Self {
        Self { mode, style }
    }

    pub fn compose<C, M>(
        &self,
        curve: &C,
        layout: &TextLayout,
        words: &[WordSpan],
        metrics: &M,
    ) -> Vec<RibbonStroke>
    where
        C: PathGeometry + ?Sized,
        M: TextMetrics + ?Sized,
    {
        let intervals = match self.mode {
            RibbonMode::None => Vec::new(),
            RibbonMode::Path => self.path_intervals(layout),
            RibbonMode::Character => self.character_intervals(layout, metrics),
            RibbonMode::Word => self.word_intervals(layout, words, metrics),
        };
        intervals
            .into_iter()
            .map(|interval| RibbonStroke {
                interval,
                points: sample_interval(curve, interval),
            })
            .collect()
    }

    /// Stroke each band as its own sub-path.
    pub fn draw<S: DrawSurface + ?Sized>(&self, strokes: &[RibbonStroke], surface: &mut S) {
        for stroke in strokes {
            let Some((first, rest)) = stroke.points.split_first() else {
                continue;
            };
            surface.move_to(*first);
            for p in rest {
                surface.line_to(*p);
            }
            surface.stroke(self.style.stroke_width);
        }
    }

    fn path_intervals(&self, layout: &TextLayout) -> Vec<PathInterval> {
        if layout.is_empty() {
            return Vec::new();
        }
        vec![PathInterval {
            start: 0.0,
            end: layout.total_length(),
        }]
    }

    fn character_intervals<M: TextMetrics + ?Sized>(
        &self,
        layout: &TextLayout,
        metrics: &M,
    ) -> Vec<PathInterval> {
        layout
            .slots()
            .iter()
            .flat_map(|slot| {
                let half = metrics.measure(slot.ch).width / 2.0 + self.style.padding;
                let center = layout.raw_distance(slot.index);
                place(center - half, center + half, layout)
            })
            .collect()
    }

    fn word_intervals<M: TextMetrics + ?Sized>(
        &self,
        layout: &TextLayout,
        words: &[WordSpan],
        metrics: &M,
    ) -> Vec<PathInterval> {
        if layout.is_empty() {
            return Vec::new();
        }
        let slots = layout.slots();
        words
            .iter()
            .filter(|w| w.end_char_index < slots.len())
            .flat_map(|w| {
                let first = slots[w.start_char_index].ch;
                let last = slots[w.end_char_index].ch;
                let lead = metrics.measure(first).width / 2.0 + self.style.padding;
                let tail = metrics.measure(last).width / 2.0 + self.style.padding;
                let raw_start = layout.raw_distance(w.start_char_index) - lead;
                let raw_end = layout.raw_distance(w.end_char_index) + tail;
                place(raw_start, raw_end, layout)
            })
            .collect()
    }
}

/// Split in forward space, then mirror for counter-clockwise layouts.
fn place(raw_start: f64, raw_end: f64, layout: &TextLayout) -> Vec<PathInterval> {
    let total = layout.total_length();
    let pieces = split_interval(raw_start, raw_end, total);
    match layout.direction() {
        Direction::Clockwise => pieces,
        Direction::CounterClockwise => pieces.into_iter().map(|p| p.mirrored(total)).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ribbon/compose.rs"]
mod tests;
