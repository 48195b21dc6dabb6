/// Advance width and vertical extents of one glyph, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl GlyphMetrics {
    /// Baseline shift (along the glyph's local y axis, y down) that centres the ink on the path.
    pub fn centering_offset(&self) -> f64 {
        (self.ascent - self.descent) / 2.0
    }
}

/// Font-metrics collaborator. The engine only asks for per-character measurements.
pub trait TextMetrics {
    fn measure(&self, ch: char) -> GlyphMetrics;
}

impl<F> TextMetrics for F
where
    F: Fn(char) -> GlyphMetrics,
{
    fn measure(&self, ch: char) -> GlyphMetrics {
        self(ch)
    }
}

/// Em-proportional metrics for a fixed font size; every glyph shares the same box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FixedMetrics {
    pub font_size: f64,
    pub advance_em: f64,
    pub ascent_em: f64,
    pub descent_em: f64,
}

impl FixedMetrics {
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            font_size: 32.0,
            advance_em: 0.6,
            ascent_em: 0.72,
            descent_em: 0.0,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn measure(&self, ch: char) -> GlyphMetrics {
        if ch.is_whitespace() {
            return GlyphMetrics {
                width: self.advance_em * self.font_size,
                ascent: 0.0,
                descent: 0.0,
            };
        }
        GlyphMetrics {
            width: self.advance_em * self.font_size,
            ascent: self.ascent_em * self.font_size,
            descent: self.descent_em * self.font_size,
        }
    }
}
