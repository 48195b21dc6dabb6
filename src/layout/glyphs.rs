use crate::{
    curve::PathGeometry,
    foundation::{
        core::{Affine, Degrees, Direction, PathPoint, Vec2},
        math::wrap_distance,
    },
    render::metrics::TextMetrics,
};

/// Convert the animation clock's degree offset into a distance along a path of `total_length`.
///
/// A full turn (360°) is one full path length, for every path family.
pub fn offset_to_distance(offset: Degrees, total_length: f64) -> f64 {
    offset.turns() * total_length
}

/// One character assigned to a path distance. Recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CharacterSlot {
    pub ch: char,
    pub index: usize,
    /// Final distance along the path, after wrapping and direction mirroring.
    pub distance: f64,
    /// `distance / total_length`, in `[0, 1]`.
    pub normalized_position: f64,
}

/// A slot resolved to a point on the path and a glyph transform.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GlyphPlacement {
    pub ch: char,
    pub index: usize,
    pub distance: f64,
    pub point: PathPoint,
    pub width: f64,
    pub transform: Affine,
}

/// Evenly spaced characters along one path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    slots: Vec<CharacterSlot>,
    total_length: f64,
    spacing: f64,
    offset_distance: f64,
    direction: Direction,
}

impl TextLayout {
    /// Spread `text` over `curve` with `offset_distance` already converted to path units.
    ///
    /// Empty text or a zero-length path yields an empty layout.
    pub fn compute<C: PathGeometry + ?Sized>(
        text: &str,
        curve: &C,
        offset_distance: f64,
        direction: Direction,
    ) -> Self {
        let total_length = curve.total_length();
        let count = text.chars().count();
        if count == 0 || total_length.is_nan() || total_length <= 0.0 {
            return Self {
                total_length: total_length.max(0.0),
                offset_distance,
                direction,
                ..Self::default()
            };
        }

        let spacing = total_length / count as f64;
        let slots = text
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                let forward = wrap_distance(index as f64 * spacing + offset_distance, total_length);
                let distance = match direction {
                    Direction::Clockwise => forward,
                    Direction::CounterClockwise => total_length - forward,
                };
                CharacterSlot {
                    ch,
                    index,
                    distance,
                    normalized_position: distance / total_length,
                }
            })
            .collect();

        Self {
            slots,
            total_length,
            spacing,
            offset_distance,
            direction,
        }
    }

    pub fn slots(&self) -> &[CharacterSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn offset_distance(&self) -> f64 {
        self.offset_distance
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Unwrapped forward distance of character `index` (before the modulus and mirroring).
    pub fn raw_distance(&self, index: usize) -> f64 {
        index as f64 * self.spacing + self.offset_distance
    }

    /// Resolve every slot against `curve`, centring each glyph on its path point.
    pub fn resolve<C, M>(&self, curve: &C, metrics: &M) -> Vec<GlyphPlacement>
    where
        C: PathGeometry + ?Sized,
        M: TextMetrics + ?Sized,
    {
        self.slots
            .iter()
            .map(|slot| {
                let point = curve.point_at(slot.distance);
                let m = metrics.measure(slot.ch);
                let transform = Affine::translate(point.pos.to_vec2())
                    * Affine::rotate(point.angle)
                    * Affine::translate(Vec2::new(-m.width / 2.0, m.centering_offset()));
                GlyphPlacement {
                    ch: slot.ch,
                    index: slot.index,
                    distance: slot.distance,
                    point,
                    width: m.width,
                    transform,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/glyphs.rs"]
mod tests;
