use std::f64::consts::TAU;

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

/// A position on a path plus the tangent direction of travel (radians, clockwise on screen).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PathPoint {
    pub pos: Point,
    pub angle: f64,
}

impl PathPoint {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            angle,
        }
    }
}

/// Travel direction, shared by the animation clock (sign of motion) and text layout (mirroring).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Animation offset in degrees.
///
/// The clock only ever produces degrees; turning them into a path distance goes through
/// [`crate::offset_to_distance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const FULL_TURN: f64 = 360.0;

    /// Fraction of a full turn (unbounded; 720° is 2.0).
    pub fn turns(self) -> f64 {
        self.0 / Self::FULL_TURN
    }

    pub fn wrapped(self) -> Self {
        Self(self.0.rem_euclid(Self::FULL_TURN))
    }

    pub fn to_radians(self) -> f64 {
        self.turns() * TAU
    }
}

impl std::ops::Add<f64> for Degrees {
    type Output = Degrees;

    fn add(self, rhs: f64) -> Self::Output {
        Degrees(self.0 + rhs)
    }
}
