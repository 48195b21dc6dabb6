use std::f64::consts::PI;

/// Symmetric ease-in-out curves used by pulse animation. None overshoot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InOutSine,
    InOutQuad,
    InOutCubic,
    InOutQuart,
    InOutQuint,
}

/// Lower bounds of the `[0, 1]` ease slider bands, in ascending order.
pub const PULSE_EASE_BANDS: [(f64, Ease); 6] = [
    (0.0, Ease::Linear),
    (0.15, Ease::InOutSine),
    (0.35, Ease::InOutQuad),
    (0.55, Ease::InOutCubic),
    (0.75, Ease::InOutQuart),
    (0.9, Ease::InOutQuint),
];

impl Ease {
    /// Pick the curve for a slider value by thresholding it against [`PULSE_EASE_BANDS`].
    pub fn from_slider(ease: f64) -> Self {
        let ease = if ease.is_nan() { 0.0 } else { ease };
        PULSE_EASE_BANDS
            .iter()
            .rev()
            .find(|(lower, _)| ease >= *lower)
            .map_or(Self::Linear, |&(_, e)| e)
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InOutQuad => in_out_pow(t, 2),
            Self::InOutCubic => in_out_pow(t, 3),
            Self::InOutQuart => in_out_pow(t, 4),
            Self::InOutQuint => in_out_pow(t, 5),
        }
    }
}

fn in_out_pow(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
