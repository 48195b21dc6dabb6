use crate::{
    animation::ease::Ease,
    foundation::core::{Degrees, Direction},
};

/// Degrees per second of linear rotation at speed 1.
pub const LINEAR_BASE_RATE: f64 = 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// Constant-rate rotation.
    #[default]
    Linear,
    /// Eased forward pulses separated by holds; never moves backwards.
    Pulse,
}

/// Pulse timing and shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Ease slider in `[0, 1]`, mapped through [`Ease::from_slider`].
    pub ease: f64,
    /// Path turns advanced per cycle (1.0 = one full path length).
    pub distance: f64,
    /// Seconds spent moving in each cycle.
    pub time: f64,
    /// Seconds spent holding at the end of each cycle.
    pub hold: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            ease: 0.5,
            distance: 0.25,
            time: 1.0,
            hold: 1.0,
        }
    }
}

impl PulseConfig {
    pub fn cycle_length(&self) -> f64 {
        self.time + self.hold
    }

    pub fn curve(&self) -> Ease {
        Ease::from_slider(self.ease)
    }

    /// Unsigned degrees travelled `elapsed_secs` after the pulse sequence started.
    ///
    /// Completed cycles accumulate `distance * 360` each; inside a cycle the eased pulse runs
    /// first and the hold keeps the cycle's end position.
    pub fn offset_at(&self, elapsed_secs: f64) -> f64 {
        let cycle = self.cycle_length();
        if !(cycle.is_finite() && cycle > 0.0) {
            return 0.0;
        }
        let step = self.distance * Degrees::FULL_TURN;
        // Cycle count and in-cycle progress share one quotient.
        let cycles = elapsed_secs.max(0.0) / cycle;
        let completed = cycles.floor();
        let progress = cycles - completed;
        let pulse_fraction = self.time / cycle;

        let eased = if pulse_fraction > 0.0 && progress <= pulse_fraction {
            self.curve().apply(progress / pulse_fraction)
        } else {
            1.0
        };
        (completed + eased) * step
    }
}

/// Everything the clock mutates per tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationState {
    pub mode: AnimationMode,
    /// The one value layout consumes. Unbounded in pulse mode.
    pub offset: Degrees,
    pub direction: Direction,
    /// Linear-mode speed multiplier.
    pub speed: f64,
    pub pulse: PulseConfig,
    pub pulse_start_ms: f64,
    pub pulse_base: Degrees,
}

/// Advances the degree offset once per frame from a monotonic millisecond clock.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    state: AnimationState,
    last_tick_ms: Option<f64>,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(
            AnimationMode::Linear,
            1.0,
            Direction::Clockwise,
            PulseConfig::default(),
        )
    }
}

impl AnimationClock {
    pub fn new(
        mode: AnimationMode,
        speed: f64,
        direction: Direction,
        pulse: PulseConfig,
    ) -> Self {
        Self {
            state: AnimationState {
                mode,
                offset: Degrees(0.0),
                direction,
                speed,
                pulse,
                pulse_start_ms: 0.0,
                pulse_base: Degrees(0.0),
            },
            last_tick_ms: None,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn offset(&self) -> Degrees {
        self.state.offset
    }

    pub fn mode(&self) -> AnimationMode {
        self.state.mode
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Switch policy. Entering pulse mode starts a cycle at `now_ms` from the current offset.
    pub fn set_mode(&mut self, mode: AnimationMode, now_ms: f64) {
        if self.state.mode == mode {
            return;
        }
        self.state.mode = mode;
        match mode {
            AnimationMode::Pulse => self.rebase_pulse(now_ms),
            AnimationMode::Linear => self.state.offset = self.state.offset.wrapped(),
        }
        self.last_tick_ms = Some(now_ms);
        tracing::debug!(?mode, offset = self.state.offset.0, "animation mode changed");
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.state.speed = speed;
    }

    pub fn set_direction(&mut self, direction: Direction, now_ms: f64) {
        if self.state.direction == direction {
            return;
        }
        self.state.direction = direction;
        if self.state.mode == AnimationMode::Pulse {
            self.rebase_pulse(now_ms);
        }
    }

    /// Replace the pulse configuration. A change of `time` or `hold` restarts the cycle.
    pub fn set_pulse(&mut self, pulse: PulseConfig, now_ms: f64) {
        let retimed = pulse.time != self.state.pulse.time || pulse.hold != self.state.pulse.hold;
        self.state.pulse = pulse;
        if retimed && self.state.mode == AnimationMode::Pulse {
            self.rebase_pulse(now_ms);
        }
    }

    /// Put the offset back to zero and forget the previous tick.
    pub fn reset(&mut self, now_ms: f64) {
        self.state.offset = Degrees(0.0);
        self.state.pulse_base = Degrees(0.0);
        self.state.pulse_start_ms = now_ms;
        self.last_tick_ms = None;
    }

    /// Continue after a pause without jumping: the gap since the last tick is not animated.
    pub fn resume(&mut self, now_ms: f64) {
        self.last_tick_ms = Some(now_ms);
        if self.state.mode == AnimationMode::Pulse {
            self.rebase_pulse(now_ms);
        }
    }

    /// Advance to `now_ms` and return the new offset.
    pub fn tick(&mut self, now_ms: f64) -> Degrees {
        let sign = self.state.direction.sign();
        match self.state.mode {
            AnimationMode::Linear => {
                let dt_secs = self
                    .last_tick_ms
                    .map_or(0.0, |last| ((now_ms - last) / 1000.0).max(0.0));
                let delta = LINEAR_BASE_RATE * self.state.speed * sign * dt_secs;
                self.state.offset = (self.state.offset + delta).wrapped();
            }
            AnimationMode::Pulse => {
                let elapsed_secs = (now_ms - self.state.pulse_start_ms) / 1000.0;
                let travelled = self.state.pulse.offset_at(elapsed_secs);
                self.state.offset = self.state.pulse_base + sign * travelled;
            }
        }
        self.last_tick_ms = Some(now_ms);
        self.state.offset
    }

    fn rebase_pulse(&mut self, now_ms: f64) {
        self.state.pulse_start_ms = now_ms;
        self.state.pulse_base = self.state.offset;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
