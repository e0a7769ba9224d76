use crate::{
    error::{OnduleError, OnduleResult},
    math::{inverse_lerp, inverse_lerp_clamped, lerp},
};

/// One side of an easing channel: the resting value outside the viewport
/// and the progress window over which it ramps toward the intersect value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Zone {
    pub value: f64,
    pub start_threshold: f64,
    pub stop_threshold: f64,
}

impl Zone {
    pub fn new(value: f64, start_threshold: f64, stop_threshold: f64) -> Self {
        Self {
            value,
            start_threshold,
            stop_threshold,
        }
    }
}

/// Three-zone piecewise-linear mapping from element progress to an output
/// value (translation, rotation or opacity).
///
/// `before` is driven by the element's top-edge progress (entering from
/// below), `after` by the bottom-edge progress (leaving at the top);
/// between the two windows the channel holds `at_intersect`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EasingChannel {
    pub before: Zone,
    pub at_intersect: f64,
    pub after: Zone,
}

impl EasingChannel {
    /// Branch order is significant and deliberately unvalidated:
    /// overlapping or inverted thresholds resolve first-match-wins, which
    /// can jump discontinuously.
    pub fn evaluate(&self, top_progress: f64, bottom_progress: f64) -> f64 {
        if top_progress < self.before.start_threshold {
            return self.before.value;
        }
        if top_progress < self.before.stop_threshold {
            let t = inverse_lerp(
                self.before.start_threshold,
                self.before.stop_threshold,
                top_progress,
            );
            return lerp(self.before.value, self.at_intersect, t);
        }
        if bottom_progress > self.after.stop_threshold {
            return self.after.value;
        }
        if bottom_progress > self.after.start_threshold {
            let t = inverse_lerp(
                self.after.start_threshold,
                self.after.stop_threshold,
                bottom_progress,
            );
            return lerp(self.at_intersect, self.after.value, t);
        }
        self.at_intersect
    }

    pub fn validate(&self) -> OnduleResult<()> {
        let values = [
            self.before.value,
            self.before.start_threshold,
            self.before.stop_threshold,
            self.at_intersect,
            self.after.value,
            self.after.start_threshold,
            self.after.stop_threshold,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(OnduleError::channel("channel values must be finite"));
        }
        Ok(())
    }
}

/// Clamped two-point ramp: progress through a threshold window mapped
/// linearly from `from` to `to`. The single-sided variant used by the
/// banner, portrait and partner effects.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    pub from: f64,
    pub to: f64,
    pub start_threshold: f64,
    pub stop_threshold: f64,
}

impl Ramp {
    /// Progress through the window, clamped to [0,1].
    pub fn progress(&self, input: f64) -> f64 {
        inverse_lerp_clamped(self.start_threshold, self.stop_threshold, input)
    }

    pub fn evaluate(&self, input: f64) -> f64 {
        lerp(self.from, self.to, self.progress(input))
    }

    /// Same ramp with both thresholds shifted. Index staggering.
    pub fn offset(&self, delta: f64) -> Self {
        Self {
            start_threshold: self.start_threshold + delta,
            stop_threshold: self.stop_threshold + delta,
            ..*self
        }
    }

    pub fn validate(&self) -> OnduleResult<()> {
        let values = [self.from, self.to, self.start_threshold, self.stop_threshold];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(OnduleError::channel("ramp values must be finite"));
        }
        Ok(())
    }
}
