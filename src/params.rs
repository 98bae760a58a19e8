//! Live-tunable parameters and the sources that supply them.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Control range for lateral acceleration.
pub const ACCELERATION_RANGE: ParameterRange = ParameterRange::new(0.0, 100.0);

/// Control range for spring stiffness.
pub const STIFFNESS_RANGE: ParameterRange = ParameterRange::new(0.0, 1.0);

/// Control range for the rendered ball size.
pub const BALL_SIZE_RANGE: ParameterRange = ParameterRange::new(20.0, 200.0);

/// Values read once at the start of every step.
///
/// Nothing here is clamped; out-of-range values reach the physics as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Horizontal acceleration applied to every free particle.
    pub acceleration: f32,
    /// Relaxation stiffness, nominally in `[0, 1]`.
    pub stiffness: f32,
    /// Only used by renderers.
    pub ball_size: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            acceleration: 0.0,
            stiffness: 0.0,
            ball_size: BALL_SIZE_RANGE.max,
        }
    }
}

impl Parameters {
    pub fn new(acceleration: f32, stiffness: f32) -> Self {
        Self {
            acceleration,
            stiffness,
            ..Self::default()
        }
    }

    pub fn with_ball_size(mut self, ball_size: f32) -> Self {
        self.ball_size = ball_size;
        self
    }
}

/// Anything that can hand the simulation a consistent parameter set.
pub trait ParameterSource {
    /// Called exactly once per step.
    fn snapshot(&self) -> Parameters;
}

impl ParameterSource for Parameters {
    fn snapshot(&self) -> Parameters {
        *self
    }
}

/// Parameters shared between a UI thread and the simulation thread.
///
/// Clones are handles to the same values. Writers may update at any time;
/// a running step keeps the snapshot it took.
#[derive(Debug, Clone, Default)]
pub struct SharedParameters {
    inner: Arc<RwLock<Parameters>>,
}

impl SharedParameters {
    pub fn new(initial: Parameters) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn set(&self, parameters: Parameters) {
        *self.inner.write() = parameters;
    }

    pub fn set_acceleration(&self, acceleration: f32) {
        self.inner.write().acceleration = acceleration;
    }

    pub fn set_stiffness(&self, stiffness: f32) {
        self.inner.write().stiffness = stiffness;
    }

    pub fn set_ball_size(&self, ball_size: f32) {
        self.inner.write().ball_size = ball_size;
    }

    /// Applies several edits under one write lock.
    pub fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut Parameters),
    {
        let mut guard = self.inner.write();
        edit(&mut guard);
    }
}

impl ParameterSource for SharedParameters {
    fn snapshot(&self) -> Parameters {
        *self.inner.read()
    }
}

/// Closed interval a control maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
}

impl ParameterRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Value at `fraction` of the way from `min` to `max`, clamped.
    pub fn value_at(&self, fraction: f32) -> f32 {
        self.clamp(self.min + fraction * (self.max - self.min))
    }

    /// Where `value` sits within the range; `0.0` for an empty range.
    pub fn fraction_of(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }
}
