//! Verlet particles: position plus one step of history, no explicit velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{config::DEFAULT_GRAVITY, core::types::Bounds};

/// A point mass integrated with Störmer–Verlet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    /// Position one integration step ago.
    pub previous: Vec2,
    /// `x` holds the lateral acceleration of the last step, `y` is gravity.
    pub acceleration: Vec2,
    pub mass: f32,
    pinned: bool,
}

impl Particle {
    /// A free particle at rest at `position`.
    pub fn new(position: Vec2, mass: f32) -> Self {
        Self {
            position,
            previous: position,
            acceleration: Vec2::new(0.0, DEFAULT_GRAVITY),
            mass,
            pinned: false,
        }
    }

    /// A particle that neither integrates nor yields to springs.
    pub fn pinned(position: Vec2) -> Self {
        Self {
            pinned: true,
            ..Self::new(position, 1.0)
        }
    }

    pub fn with_previous(mut self, previous: Vec2) -> Self {
        self.previous = previous;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.acceleration.y = gravity;
        self
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Pins in place. History is collapsed so the particle carries no motion.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.previous = self.position;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Displacement over the last step.
    pub fn displacement(&self) -> Vec2 {
        self.position - self.previous
    }

    /// Advances one step:
    /// `next = 2 * position - previous + (lateral_acceleration, gravity) * dt²`.
    ///
    /// If `next` leaves the domain on an axis, position and history are
    /// swapped on that axis only. The particle goes back to where it was and
    /// its motion on that axis reverses.
    pub fn integrate(&mut self, dt: f32, lateral_acceleration: f32, bounds: &Bounds) {
        if self.pinned {
            return;
        }

        self.acceleration.x = lateral_acceleration;
        let next = 2.0 * self.position - self.previous + self.acceleration * (dt * dt);
        self.previous = self.position;
        self.position = next;

        if bounds.exceeds_x(self.position.x) {
            std::mem::swap(&mut self.position.x, &mut self.previous.x);
        }
        if bounds.exceeds_y(self.position.y) {
            std::mem::swap(&mut self.position.y, &mut self.previous.y);
        }
    }
}
