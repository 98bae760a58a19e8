//! Distance constraints between particle pairs.

use serde::{Deserialize, Serialize};

use crate::{core::particle::Particle, error::ClothError};

/// Lengths at or below this are treated as coincident endpoints.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Pairwise distance constraint relaxed by position projection.
///
/// The rest length is fixed at construction and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    a: usize,
    b: usize,
    rest_length: f32,
}

impl Spring {
    /// A spring with an explicit rest length. Indices are not checked here;
    /// [`ClothWorld::from_parts`](crate::world::ClothWorld::from_parts) and
    /// [`Spring::between`] do.
    ///
    /// # Panics
    ///
    /// Methods taking a particle slice panic if `a` or `b` is out of range
    /// for that slice.
    pub fn new(a: usize, b: usize, rest_length: f32) -> Self {
        Self { a, b, rest_length }
    }

    /// A spring whose rest length is the current distance between `a` and `b`.
    pub fn between(a: usize, b: usize, particles: &[Particle]) -> Result<Self, ClothError> {
        let count = particles.len();
        let pa = particles
            .get(a)
            .ok_or(ClothError::ParticleOutOfBounds { index: a, count })?;
        let pb = particles
            .get(b)
            .ok_or(ClothError::ParticleOutOfBounds { index: b, count })?;
        Ok(Self::new(a, b, pa.position.distance(pb.position)))
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// # Panics
    ///
    /// Panics if either endpoint index is out of range for `particles`.
    pub fn current_length(&self, particles: &[Particle]) -> f32 {
        particles[self.a].position.distance(particles[self.b].position)
    }

    /// Current length minus rest length. Positive when stretched.
    pub fn stretch(&self, particles: &[Particle]) -> f32 {
        self.current_length(particles) - self.rest_length
    }

    /// Pulls the endpoints toward the rest length.
    ///
    /// The full correction `stiffness * (len - rest) / len * (b - a)` is split
    /// evenly: `a` moves half of it toward `b`, `b` moves half toward `a`.
    /// A pinned endpoint keeps its half unapplied. Coincident endpoints are
    /// left untouched since the direction is undefined.
    ///
    /// A scheme that applies the full correction to each endpoint with
    /// stiffness `k` behaves like `relax` with stiffness `2 * k`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint index is out of range for `particles`.
    pub fn relax(&self, particles: &mut [Particle], stiffness: f32) {
        let delta = particles[self.b].position - particles[self.a].position;
        let length = delta.length();
        if length <= DEGENERATE_LENGTH {
            return;
        }

        let fraction = (length - self.rest_length) / length;
        let half = delta * (0.5 * stiffness * fraction);

        let a = &mut particles[self.a];
        if !a.is_pinned() {
            a.position += half;
        }
        let b = &mut particles[self.b];
        if !b.is_pinned() {
            b.position -= half;
        }
    }
}
