#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{particle::Particle, types::Bounds};

/// Integrator responsible for stepping free particles forward one fixed step.
#[derive(Debug, Clone)]
pub struct VerletIntegrator {
    pub dt: f32,
    parallel: bool,
}

impl VerletIntegrator {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            parallel: false,
        }
    }

    /// Particles are independent during integration, so the parallel pass
    /// produces the same bits as the sequential one. Ignored without the
    /// `parallel` feature.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Integrates every non-pinned particle with the given lateral acceleration.
    /// Returns how many particles moved.
    pub fn step(&self, particles: &mut [Particle], lateral_acceleration: f32, bounds: &Bounds) -> usize {
        if self.parallel() {
            return self.step_parallel(particles, lateral_acceleration, bounds);
        }
        self.step_sequential(particles, lateral_acceleration, bounds)
    }

    fn step_sequential(&self, particles: &mut [Particle], lateral_acceleration: f32, bounds: &Bounds) -> usize {
        let mut moved = 0;
        for particle in particles.iter_mut().filter(|p| !p.is_pinned()) {
            particle.integrate(self.dt, lateral_acceleration, bounds);
            moved += 1;
        }
        moved
    }

    #[cfg(feature = "parallel")]
    fn step_parallel(&self, particles: &mut [Particle], lateral_acceleration: f32, bounds: &Bounds) -> usize {
        let dt = self.dt;
        particles
            .par_iter_mut()
            .filter(|p| !p.is_pinned())
            .map(|p| p.integrate(dt, lateral_acceleration, bounds))
            .count()
    }

    #[cfg(not(feature = "parallel"))]
    fn step_parallel(&self, particles: &mut [Particle], lateral_acceleration: f32, bounds: &Bounds) -> usize {
        self.step_sequential(particles, lateral_acceleration, bounds)
    }
}
