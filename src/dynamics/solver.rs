use crate::core::{particle::Particle, spring::Spring};

/// Counters describing the last relaxation pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SolverStepMetrics {
    pub sweeps: u32,
    pub relaxations: usize,
    /// Largest `|current - rest|` over all springs after the final sweep.
    pub max_stretch: f32,
}

impl SolverStepMetrics {
    /// Folds another step into a running total.
    pub fn merge(&mut self, other: &Self) {
        self.sweeps += other.sweeps;
        self.relaxations += other.relaxations;
        self.max_stretch = self.max_stretch.max(other.max_stretch);
    }
}

/// Gauss-Seidel relaxation over a spring list.
///
/// Each spring sees the positions written by the springs before it in the
/// same sweep. Springs are always visited in slice order; a Jacobi or
/// parallel sweep would converge differently and is deliberately not offered.
#[derive(Debug, Clone)]
pub struct RelaxationSolver {
    pub iterations: u32,
}

impl RelaxationSolver {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// One pass over every spring in order.
    pub fn sweep(springs: &[Spring], particles: &mut [Particle], stiffness: f32) {
        for spring in springs {
            spring.relax(particles, stiffness);
        }
    }

    /// Runs exactly `iterations` sweeps with a single stiffness value.
    pub fn solve(&self, springs: &[Spring], particles: &mut [Particle], stiffness: f32) -> SolverStepMetrics {
        for _ in 0..self.iterations {
            Self::sweep(springs, particles, stiffness);
        }

        let particles: &[Particle] = particles;
        let max_stretch = springs
            .iter()
            .map(|s| s.stretch(particles).abs())
            .fold(0.0_f32, f32::max);

        SolverStepMetrics {
            sweeps: self.iterations,
            relaxations: springs.len() * self.iterations as usize,
            max_stretch,
        }
    }
}
