//! Simulation dynamics: Verlet integration and spring relaxation.

pub mod integrator;
pub mod solver;

pub use integrator::VerletIntegrator;
pub use solver::{RelaxationSolver, SolverStepMetrics};
