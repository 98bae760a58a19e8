//! Verlet Cloth – 2D cloth simulation for Rust.
//!
//! A rectangular grid of Verlet particles joined by distance springs. Each
//! frame the host hands in a [`ParameterSource`], the free particles are
//! integrated under gravity plus a lateral acceleration, and the springs are
//! relaxed with a fixed number of Gauss-Seidel sweeps. Positions are then
//! read back for drawing.
//!
//! ```
//! use verlet_cloth::{ClothConfig, ClothWorld, Parameters};
//!
//! let mut world = ClothWorld::new(&ClothConfig::default()).unwrap();
//! world.step(&Parameters::new(10.0, 0.8));
//! assert_eq!(world.frame(), 1);
//! ```

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod params;
pub mod render;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use config::ClothConfig;
pub use core::{
    particle::Particle,
    spring::Spring,
    types::Bounds,
};
pub use dynamics::{
    integrator::VerletIntegrator,
    solver::{RelaxationSolver, SolverStepMetrics},
};
pub use error::ClothError;
pub use params::{ParameterRange, ParameterSource, Parameters, SharedParameters};
pub use render::{FrameRenderer, NoopRenderer, RenderState};
pub use utils::profiling::StepProfiler;
pub use world::ClothWorld;
