//! Core types describing the cloth: particles, springs, topology and domain.

pub mod types;
pub mod particle;
pub mod spring;
pub mod grid;

pub use types::{Bounds, Vec2};
pub use particle::Particle;
pub use spring::Spring;
pub use grid::{build_particles, build_springs, grid_index};
