//! Rectangular cloth topology: particle layout and spring order.

use glam::Vec2;

use crate::{
    config::ClothConfig,
    core::{particle::Particle, spring::Spring},
    error::ClothError,
};

/// Flattened index of grid cell `(column, row)`.
pub fn grid_index(column: usize, row: usize, columns: usize) -> usize {
    column + row * columns
}

/// Builds the particle array for `config`, row by row.
///
/// Particle `(i, j)` sits at `origin + (i, j) * spacing`, at rest.
pub fn build_particles(config: &ClothConfig) -> Result<Vec<Particle>, ClothError> {
    config.validate()?;

    let mut particles = Vec::with_capacity(config.particle_count());
    for row in 0..config.rows {
        for column in 0..config.columns {
            let position =
                config.origin + Vec2::new(column as f32, row as f32) * config.spacing;
            particles.push(Particle::new(position, config.particle_mass).with_gravity(config.gravity));
        }
    }
    for &index in &config.pins {
        particles[index].pin();
    }
    Ok(particles)
}

/// Builds structural springs in relaxation order.
///
/// For each cell, row-major: the edge to the right neighbour (if any), then
/// the edge to the neighbour below (if any). The solver sweeps in exactly
/// this order, so changing it changes the simulation.
pub fn build_springs(
    particles: &[Particle],
    columns: usize,
    rows: usize,
) -> Result<Vec<Spring>, ClothError> {
    let edge_count = rows * columns.saturating_sub(1) + columns * rows.saturating_sub(1);
    let mut springs = Vec::with_capacity(edge_count);
    for row in 0..rows {
        for column in 0..columns {
            let here = grid_index(column, row, columns);
            if column + 1 < columns {
                springs.push(Spring::between(here, grid_index(column + 1, row, columns), particles)?);
            }
            if row + 1 < rows {
                springs.push(Spring::between(here, grid_index(column, row + 1, columns), particles)?);
            }
        }
    }
    Ok(springs)
}
