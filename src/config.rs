//! Configuration constants and the cloth construction config.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{core::types::Bounds, error::ClothError};

/// Vertical acceleration applied to every free particle (Y-down, screen space).
pub const DEFAULT_GRAVITY: f32 = 9.8;

/// Fixed integration step. A simulation constant, not seconds of wall-clock time.
pub const DEFAULT_TIME_STEP: f32 = 0.1;

/// Number of relaxation sweeps over all springs per step.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 10;

/// Default number of particles along a row.
pub const DEFAULT_GRID_COLUMNS: usize = 15;

/// Default number of rows.
pub const DEFAULT_GRID_ROWS: usize = 20;

/// Distance between neighbouring particles at build time.
pub const DEFAULT_GRID_SPACING: f32 = 20.0;

/// Position of particle (0, 0).
pub const DEFAULT_GRID_ORIGIN: [f32; 2] = [350.0, 40.0];

/// Width of the simulation domain used by the boundary rule.
pub const DEFAULT_DOMAIN_WIDTH: f32 = 900.0;

/// Height of the simulation domain used by the boundary rule.
pub const DEFAULT_DOMAIN_HEIGHT: f32 = 600.0;

/// Mass assigned to each particle. Carried but not used by the integrator.
pub const DEFAULT_PARTICLE_MASS: f32 = 1.0;

/// Frame budget used when warning about slow steps (60 FPS).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;

/// Everything needed to build a [`ClothWorld`](crate::world::ClothWorld).
///
/// # Builder Pattern
/// ```
/// use verlet_cloth::config::ClothConfig;
///
/// let config = ClothConfig::default()
///     .with_grid(8, 6)
///     .with_spacing(10.0)
///     .with_iterations(4);
/// assert_eq!(config.pins, vec![0, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    pub columns: usize,
    pub rows: usize,
    pub spacing: f32,
    pub origin: Vec2,
    pub bounds: Bounds,
    pub time_step: f32,
    pub iterations: u32,
    pub gravity: f32,
    pub particle_mass: f32,
    /// Flattened indices of the particles held fixed for the whole run.
    pub pins: Vec<usize>,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
            spacing: DEFAULT_GRID_SPACING,
            origin: Vec2::from_array(DEFAULT_GRID_ORIGIN),
            bounds: Bounds::new(DEFAULT_DOMAIN_WIDTH, DEFAULT_DOMAIN_HEIGHT),
            time_step: DEFAULT_TIME_STEP,
            iterations: DEFAULT_SOLVER_ITERATIONS,
            gravity: DEFAULT_GRAVITY,
            particle_mass: DEFAULT_PARTICLE_MASS,
            pins: corner_pins(DEFAULT_GRID_COLUMNS),
        }
    }
}

impl ClothConfig {
    /// Sets the grid size and re-derives the default pins (both top corners).
    pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self.pins = corner_pins(columns);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_particle_mass(mut self, mass: f32) -> Self {
        self.particle_mass = mass;
        self
    }

    /// Replaces the pin set. Duplicates are harmless.
    pub fn with_pins(mut self, pins: Vec<usize>) -> Self {
        self.pins = pins;
        self
    }

    pub fn particle_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Checks the config before any particle is allocated.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ClothError::InvalidGridDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ClothError::InvalidSpacing(self.spacing));
        }
        if !self.bounds.is_valid() {
            return Err(ClothError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ClothError::InvalidTimeStep(self.time_step));
        }
        let count = self.particle_count();
        if let Some(&index) = self.pins.iter().find(|&&index| index >= count) {
            return Err(ClothError::ParticleOutOfBounds { index, count });
        }
        Ok(())
    }
}

fn corner_pins(columns: usize) -> Vec<usize> {
    match columns {
        0 => Vec::new(),
        1 => vec![0],
        n => vec![0, n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fifteen_by_twenty_with_corner_pins() {
        let config = ClothConfig::default();
        assert_eq!(config.particle_count(), 300);
        assert_eq!(config.pins, vec![0, 14]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn single_column_pins_once() {
        let config = ClothConfig::default().with_grid(1, 4);
        assert_eq!(config.pins, vec![0]);
    }

    #[test]
    fn rejects_out_of_range_pin() {
        let config = ClothConfig::default().with_grid(3, 3).with_pins(vec![0, 9]);
        assert_eq!(
            config.validate(),
            Err(ClothError::ParticleOutOfBounds { index: 9, count: 9 })
        );
    }

    #[test]
    fn rejects_empty_grid_and_bad_step() {
        assert!(matches!(
            ClothConfig::default().with_grid(0, 5).validate(),
            Err(ClothError::InvalidGridDimensions { .. })
        ));
        assert!(matches!(
            ClothConfig::default().with_time_step(0.0).validate(),
            Err(ClothError::InvalidTimeStep(_))
        ));
        assert!(matches!(
            ClothConfig::default().with_spacing(f32::NAN).validate(),
            Err(ClothError::InvalidSpacing(_))
        ));
    }
}
