//! Errors raised while building a cloth. Stepping never fails.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// The grid needs at least one column and one row.
    InvalidGridDimensions { columns: usize, rows: usize },
    /// Spacing must be positive and finite.
    InvalidSpacing(f32),
    /// Domain width and height must be positive and finite.
    InvalidBounds { width: f32, height: f32 },
    /// The fixed time step must be positive and finite.
    InvalidTimeStep(f32),
    /// A spring endpoint or pin refers to a particle that does not exist.
    ParticleOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { columns, rows } => {
                write!(f, "grid must be at least 1x1 (got {columns}x{rows})")
            }
            ClothError::InvalidSpacing(spacing) => {
                write!(f, "grid spacing must be positive (got {spacing})")
            }
            ClothError::InvalidBounds { width, height } => {
                write!(f, "domain bounds must be positive (got {width}x{height})")
            }
            ClothError::InvalidTimeStep(dt) => {
                write!(f, "time step must be positive (got {dt})")
            }
            ClothError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {index} out of bounds (count: {count})")
            }
        }
    }
}

impl std::error::Error for ClothError {}
