use serde::{Deserialize, Serialize};

/// Common math types re-exported for convenience.
pub use glam::Vec2;

/// Rectangular simulation domain `[0, width] x [0, height]`.
///
/// Walls are inclusive: a coordinate equal to `width` is still inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn contains_x(&self, x: f32) -> bool {
        (0.0..=self.width).contains(&x)
    }

    pub fn contains_y(&self, y: f32) -> bool {
        (0.0..=self.height).contains(&y)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }

    /// True when `x` has left the domain through the left or right wall.
    /// NaN never counts as outside.
    pub fn exceeds_x(&self, x: f32) -> bool {
        x < 0.0 || x > self.width
    }

    /// True when `y` has left the domain through the top or bottom wall.
    pub fn exceeds_y(&self, y: f32) -> bool {
        y < 0.0 || y > self.height
    }
}
