//! Boundary between the simulation and whatever draws it.

use glam::Vec2;

use crate::{params::Parameters, world::ClothWorld};

/// Render-ready copy of the cloth, refilled in place every frame.
#[derive(Debug, Default, Clone)]
pub struct RenderState {
    pub points: Vec<Vec2>,
    pub segments: Vec<[Vec2; 2]>,
    pub ball_size: f32,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the world's current positions. Call after a step completes.
    pub fn sync(&mut self, world: &ClothWorld, parameters: &Parameters) {
        self.points.clear();
        self.points.extend(world.positions());

        self.segments.clear();
        self.segments.extend(world.segments().map(|(a, b)| [a, b]));

        self.ball_size = parameters.ball_size;
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Implemented by renderers. Only ever sees finished frames.
pub trait FrameRenderer {
    fn name(&self) -> &str;

    fn render(&mut self, state: &RenderState);
}

/// Headless renderer; counts the frames it was handed.
#[derive(Debug, Default)]
pub struct NoopRenderer {
    frames: u64,
}

impl NoopRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameRenderer for NoopRenderer {
    fn name(&self) -> &str {
        "headless-noop"
    }

    fn render(&mut self, _state: &RenderState) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClothConfig;

    #[test]
    fn sync_reuses_buffers() {
        let world = ClothWorld::new(&ClothConfig::default().with_grid(3, 3)).unwrap();
        let mut state = RenderState::new();
        let params = Parameters::default().with_ball_size(42.0);

        state.sync(&world, &params);
        state.sync(&world, &params);

        assert_eq!(state.point_count(), 9);
        assert_eq!(state.segment_count(), 12);
        assert_eq!(state.ball_size, 42.0);
        assert_eq!(state.segments[0], [state.points[0], state.points[1]]);
    }

    #[test]
    fn noop_counts_frames() {
        let mut renderer = NoopRenderer::new();
        renderer.render(&RenderState::new());
        assert_eq!(renderer.frames(), 1);
        assert_eq!(renderer.name(), "headless-noop");
    }
}
