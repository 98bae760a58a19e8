use std::time::{Duration, Instant};

/// Timing and size data for the most recent cloth step.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepProfiler {
    pub integrate_time: Duration,
    pub relax_time: Duration,
    pub total_step_time: Duration,

    pub particle_count: usize,
    pub spring_count: usize,
    pub moved_particles: usize,
}

impl StepProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_step_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "Cloth step: {} particles ({} moved), {} springs, {:.3} ms",
            self.particle_count,
            self.moved_particles,
            self.spring_count,
            self.total_step_time.as_secs_f32() * 1000.0
        );
        log::info!(
            "  Integrate: {:.3} ms ({:.1}%)",
            self.integrate_time.as_secs_f32() * 1000.0,
            (self.integrate_time.as_micros() as f32 / total_us) * 100.0
        );
        log::info!(
            "  Relax:     {:.3} ms ({:.1}%)",
            self.relax_time.as_secs_f32() * 1000.0,
            (self.relax_time.as_micros() as f32 / total_us) * 100.0
        );
    }
}

/// Adds the lifetime of the timer to `output` when dropped. The world resets
/// its profiler at the start of every step, so each slot covers one step.
pub struct ScopedTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
