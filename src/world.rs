use std::time::Instant;

use glam::Vec2;

use crate::{
    config::{ClothConfig, DEFAULT_FRAME_BUDGET_MS},
    core::{
        grid::{build_particles, build_springs},
        particle::Particle,
        spring::Spring,
        types::Bounds,
    },
    dynamics::{
        integrator::VerletIntegrator,
        solver::{RelaxationSolver, SolverStepMetrics},
    },
    error::ClothError,
    params::{ParameterSource, Parameters},
    utils::{
        logging::{ScopedTimer, warn_if_frame_budget_exceeded},
        profiling::{ScopedTimer as ProfileTimer, StepProfiler},
    },
};

/// Owns the cloth state and runs one frame at a time.
///
/// A step is: snapshot parameters, integrate free particles, then run the
/// configured number of relaxation sweeps. Readers use [`positions`] and
/// [`segments`] between steps.
///
/// [`positions`]: ClothWorld::positions
/// [`segments`]: ClothWorld::segments
#[derive(Debug, Clone)]
pub struct ClothWorld {
    particles: Vec<Particle>,
    springs: Vec<Spring>,
    initial: Vec<Particle>,
    integrator: VerletIntegrator,
    solver: RelaxationSolver,
    bounds: Bounds,
    frame: u64,
    frame_budget_ms: f32,
    last_parameters: Option<Parameters>,
    last_metrics: SolverStepMetrics,
    total_metrics: SolverStepMetrics,
    profile: StepProfiler,
}

impl ClothWorld {
    /// Builds the rectangular cloth described by `config`.
    pub fn new(config: &ClothConfig) -> Result<Self, ClothError> {
        let particles = build_particles(config)?;
        let springs = build_springs(&particles, config.columns, config.rows)?;
        log::debug!(
            "built {}x{} cloth: {} particles, {} springs, {} pinned",
            config.columns,
            config.rows,
            particles.len(),
            springs.len(),
            particles.iter().filter(|p| p.is_pinned()).count()
        );
        Ok(Self::assemble(
            particles,
            springs,
            config.bounds,
            config.time_step,
            config.iterations,
        ))
    }

    /// Builds a world from an arbitrary mesh. Springs are relaxed in the
    /// order given.
    pub fn from_parts(
        particles: Vec<Particle>,
        springs: Vec<Spring>,
        bounds: Bounds,
        time_step: f32,
        iterations: u32,
    ) -> Result<Self, ClothError> {
        if !bounds.is_valid() {
            return Err(ClothError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ClothError::InvalidTimeStep(time_step));
        }
        let count = particles.len();
        for spring in &springs {
            let (a, b) = spring.endpoints();
            if let Some(index) = [a, b].into_iter().find(|&i| i >= count) {
                return Err(ClothError::ParticleOutOfBounds { index, count });
            }
        }
        Ok(Self::assemble(particles, springs, bounds, time_step, iterations))
    }

    fn assemble(
        particles: Vec<Particle>,
        springs: Vec<Spring>,
        bounds: Bounds,
        time_step: f32,
        iterations: u32,
    ) -> Self {
        Self {
            initial: particles.clone(),
            particles,
            springs,
            integrator: VerletIntegrator::new(time_step),
            solver: RelaxationSolver::new(iterations),
            bounds,
            frame: 0,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            last_parameters: None,
            last_metrics: SolverStepMetrics::default(),
            total_metrics: SolverStepMetrics::default(),
            profile: StepProfiler::default(),
        }
    }

    /// Advances one frame, reading `source` exactly once.
    pub fn step<S>(&mut self, source: &S) -> &SolverStepMetrics
    where
        S: ParameterSource + ?Sized,
    {
        let parameters = source.snapshot();
        self.step_with(parameters)
    }

    /// Advances one frame with an already-snapshotted parameter set.
    pub fn step_with(&mut self, parameters: Parameters) -> &SolverStepMetrics {
        let _span = ScopedTimer::new("cloth::step");
        let started = Instant::now();
        self.profile.reset();

        {
            let _timer = ProfileTimer::new(&mut self.profile.integrate_time);
            self.profile.moved_particles =
                self.integrator
                    .step(&mut self.particles, parameters.acceleration, &self.bounds);
        }

        let metrics = {
            let _timer = ProfileTimer::new(&mut self.profile.relax_time);
            self.solver
                .solve(&self.springs, &mut self.particles, parameters.stiffness)
        };

        self.profile.particle_count = self.particles.len();
        self.profile.spring_count = self.springs.len();
        self.profile.total_step_time = started.elapsed();
        warn_if_frame_budget_exceeded(self.profile.total_step_time, self.frame_budget_ms);

        self.frame += 1;
        self.last_parameters = Some(parameters);
        self.total_metrics.merge(&metrics);
        self.last_metrics = metrics;
        &self.last_metrics
    }

    /// Puts every particle back where it was built. Springs are unchanged.
    pub fn reset(&mut self) {
        self.particles.clone_from(&self.initial);
        self.frame = 0;
        self.last_parameters = None;
        self.last_metrics = SolverStepMetrics::default();
        self.total_metrics = SolverStepMetrics::default();
        self.profile.reset();
        log::debug!("cloth reset to initial layout");
    }

    /// Changes the fixed step. Rejected under the same rule as construction.
    pub fn set_time_step(&mut self, time_step: f32) -> Result<(), ClothError> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ClothError::InvalidTimeStep(time_step));
        }
        self.integrator.dt = time_step;
        Ok(())
    }

    /// Sweeps per step. Zero leaves springs unrelaxed.
    pub fn set_iterations(&mut self, iterations: u32) {
        self.solver.iterations = iterations;
    }

    pub fn iterations(&self) -> u32 {
        self.solver.iterations
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    pub fn set_frame_budget_ms(&mut self, budget_ms: f32) {
        self.frame_budget_ms = budget_ms;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn time_step(&self) -> f32 {
        self.integrator.dt
    }

    /// Number of completed steps since construction or the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The snapshot the last step ran with.
    pub fn last_parameters(&self) -> Option<Parameters> {
        self.last_parameters
    }

    pub fn last_metrics(&self) -> &SolverStepMetrics {
        &self.last_metrics
    }

    /// Sweeps and relaxations summed over every step since construction or
    /// the last reset; `max_stretch` is the worst seen in any of them.
    pub fn total_metrics(&self) -> &SolverStepMetrics {
        &self.total_metrics
    }

    pub fn profile(&self) -> &StepProfiler {
        &self.profile
    }

    /// Particle positions in index order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    /// Spring endpoint positions in relaxation order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = (Vec2, Vec2)> + '_ {
        self.springs.iter().map(|s| {
            let (a, b) = s.endpoints();
            (self.particles[a].position, self.particles[b].position)
        })
    }
}
