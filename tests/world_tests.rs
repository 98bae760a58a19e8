use std::cell::Cell;

use verlet_cloth::{
    Bounds, ClothConfig, ClothError, ClothWorld, ParameterSource, Parameters, Particle, Spring,
    Vec2, VerletIntegrator,
};

/// Returns a different parameter set on every read.
struct DriftingSource {
    reads: Cell<u32>,
}

impl ParameterSource for DriftingSource {
    fn snapshot(&self) -> Parameters {
        let n = self.reads.get();
        self.reads.set(n + 1);
        Parameters::new(10.0 * (n + 1) as f32, 0.5)
    }
}

#[test]
fn parameters_are_read_once_per_step() {
    let mut world = ClothWorld::new(&ClothConfig::default()).unwrap();
    let source = DriftingSource { reads: Cell::new(0) };

    world.step(&source);
    assert_eq!(source.reads.get(), 1);
    assert_eq!(world.last_parameters().unwrap().acceleration, 10.0);

    world.step(&source);
    assert_eq!(source.reads.get(), 2);
    assert_eq!(world.last_parameters().unwrap().acceleration, 20.0);
}

#[test]
fn zero_stiffness_step_is_pure_integration() {
    let config = ClothConfig::default();
    let mut world = ClothWorld::new(&config).unwrap();
    let mut expected = world.particles().to_vec();
    let integrator = VerletIntegrator::new(config.time_step);

    for _ in 0..5 {
        world.step(&Parameters::new(30.0, 0.0));
        integrator.step(&mut expected, 30.0, &config.bounds);
    }

    assert_eq!(world.particles(), expected.as_slice());
}

#[test]
fn step_runs_configured_sweeps() {
    let config = ClothConfig::default().with_grid(5, 4).with_iterations(3);
    let mut world = ClothWorld::new(&config).unwrap();
    let metrics = world.step(&Parameters::new(0.0, 1.0)).clone();

    assert_eq!(metrics.sweeps, 3);
    assert_eq!(metrics.relaxations, world.springs().len() * 3);
    assert_eq!(world.profile().spring_count, world.springs().len());
    assert_eq!(world.profile().moved_particles, 20 - 2);
}

#[test]
fn custom_pins_are_honoured() {
    let config = ClothConfig::default().with_grid(6, 6).with_pins(vec![0, 2, 5]);
    let mut world = ClothWorld::new(&config).unwrap();
    let anchor = world.particle(2).unwrap().position;
    let corner = world.particle(5).unwrap().position;

    for _ in 0..50 {
        world.step(&Parameters::new(40.0, 1.0));
    }

    assert_eq!(world.particle(2).unwrap().position, anchor);
    assert_eq!(world.particle(5).unwrap().position, corner);
}

#[test]
fn reset_restores_build_layout() {
    let config = ClothConfig::default();
    let mut world = ClothWorld::new(&config).unwrap();
    let fresh = ClothWorld::new(&config).unwrap();

    for _ in 0..25 {
        world.step(&Parameters::new(70.0, 0.6));
    }
    assert_ne!(world.particles(), fresh.particles());

    world.reset();
    assert_eq!(world.particles(), fresh.particles());
    assert_eq!(world.frame(), 0);
    assert!(world.last_parameters().is_none());
}

#[test]
fn from_parts_checks_spring_indices() {
    let particles = vec![Particle::new(Vec2::ZERO, 1.0)];
    let err = ClothWorld::from_parts(
        particles,
        vec![Spring::new(0, 3, 1.0)],
        Bounds::new(10.0, 10.0),
        0.1,
        10,
    )
    .unwrap_err();
    assert_eq!(err, ClothError::ParticleOutOfBounds { index: 3, count: 1 });
}

#[test]
fn from_parts_checks_time_step_and_bounds() {
    let bad_step = ClothWorld::from_parts(Vec::new(), Vec::new(), Bounds::new(1.0, 1.0), -0.1, 1);
    assert!(matches!(bad_step, Err(ClothError::InvalidTimeStep(_))));

    let bad_bounds = ClothWorld::from_parts(Vec::new(), Vec::new(), Bounds::new(0.0, 1.0), 0.1, 1);
    assert!(matches!(bad_bounds, Err(ClothError::InvalidBounds { .. })));
}

#[test]
fn coincident_particles_stay_finite() {
    let particles = vec![
        Particle::new(Vec2::new(50.0, 50.0), 1.0),
        Particle::new(Vec2::new(50.0, 50.0), 1.0),
    ];
    let mut world = ClothWorld::from_parts(
        particles,
        vec![Spring::new(0, 1, 5.0)],
        Bounds::new(900.0, 600.0),
        0.1,
        10,
    )
    .unwrap();

    for _ in 0..30 {
        world.step(&Parameters::new(5.0, 1.0));
    }
    assert!(world.positions().all(|p| p.is_finite()));
}

#[test]
fn invalid_config_is_rejected() {
    let err = ClothWorld::new(&ClothConfig::default().with_spacing(-1.0)).unwrap_err();
    assert_eq!(err, ClothError::InvalidSpacing(-1.0));
    assert_eq!(err.to_string(), "grid spacing must be positive (got -1)");
}

#[test]
fn segments_follow_spring_order() {
    let world = ClothWorld::new(&ClothConfig::default().with_grid(2, 2)).unwrap();
    let segments: Vec<_> = world.segments().collect();
    let p = |i: usize| world.particle(i).unwrap().position;
    assert_eq!(
        segments,
        vec![(p(0), p(1)), (p(0), p(2)), (p(1), p(3)), (p(2), p(3))]
    );
}

#[test]
fn totals_accumulate_across_steps_and_clear_on_reset() {
    let config = ClothConfig::default().with_grid(4, 4).with_iterations(3);
    let mut world = ClothWorld::new(&config).unwrap();
    let springs = world.springs().len();

    let mut worst = 0.0_f32;
    for _ in 0..5 {
        worst = worst.max(world.step(&Parameters::new(20.0, 0.5)).max_stretch);
    }

    let totals = world.total_metrics();
    assert_eq!(totals.sweeps, 15);
    assert_eq!(totals.relaxations, springs * 15);
    assert_eq!(totals.max_stretch, worst);
    assert_eq!(world.last_metrics().sweeps, 3);

    world.reset();
    assert_eq!(world.total_metrics().sweeps, 0);
    assert_eq!(world.total_metrics().relaxations, 0);
}

#[test]
fn time_step_changes_are_validated() {
    let mut world = ClothWorld::new(&ClothConfig::default()).unwrap();

    assert_eq!(world.set_time_step(0.0), Err(ClothError::InvalidTimeStep(0.0)));
    assert!(matches!(
        world.set_time_step(f32::NAN),
        Err(ClothError::InvalidTimeStep(_))
    ));
    assert_eq!(world.time_step(), 0.1);

    assert_eq!(world.set_time_step(0.05), Ok(()));
    assert_eq!(world.time_step(), 0.05);
}

#[test]
fn iteration_changes_apply_to_next_step() {
    let mut world = ClothWorld::new(&ClothConfig::default().with_grid(3, 3)).unwrap();
    world.set_iterations(2);
    assert_eq!(world.iterations(), 2);
    assert_eq!(world.step(&Parameters::new(0.0, 1.0)).sweeps, 2);
}

#[test]
fn profile_covers_only_the_latest_step() {
    let mut world = ClothWorld::new(&ClothConfig::default().with_grid(5, 4)).unwrap();
    for _ in 0..3 {
        world.step(&Parameters::new(10.0, 0.5));
    }
    assert_eq!(world.profile().moved_particles, 20 - 2);
    assert!(world.profile().integrate_time <= world.profile().total_step_time);
    assert!(world.profile().relax_time <= world.profile().total_step_time);
}
