use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use verlet_cloth::{
    params::{ACCELERATION_RANGE, STIFFNESS_RANGE},
    ClothConfig, ClothWorld, FrameRenderer, NoopRenderer, Parameters, RenderState,
    SharedParameters,
};

const FRAMES: u32 = 240;

fn main() {
    env_logger::init();

    let mut world = ClothWorld::new(&ClothConfig::default()).expect("default cloth is valid");
    let params = SharedParameters::new(Parameters::new(0.0, STIFFNESS_RANGE.value_at(0.8)));

    // Stand-in for a slider being dragged back and forth.
    let running = Arc::new(AtomicBool::new(true));
    let ui = {
        let params = params.clone();
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let mut tick = 0u32;
            while running.load(Ordering::Relaxed) {
                let fraction = (tick % 100) as f32 / 100.0;
                params.set_acceleration(ACCELERATION_RANGE.value_at(fraction));
                tick += 1;
                thread::sleep(Duration::from_millis(2));
            }
        })
    };

    let mut state = RenderState::new();
    let mut renderer = NoopRenderer::new();
    for frame in 0..FRAMES {
        world.step(&params);
        if let Some(used) = world.last_parameters() {
            state.sync(&world, &used);
        }
        renderer.render(&state);

        if frame % 60 == 0 {
            world.profile().report();
        }
    }

    running.store(false, Ordering::Relaxed);
    ui.join().expect("ui thread panicked");

    let lowest = state.points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    println!(
        "{} frames via {}: {} points, {} segments, lowest point y = {:.2}, max stretch = {:.4}",
        renderer.frames(),
        renderer.name(),
        state.point_count(),
        state.segment_count(),
        lowest,
        world.last_metrics().max_stretch
    );
}
