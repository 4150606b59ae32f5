/// Simple custom benchmarking without criterion
use std::time::Instant;

use bevy::prelude::*;
use pvfs2d::{
    FluidState, Particle, SCALED_WORLD_MAX, SCALED_WORLD_MIN, SUPPORT_RADIUS, SolverParams,
    SpatialHashGrid,
};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

/// Square block of particles at roughly rest spacing, centered in the world
fn create_test_particles(count: usize) -> Vec<Particle> {
    let side = (count as f32).sqrt().ceil() as usize;
    let spacing = SUPPORT_RADIUS * 0.5;
    let origin = Vec2::new(-(side as f32) * spacing * 0.5, 0.0);

    (0..count)
        .map(|i| {
            let position = origin + Vec2::new((i % side) as f32, (i / side) as f32) * spacing;
            Particle::new(position, Vec2::new(1.0, -2.0), Color::WHITE)
        })
        .collect()
}

fn main() {
    println!("\n=== Fluid Benchmarks ===\n");

    println!("--- Grid Rebuild ---");
    for &count in &[500, 1000, 1500, 3000] {
        let particles = create_test_particles(count);
        let mut grid = SpatialHashGrid::new(SUPPORT_RADIUS, SCALED_WORLD_MIN, SCALED_WORLD_MAX);

        time_it(&format!("rebuild (n={})", count), 100, || {
            grid.rebuild(&particles);
        });
    }

    println!("\n--- Frame Step ---");
    for &count in &[500, 1000, 1500] {
        let params = SolverParams::default().with_particle_limit(None);
        let mut state = FluidState::new(params).with_seed(0);
        for particle in create_test_particles(count) {
            state.add_particle(particle);
        }

        time_it(&format!("update (n={})", count), 50, || {
            state.update(Vec2::new(1280.0, 720.0), None, 1.0 / 60.0);
        });
    }

    println!("\n--- Default Scene ---");
    let mut state = FluidState::new(SolverParams::default()).with_default_scene().with_seed(0);
    time_it("update (default scene, 600 frames)", 600, || {
        state.update(Vec2::new(1280.0, 720.0), None, 1.0 / 60.0);
    });
    println!("particles after run: {}", state.particle_count());

    println!("\n=== Benchmark Complete ===\n");
}
