//! Particle emission
//!
//! Emitters accumulate elapsed time and, once their period has passed, fire a
//! row of three particles across the jet direction.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{EMITTER_SPREAD, SUPPORT_RADIUS, SolverParams, WORLD_SCALE};
use crate::core::{Emitter, Particle};
use crate::math::{Real, perpendicular, scale_and_add};

/// Particles per emission event
pub const JET_WIDTH: usize = 3;

/// Runs every emitter for `dt` seconds and returns how many particles were spawned.
pub fn emit_particles<R: Rng>(
    emitters: &mut [Emitter],
    particles: &mut Vec<Particle>,
    params: &SolverParams,
    rng: &mut R,
    dt: Real,
) -> usize {
    let before = particles.len();

    for emitter in emitters.iter_mut() {
        if emitter.tick(dt) && params.allows_emission(particles.len()) {
            spawn_jet(emitter, particles, rng);
            emitter.timer = 0.0;
        }
    }

    particles.len() - before
}

/// Spawns one jet at offsets `{-0.8, 0, 0.8} * h` along the perpendicular of the jet direction.
pub fn spawn_jet<R: Rng>(emitter: &mut Emitter, particles: &mut Vec<Particle>, rng: &mut R) {
    let direction = emitter.advance_direction();
    let jet = direction * emitter.strength;
    let across = perpendicular(direction);
    let amplitude = emitter.jitter_amplitude();

    for step in -1..=1 {
        let offset = EMITTER_SPREAD * step as Real * SUPPORT_RADIUS;
        let position = scale_and_add(emitter.position, across, offset);
        let jitter = Vec2::new(
            rng.random_range(-amplitude..=amplitude),
            rng.random_range(-amplitude..=amplitude),
        );

        particles.push(Particle::new(position, (jet + jitter) * WORLD_SCALE, emitter.color));
    }
}
