use bevy::prelude::*;

use crate::core::Particle;
use crate::math::Vector;

/// Removes, in one pass, every particle strictly outside `[min, max]` on either
/// axis. Returns the number removed.
pub fn remove_out_of_bounds(particles: &mut Vec<Particle>, min: Vector, max: Vector) -> usize {
    let before = particles.len();

    particles.retain(|particle| {
        if !particle.is_finite() {
            warn!("dropping non-finite particle at {:?}", particle.position);
            return false;
        }

        let p = particle.position;
        !(p.x < min.x || p.y < min.y || p.x > max.x || p.y > max.y)
    });

    before - particles.len()
}
