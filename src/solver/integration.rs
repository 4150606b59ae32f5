//! Prediction-relaxation integration
//!
//! Positions advance from the displacement computed by last frame's
//! relaxation, and velocity is re-derived from how far the particle actually
//! moved rather than integrated from forces.

use crate::config::SolverParams;
use crate::core::Particle;
use crate::math::{inv_exact, zero_vector};

/// Applies last frame's relaxation displacement, re-derives velocity and adds gravity.
pub fn predict_velocities(particles: &mut [Particle], params: &SolverParams) {
    let step = params.frame_step;
    let inv_step = inv_exact(step);

    for particle in particles.iter_mut() {
        particle.position += particle.pending_displacement;
        particle.pending_displacement = zero_vector();

        if !particle.is_new {
            particle.velocity = (particle.position - particle.previous_position) * inv_step;
        }
        particle.is_new = false;

        particle.velocity.y += params.gravity * step;
    }
}

/// Snapshots the current position and moves every particle along its velocity.
pub fn advance_positions(particles: &mut [Particle], params: &SolverParams) {
    let step = params.frame_step;

    for particle in particles.iter_mut() {
        particle.previous_position = particle.position;
        particle.position += particle.velocity * step;
    }
}
