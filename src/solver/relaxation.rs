//! Double density relaxation
//!
//! Pressure from the density deviation and near-pressure from the near
//! density produce equal and opposite displacements for every neighbor pair.
//! They are stored as pending displacements and applied at the start of the
//! next frame.

use crate::config::{SUPPORT_RADIUS, SolverParams};
use crate::core::{Particle, SpatialHashGrid, neighbor_pair};
use crate::math::Real;

/// `(pressure, near_pressure)` of a particle
#[inline]
pub fn pressures(particle: &Particle, params: &SolverParams) -> (Real, Real) {
    (
        params.stiffness * (particle.density - params.rest_density),
        params.near_stiffness * particle.near_density,
    )
}

pub fn double_density_relaxation(
    particles: &mut [Particle],
    grid: &SpatialHashGrid,
    params: &SolverParams,
) {
    let half_step2 = 0.5 * params.frame_step * params.frame_step;

    for i in 0..particles.len() {
        let (pressure, near_pressure) = pressures(&particles[i], params);
        let position_i = particles[i].position;

        for j in grid.neighbors_of(i, position_i) {
            let Some(pair) = neighbor_pair(position_i, particles[j].position, SUPPORT_RADIUS) else {
                continue;
            };

            let a = pair.one_minus_q;
            let d = half_step2 * (pressure * a + near_pressure * a * a);
            let displacement = pair.unit * d;

            particles[i].pending_displacement += displacement;
            particles[j].pending_displacement -= displacement;
        }
    }
}
