//! Viscosity impulses
//!
//! Pairwise linear + quadratic impulses along the line between particles.
//! Each impulse is applied half to each particle with opposite signs, so the
//! pass conserves momentum.

use crate::config::{SUPPORT_RADIUS, SolverParams};
use crate::core::{Particle, SpatialHashGrid, neighbor_pair};
use crate::math::Real;

/// Impulse magnitude for closing speed `u`, clamped so it never exceeds `u` itself.
#[inline]
pub fn viscosity_impulse(u: Real, one_minus_q: Real, params: &SolverParams) -> Real {
    let scale = 0.5 * params.frame_step * one_minus_q;
    if u > 0.0 {
        u.min(scale * (params.sigma * u + params.beta * u * u))
    } else {
        u.max(scale * (params.sigma * u - params.beta * u * u))
    }
}

pub fn apply_viscosity_impulses(
    particles: &mut [Particle],
    grid: &SpatialHashGrid,
    params: &SolverParams,
) {
    for i in 0..particles.len() {
        let position_i = particles[i].position;

        for j in grid.neighbors_of(i, position_i) {
            let Some(pair) = neighbor_pair(position_i, particles[j].position, SUPPORT_RADIUS) else {
                continue;
            };

            let u = (particles[i].velocity - particles[j].velocity).dot(pair.unit);
            let impulse = pair.unit * viscosity_impulse(u, pair.one_minus_q, params);

            particles[i].velocity -= impulse;
            particles[j].velocity += impulse;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;

    #[test]
    fn test_impulse_clamped_to_closing_speed() {
        let params = SolverParams::default().with_frame_step(100.0);

        assert_eq!(viscosity_impulse(2.0, 1.0, &params), 2.0);
        assert_eq!(viscosity_impulse(-2.0, 1.0, &params), -2.0);
        assert_eq!(viscosity_impulse(0.0, 1.0, &params), 0.0);
    }

    #[test]
    fn test_impulse_small_step() {
        let params = SolverParams::default();
        let u = 1.0;
        let expected = 0.5 * 0.5 * (params.sigma * u + params.beta * u * u);

        assert!((viscosity_impulse(u, 0.5, &params) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_viscosity_conserves_momentum() {
        let params = SolverParams::default();
        let mut particles = vec![
            Particle::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.5), Color::WHITE),
            Particle::new(Vec2::new(6.0, 1.0), Vec2::new(-2.0, 0.0), Color::WHITE),
            Particle::new(Vec2::new(3.0, 8.0), Vec2::new(0.0, -1.0), Color::WHITE),
        ];
        let mut grid = SpatialHashGrid::new(SUPPORT_RADIUS, Vec2::splat(-50.0), Vec2::splat(50.0));
        grid.rebuild(&particles);
        let before: Vec2 = particles.iter().map(|p| p.velocity).sum();

        apply_viscosity_impulses(&mut particles, &grid, &params);

        let after: Vec2 = particles.iter().map(|p| p.velocity).sum();
        assert!((after - before).length() < 1e-5);
    }

    #[test]
    fn test_head_on_pair_is_damped() {
        let params = SolverParams::default();
        let mut particles = vec![
            Particle::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Color::WHITE),
            Particle::new(Vec2::new(5.0, 0.0), Vec2::new(-1.0, 0.0), Color::WHITE),
        ];
        let mut grid = SpatialHashGrid::new(SUPPORT_RADIUS, Vec2::splat(-50.0), Vec2::splat(50.0));
        grid.rebuild(&particles);

        apply_viscosity_impulses(&mut particles, &grid, &params);

        // T = 0.5 * (2/3) * (0.9 * -2 - 0.3 * 4) = -1, which stops both particles
        assert!(particles[0].velocity.length() < 1e-5);
        assert!(particles[1].velocity.length() < 1e-5);
    }
}
