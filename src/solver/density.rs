use crate::config::SUPPORT_RADIUS;
use crate::core::{Particle, SpatialHashGrid, neighbor_pair};

/// Recomputes density and near density from zero.
///
/// Every particle visits all of its neighbors and credits both ends of the
/// pair, so each unordered pair contributes twice; the rest density is
/// calibrated for that.
pub fn compute_densities(particles: &mut [Particle], grid: &SpatialHashGrid) {
    for particle in particles.iter_mut() {
        particle.clear_densities();
    }

    for i in 0..particles.len() {
        let position_i = particles[i].position;

        for j in grid.neighbors_of(i, position_i) {
            let Some(pair) = neighbor_pair(position_i, particles[j].position, SUPPORT_RADIUS) else {
                continue;
            };

            let a2 = pair.one_minus_q * pair.one_minus_q;
            let a3 = a2 * pair.one_minus_q;

            particles[i].density += a2;
            particles[j].density += a2;
            particles[i].near_density += a3;
            particles[j].near_density += a3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;

    fn grid_for(particles: &[Particle]) -> SpatialHashGrid {
        let mut grid = SpatialHashGrid::new(SUPPORT_RADIUS, Vec2::splat(-100.0), Vec2::splat(100.0));
        grid.rebuild(particles);
        grid
    }

    #[test]
    fn test_pair_density() {
        let h = SUPPORT_RADIUS;
        let mut particles = vec![
            Particle::new(Vec2::ZERO, Vec2::ZERO, Color::WHITE),
            Particle::new(Vec2::new(h * 0.5, 0.0), Vec2::ZERO, Color::WHITE),
        ];
        let grid = grid_for(&particles);

        compute_densities(&mut particles, &grid);

        // Each ordered visit adds 0.5^2 to both ends
        for particle in &particles {
            assert!((particle.density - 0.5).abs() < 1e-6);
            assert!((particle.near_density - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_densities_do_not_accumulate() {
        let mut particles = vec![
            Particle::new(Vec2::ZERO, Vec2::ZERO, Color::WHITE),
            Particle::new(Vec2::new(4.0, 3.0), Vec2::ZERO, Color::WHITE),
            Particle::new(Vec2::new(-5.0, 2.0), Vec2::ZERO, Color::WHITE),
        ];
        let grid = grid_for(&particles);

        compute_densities(&mut particles, &grid);
        let first: Vec<(f32, f32)> = particles.iter().map(|p| (p.density, p.near_density)).collect();
        compute_densities(&mut particles, &grid);
        let second: Vec<(f32, f32)> = particles.iter().map(|p| (p.density, p.near_density)).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(|&(d, n)| d >= 0.0 && n >= 0.0));
    }

    #[test]
    fn test_isolated_particle_has_zero_density() {
        let mut particles = vec![
            Particle::new(Vec2::ZERO, Vec2::ZERO, Color::WHITE),
            Particle::new(Vec2::new(SUPPORT_RADIUS * 1.5, 0.0), Vec2::ZERO, Color::WHITE),
        ];
        let grid = grid_for(&particles);

        compute_densities(&mut particles, &grid);

        assert_eq!(particles[0].density, 0.0);
        assert_eq!(particles[1].near_density, 0.0);
    }
}
