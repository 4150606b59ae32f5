//! Fluid particles
//!
//! Particles carry position, velocity and the per-frame SPH bookkeeping of the
//! prediction-relaxation integrator.

use bevy::prelude::*;

use crate::config::{PARTICLE_RADIUS, WORLD_SCALE};
use crate::math::{Real, Vector, zero_vector};

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    /// Position at the start of the last advance, velocity is re-derived from it
    pub previous_position: Vector,
    /// Displacement computed by relaxation, applied at the start of the next frame
    pub pending_displacement: Vector,
    pub density: Real,
    pub near_density: Real,
    pub radius: Real,
    pub color: Color,
    /// Set on spawn; skips one velocity re-derivation
    pub is_new: bool,
}

impl Particle {
    /// Particle in simulation (already scaled) coordinates
    pub fn new(position: Vector, velocity: Vector, color: Color) -> Self {
        Self {
            position,
            velocity,
            previous_position: position,
            pending_displacement: zero_vector(),
            density: 0.0,
            near_density: 0.0,
            radius: PARTICLE_RADIUS,
            color,
            is_new: true,
        }
    }

    /// Particle from raw world units, scaled into simulation space
    pub fn from_world(position: Vector, velocity: Vector, color: Color) -> Self {
        Self::new(position * WORLD_SCALE, velocity * WORLD_SCALE, color)
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    #[inline(always)]
    pub fn clear_densities(&mut self) {
        self.density = 0.0;
        self.near_density = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world_scales_once() {
        let raw_position = Vec2::new(0.1, -0.2);
        let raw_velocity = Vec2::new(0.003, 0.004);
        let particle = Particle::from_world(raw_position, raw_velocity, Color::WHITE);
        let reference = Particle::new(
            raw_position * WORLD_SCALE,
            raw_velocity * WORLD_SCALE,
            Color::WHITE,
        );

        assert_eq!(particle.position, reference.position);
        assert_eq!(particle.velocity, reference.velocity);
        assert_eq!(particle.previous_position, particle.position);
        assert_eq!(particle.radius, PARTICLE_RADIUS);
        assert!(particle.is_new);
    }
}
