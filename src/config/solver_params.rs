use bevy::prelude::*;

use super::constants::{
    BETA, COLLISION_DAMPING, GRAVITY, MAX_PARTICLES, NEAR_STIFFNESS, REST_DENSITY, SIGMA,
    STIFFNESS,
};
use crate::math::Real;

/// Solver parameters read by the fluid pipeline every frame.
///
/// Everything here may be edited between two `update` calls.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SolverParams {
    /// Added to the vertical velocity once per frame step (+Y is down)
    pub gravity: Real,

    /// Linear viscosity coefficient
    pub sigma: Real,

    /// Quadratic viscosity coefficient
    pub beta: Real,

    /// Fraction of the capsule penetration depth corrected per frame
    pub collision_damping: Real,

    pub rest_density: Real,
    pub stiffness: Real,
    pub near_stiffness: Real,

    /// Integration step, in frames. Velocities are displacement per step.
    pub frame_step: Real,

    /// Stop emitting once `max_particles` is reached
    pub limit_particles: bool,
    pub max_particles: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            sigma: SIGMA,
            beta: BETA,
            collision_damping: COLLISION_DAMPING,
            rest_density: REST_DENSITY,
            stiffness: STIFFNESS,
            near_stiffness: NEAR_STIFFNESS,
            frame_step: 1.0,
            limit_particles: true,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl SolverParams {
    /// `None` disables the particle cap
    pub fn with_particle_limit(mut self, limit: Option<usize>) -> Self {
        match limit {
            Some(max) => {
                self.limit_particles = true;
                self.max_particles = max;
            }
            None => self.limit_particles = false,
        }
        self
    }

    pub fn with_gravity(mut self, gravity: Real) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_frame_step(mut self, frame_step: Real) -> Self {
        self.frame_step = frame_step.max(0.0);
        self
    }

    pub fn particle_limit(&self) -> Option<usize> {
        self.limit_particles.then_some(self.max_particles)
    }

    /// Whether another batch may be emitted with `count` particles alive
    #[inline]
    pub fn allows_emission(&self, count: usize) -> bool {
        !self.limit_particles || count < self.max_particles
    }
}
