//! Particle emitters
//!
//! An emitter fires a jet of three particles every `period` seconds. All of
//! its tunables are plain fields so an editor can change them between frames.

use bevy::prelude::*;

use crate::config::{
    EMITTER_BASE_ANGLE, EMITTER_COLOR, EMITTER_JITTER, EMITTER_JITTER_UNIT, EMITTER_PERIOD,
    EMITTER_RADIUS, EMITTER_STRENGTH, WORLD_SCALE,
};
use crate::math::{Real, Vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Emitter {
    /// Simulation-space position
    pub position: Vector,
    /// Seconds accumulated since the last emission
    pub timer: Real,
    /// Seconds between emissions. Zero emits on every frame with a positive `dt`.
    pub period: Real,
    /// Degrees
    pub base_angle: Real,
    /// Degrees added per emission; zero pins the jet to `base_angle`
    pub angular_velocity: Real,
    /// Current jet angle in degrees
    pub angle: Real,
    /// Jet speed in raw world units per frame
    pub strength: Real,
    /// Per-axis velocity jitter, in units of 1e-4 raw world units per frame
    pub jitter: Real,
    /// Simulation-space hit-test radius
    pub radius: Real,
    pub color: Color,
}

impl Emitter {
    /// Emitter at a simulation-space position with default tunables
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            timer: 0.0,
            period: EMITTER_PERIOD,
            base_angle: EMITTER_BASE_ANGLE,
            angular_velocity: 0.0,
            angle: 0.0,
            strength: EMITTER_STRENGTH,
            jitter: EMITTER_JITTER,
            radius: EMITTER_RADIUS * WORLD_SCALE,
            color: EMITTER_COLOR,
        }
    }

    /// Emitter from a raw world position
    pub fn from_world(position: Vector) -> Self {
        Self::new(position * WORLD_SCALE)
    }

    pub fn with_period(mut self, period: Real) -> Self {
        self.period = period.max(0.0);
        self
    }

    pub fn with_angle(mut self, base_angle: Real, angular_velocity: Real) -> Self {
        self.base_angle = base_angle;
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_strength(mut self, strength: Real) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_jitter(mut self, jitter: Real) -> Self {
        self.jitter = jitter;
        self
    }

    /// Signed distance to the hit-test disc
    #[inline]
    pub fn eval(&self, x: Vector) -> Real {
        (self.position - x).length() - self.radius
    }

    #[inline]
    pub fn contains(&self, x: Vector) -> bool {
        self.eval(x) <= 0.0
    }

    /// Accumulates `dt` and reports whether the period has elapsed.
    #[inline]
    pub fn tick(&mut self, dt: Real) -> bool {
        self.timer += dt;
        self.timer > self.period
    }

    /// Advances the jet angle exactly once and returns the unit jet direction.
    ///
    /// Angles are measured clockwise in the +Y-down world, so the direction
    /// is taken at `360° - angle`.
    pub fn advance_direction(&mut self) -> Vector {
        if self.angular_velocity == 0.0 {
            self.angle = self.base_angle;
        } else {
            self.angle += self.angular_velocity;
        }
        self.direction()
    }

    /// Unit jet direction at the current angle
    #[inline]
    pub fn direction(&self) -> Vector {
        let theta = std::f32::consts::TAU - self.angle.to_radians();
        Vec2::new(theta.cos(), theta.sin())
    }

    /// Jitter half-width in raw world units
    #[inline]
    pub fn jitter_amplitude(&self) -> Real {
        self.jitter.abs() * EMITTER_JITTER_UNIT
    }
}
