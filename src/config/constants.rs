// World and SPH constants for the viscoelastic fluid
use bevy::prelude::*;

use crate::math::Real;

// The whole world is scaled up so that one frame step moves particles a
// sensible distance; raw coordinates in [-1, 1] are multiplied by this once.
pub const WORLD_SCALE: Real = 1000.0;

// Simulation rectangle in raw (unscaled) units. +Y points down.
pub const WORLD_MIN: Vec2 = Vec2::new(-0.6, -0.6);
pub const WORLD_MAX: Vec2 = Vec2::new(0.6, 0.9);

pub const SCALED_WORLD_MIN: Vec2 = Vec2::new(WORLD_MIN.x * WORLD_SCALE, WORLD_MIN.y * WORLD_SCALE);
pub const SCALED_WORLD_MAX: Vec2 = Vec2::new(WORLD_MAX.x * WORLD_SCALE, WORLD_MAX.y * WORLD_SCALE);

// Every particle has the same radius, which is also the support radius h
pub const PARTICLE_RADIUS: Real = 0.015 * WORLD_SCALE;
pub const SUPPORT_RADIUS: Real = PARTICLE_RADIUS;

// Per-frame gravity, added to the vertical velocity
pub const GRAVITY: Real = 0.03;

// Viscosity impulse (linear and quadratic terms)
pub const SIGMA: Real = 0.9;
pub const BETA: Real = 0.3;

// Fraction of the penetration depth removed per frame
pub const COLLISION_DAMPING: Real = 1.0 / 5.0;

// Double density relaxation
pub const REST_DENSITY: Real = 10.0;
pub const STIFFNESS: Real = 0.009;
pub const NEAR_STIFFNESS: Real = 1.2;

pub const MAX_PARTICLES: usize = 1500;

// Emitter defaults (raw units, angles in degrees)
pub const EMITTER_PERIOD: Real = 0.05;
pub const EMITTER_RADIUS: Real = 0.015;
pub const EMITTER_BASE_ANGLE: Real = 70.0;
pub const EMITTER_STRENGTH: Real = 0.006;
pub const EMITTER_JITTER: Real = 2.0;
pub const EMITTER_JITTER_UNIT: Real = 1.0e-4;
pub const EMITTER_SPREAD: Real = 0.8;
pub const EMITTER_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);

pub const CAPSULE_RADIUS: Real = 0.03;
pub const FRAME_RADIUS: Real = 0.06;
pub const CAPSULE_COLOR: Color = Color::srgb(0.0, 0.5, 0.0);
