//! Capsule collision
//!
//! Particles inside a capsule are pushed a fraction of their penetration depth
//! along the outward normal each frame. This is a soft positional correction;
//! velocities pick it up through the next re-derivation.

use bevy::prelude::*;

use crate::core::{Capsule, Particle};
use crate::math::{Real, Vector, perpendicular, safe_normalize};

/// Outward unit normal of `capsule` at `x`, given the closest axis point `q`.
///
/// When `x` sits exactly on the axis the segment perpendicular is used, and
/// for a zero-length capsule straight up (-Y).
#[inline]
pub fn outward_normal(capsule: &Capsule, x: Vector, q: Vector) -> Vector {
    safe_normalize(x - q)
        .or_else(|| safe_normalize(perpendicular(capsule.axis())))
        .unwrap_or(Vec2::NEG_Y)
}

/// Displacement pushing `x` out of `capsule`, or `None` when `x` is not inside.
#[inline]
pub fn capsule_correction(capsule: &Capsule, x: Vector, damping: Real) -> Option<Vector> {
    let q = capsule.closest_point(x);
    let fx = (x - q).length() - capsule.radius;
    if fx >= 0.0 || !fx.is_finite() {
        return None;
    }

    Some(outward_normal(capsule, x, q) * (-fx * damping))
}

pub fn resolve_capsule_collisions(particles: &mut [Particle], capsules: &[Capsule], damping: Real) {
    if capsules.is_empty() {
        return;
    }

    for particle in particles.iter_mut() {
        for capsule in capsules {
            if let Some(correction) = capsule_correction(capsule, particle.position, damping) {
                particle.position += correction;
            }
        }
    }
}
