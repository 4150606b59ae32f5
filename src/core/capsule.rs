//! Static capsule obstacles
//!
//! A capsule is a segment swept by a circle. Collision uses its implicit
//! function: the distance to the segment minus the radius.

use bevy::prelude::*;

use crate::config::WORLD_SCALE;
use crate::math::{Real, Vector, inv_exact, scale_and_add};

#[derive(Clone, Debug, PartialEq)]
pub struct Capsule {
    pub p0: Vector,
    pub p1: Vector,
    pub radius: Real,
    pub color: Color,
}

impl Capsule {
    /// Capsule in simulation (already scaled) coordinates. Negative radii are clamped to zero.
    pub fn new(p0: Vector, p1: Vector, radius: Real, color: Color) -> Self {
        Self {
            p0,
            p1,
            radius: radius.max(0.0),
            color,
        }
    }

    /// Capsule from raw world units, scaled into simulation space
    pub fn from_world(p0: Vector, p1: Vector, radius: Real, color: Color) -> Self {
        Self::new(p0 * WORLD_SCALE, p1 * WORLD_SCALE, radius * WORLD_SCALE, color)
    }

    #[inline]
    pub fn axis(&self) -> Vector {
        self.p1 - self.p0
    }

    /// Closest point to `x` on the segment. Zero-length capsules return `p0`.
    #[inline]
    pub fn closest_point(&self, x: Vector) -> Vector {
        let axis = self.axis();
        let t = ((x - self.p0).dot(axis) * inv_exact(axis.dot(axis))).clamp(0.0, 1.0);
        scale_and_add(self.p0, axis, t)
    }

    /// Signed distance: positive outside, negative inside, zero on the border.
    #[inline]
    pub fn eval(&self, x: Vector) -> Real {
        (x - self.closest_point(x)).length() - self.radius
    }

    #[inline]
    pub fn contains(&self, x: Vector) -> bool {
        self.eval(x) <= 0.0
    }
}
