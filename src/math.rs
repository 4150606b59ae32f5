use bevy::math::Vec2;

pub type Real = f32;

pub type Vector = Vec2;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec2::ZERO
}

/// `out = a + b * scale`
#[inline(always)]
pub fn scale_and_add(a: Vector, b: Vector, scale: Real) -> Vector {
    a + b * scale
}

/// Counter-clockwise perpendicular, `(-y, x)`.
#[inline(always)]
pub fn perpendicular(v: Vector) -> Vector {
    Vec2::new(-v.y, v.x)
}

/// Exact zero check inverse (prevents NaN from division by zero)
#[inline(always)]
pub fn inv_exact(e: Real) -> Real {
    if e == 0.0 { 0.0 } else { 1.0 / e }
}

/// Unit vector along `v`, or `None` when `v` is too short to carry a direction.
#[inline]
pub fn safe_normalize(v: Vector) -> Option<Vector> {
    const MIN_LENGTH_SQUARED: Real = 1.0e-12;
    let length_squared = v.length_squared();
    if length_squared > MIN_LENGTH_SQUARED && length_squared.is_finite() {
        Some(v / length_squared.sqrt())
    } else {
        None
    }
}
