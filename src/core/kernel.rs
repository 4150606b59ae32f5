use crate::math::{Real, Vector};

/// Exact-distance view of a candidate pair returned by the broad phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborPair {
    /// Unit vector from j to i
    pub unit: Vector,
    pub distance: Real,
    /// `1 - r / h`, in `[0, 1)`
    pub one_minus_q: Real,
}

/// Keeps pairs with `0 < r² <= h²`. Coincident particles carry no direction and are skipped.
#[inline]
pub fn neighbor_pair(position_i: Vector, position_j: Vector, h: Real) -> Option<NeighborPair> {
    let delta = position_i - position_j;
    let r2 = delta.length_squared();
    // Negated so NaN distances are rejected as well
    if !(r2 > 0.0 && r2 <= h * h) {
        return None;
    }

    let distance = r2.sqrt();
    Some(NeighborPair {
        unit: delta / distance,
        distance,
        one_minus_q: 1.0 - distance / h,
    })
}
