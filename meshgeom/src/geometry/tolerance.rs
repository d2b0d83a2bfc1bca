// Tolerances for the f64 segment predicates

pub const EPS_COLLINEAR: f64 = 1e-9; // |orient| below this counts as collinear

/// Strict: `x` equal to `eps` is not near zero.
#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() < eps }

/// One value beyond `eps`, the other beyond `-eps`.
#[inline]
pub fn strictly_opposite(a: f64, b: f64, eps: f64) -> bool {
    (a > eps && b < -eps) || (a < -eps && b > eps)
}
