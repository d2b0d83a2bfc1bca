/// Signed doubled area of triangle (a, b, c). Positive when c is left of a->b.
#[inline]
pub fn orient(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Inclusive check that c lies in the rectangle spanned by a and b.
/// Only meaningful once c is known to be collinear with a-b.
#[inline]
pub fn on_segment(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> bool {
    cx >= ax.min(bx) && cx <= ax.max(bx) && cy >= ay.min(by) && cy <= ay.max(by)
}

#[inline] pub fn det(p: f64, q: f64, r: f64, s: f64) -> f64 { p * s - q * r }
