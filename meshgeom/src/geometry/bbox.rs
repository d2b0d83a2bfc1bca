// Axis-aligned box overlap. Boxes are (xmin, xmax, ymin, ymax) and are not normalized:
// a box with min > max is run through the same formula.

/// Separating-axis test. Boxes touching on an edge or corner overlap.
#[inline]
pub fn bbox_overlap(axmin: f64, axmax: f64, aymin: f64, aymax: f64,
                    bxmin: f64, bxmax: f64, bymin: f64, bymax: f64) -> bool {
    !(axmax < bxmin || bxmax < axmin || aymax < bymin || bymax < aymin)
}

/// Bounding rectangle of segment (x1,y1)-(x2,y2) as (xmin, xmax, ymin, ymax).
#[inline]
pub fn segment_bbox(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64, f64, f64) {
    (x1.min(x2), x1.max(x2), y1.min(y2), y1.max(y2))
}
