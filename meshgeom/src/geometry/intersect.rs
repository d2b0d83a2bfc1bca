// Segment-segment predicates on f64.
// `classify_segments` is the orientation test with collinear tolerance; `crossing_params`
// is the plain parametric test with no tolerance, used where the hit location matters.

use super::math::{det, on_segment, orient};
use super::tolerance::{near_zero, strictly_opposite, EPS_COLLINEAR};
use crate::model::Crossing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    // Each segment's endpoints lie strictly on opposite sides of the other's line
    Crossing,
    // An endpoint is collinear with the other segment (within EPS_COLLINEAR) and inside its span.
    // Covers shared endpoints, T-junctions and collinear overlaps.
    Touch,
}

impl Contact {
    #[inline] pub fn is_hit(self) -> bool { self != Contact::None }

    /// Boundary encoding: 0 none, 1 crossing, 2 touch.
    #[inline]
    pub fn code(self) -> u8 {
        match self { Contact::None => 0, Contact::Crossing => 1, Contact::Touch => 2 }
    }
}

pub fn classify_segments(p1x: f64, p1y: f64, p2x: f64, p2y: f64,
                         p3x: f64, p3y: f64, p4x: f64, p4y: f64) -> Contact {
    let d1 = orient(p3x, p3y, p4x, p4y, p1x, p1y);
    let d2 = orient(p3x, p3y, p4x, p4y, p2x, p2y);
    let d3 = orient(p1x, p1y, p2x, p2y, p3x, p3y);
    let d4 = orient(p1x, p1y, p2x, p2y, p4x, p4y);

    if strictly_opposite(d1, d2, EPS_COLLINEAR) && strictly_opposite(d3, d4, EPS_COLLINEAR) {
        return Contact::Crossing;
    }

    // Any one endpoint on the other segment is enough
    let touch = (near_zero(d1, EPS_COLLINEAR) && on_segment(p3x, p3y, p4x, p4y, p1x, p1y))
        || (near_zero(d2, EPS_COLLINEAR) && on_segment(p3x, p3y, p4x, p4y, p2x, p2y))
        || (near_zero(d3, EPS_COLLINEAR) && on_segment(p1x, p1y, p2x, p2y, p3x, p3y))
        || (near_zero(d4, EPS_COLLINEAR) && on_segment(p1x, p1y, p2x, p2y, p4x, p4y));
    if touch { Contact::Touch } else { Contact::None }
}

/// True when segment p1-p2 meets segment p3-p4, touching and collinear overlap included.
/// NaN in any orientation yields false.
#[inline]
pub fn segments_intersect(p1x: f64, p1y: f64, p2x: f64, p2y: f64,
                          p3x: f64, p3y: f64, p4x: f64, p4y: f64) -> bool {
    classify_segments(p1x, p1y, p2x, p2y, p3x, p3y, p4x, p4y).is_hit()
}

/// Parameters (u on AB, v on CD) of the crossing point, both within [0, 1].
/// Parallel segments, collinear ones included, give None.
pub fn crossing_params(ax: f64, ay: f64, bx: f64, by: f64,
                       cx: f64, cy: f64, dx: f64, dy: f64) -> Option<(f64, f64)> {
    let den = det(bx - ax, by - ay, dx - cx, dy - cy);
    if den == 0.0 || den.is_nan() {
        return None;
    }
    let u = det(cx - ax, cy - ay, dx - cx, dy - cy) / den;
    let v = det(cx - ax, cy - ay, bx - ax, by - ay) / den;
    if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) { Some((u, v)) } else { None }
}

pub fn crossing_point(ax: f64, ay: f64, bx: f64, by: f64,
                      cx: f64, cy: f64, dx: f64, dy: f64) -> Option<Crossing> {
    let (u, v) = crossing_params(ax, ay, bx, by, cx, cy, dx, dy)?;
    Some(Crossing { u, v, x: ax + u * (bx - ax), y: ay + u * (by - ay) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_crossing_is_classified_crossing() {
        let c = classify_segments(0.0,0.0, 2.0,2.0, 0.0,2.0, 2.0,0.0);
        assert_eq!(c, Contact::Crossing);
        assert_eq!(c.code(), 1);
    }

    #[test]
    fn shared_endpoint_is_touch() {
        let c = classify_segments(0.0,0.0, 2.0,2.0, 2.0,2.0, 4.0,0.0);
        assert_eq!(c, Contact::Touch);
        assert_eq!(c.code(), 2);
    }

    #[test]
    fn t_junction_is_touch() {
        // p3 sits in the middle of p1-p2
        assert_eq!(classify_segments(0.0,0.0, 4.0,0.0, 2.0,0.0, 2.0,3.0), Contact::Touch);
    }

    #[test]
    fn collinear_overlap_is_touch() {
        assert_eq!(classify_segments(0.0,0.0, 4.0,0.0, 2.0,0.0, 6.0,0.0), Contact::Touch);
    }

    #[test]
    fn parallel_apart_is_none() {
        let c = classify_segments(0.0,0.0, 1.0,0.0, 0.0,1.0, 1.0,1.0);
        assert_eq!(c, Contact::None);
        assert_eq!(c.code(), 0);
        assert!(!c.is_hit());
    }

    #[test]
    fn nan_never_intersects() {
        assert!(!segments_intersect(f64::NAN,0.0, 2.0,2.0, 0.0,2.0, 2.0,0.0));
        assert!(!segments_intersect(0.0,0.0, 2.0,2.0, 0.0,2.0, 2.0,f64::NAN));
    }

    #[test]
    fn crossing_point_of_x() {
        let c = crossing_point(0.0,0.0, 2.0,2.0, 0.0,2.0, 2.0,0.0).expect("crossing");
        assert!((c.u - 0.5).abs() < 1e-12 && (c.v - 0.5).abs() < 1e-12);
        assert!((c.x - 1.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn crossing_params_endpoint_is_inclusive() {
        let (u, v) = crossing_params(0.0,0.0, 2.0,0.0, 2.0,0.0, 2.0,2.0).expect("touch at end");
        assert_eq!(u, 1.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn crossing_params_rejects_parallel_and_outside() {
        // collinear overlap has a zero denominator
        assert_eq!(crossing_params(0.0,0.0, 4.0,0.0, 2.0,0.0, 6.0,0.0), None);
        assert_eq!(crossing_params(0.0,0.0, 1.0,0.0, 0.0,1.0, 1.0,1.0), None);
        // lines cross at (3,0), beyond the first segment
        assert_eq!(crossing_params(0.0,0.0, 2.0,0.0, 3.0,-1.0, 3.0,1.0), None);
        assert_eq!(crossing_params(f64::NAN,0.0, 2.0,0.0, 1.0,-1.0, 1.0,1.0), None);
    }
}
