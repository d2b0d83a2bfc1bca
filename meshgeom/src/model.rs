use serde::{Deserialize, Serialize};

use crate::geometry::{bbox, intersect};
use crate::geometry::intersect::Contact;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline] pub fn new(x: f64, y: f64) -> Self { Vec2 { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    #[inline] pub fn new(a: Vec2, b: Vec2) -> Self { Segment { a, b } }

    pub fn contact(&self, other: &Segment) -> Contact {
        intersect::classify_segments(
            self.a.x, self.a.y, self.b.x, self.b.y,
            other.a.x, other.a.y, other.b.x, other.b.y,
        )
    }

    #[inline] pub fn intersects(&self, other: &Segment) -> bool { self.contact(other).is_hit() }

    /// Location of a non-parallel crossing, see `intersect::crossing_point`.
    pub fn crossing(&self, other: &Segment) -> Option<Crossing> {
        intersect::crossing_point(
            self.a.x, self.a.y, self.b.x, self.b.y,
            other.a.x, other.a.y, other.b.x, other.b.y,
        )
    }

    #[inline] pub fn bbox(&self) -> BBox { BBox::of_segment(self) }
}

/// Axis-aligned box. `xmin <= xmax` and `ymin <= ymax` are expected but never enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BBox {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        BBox { xmin, xmax, ymin, ymax }
    }

    pub fn of_segment(s: &Segment) -> Self {
        let (xmin, xmax, ymin, ymax) = bbox::segment_bbox(s.a.x, s.a.y, s.b.x, s.b.y);
        BBox { xmin, xmax, ymin, ymax }
    }

    #[inline] pub fn is_normalized(&self) -> bool { self.xmin <= self.xmax && self.ymin <= self.ymax }

    #[inline]
    pub fn overlaps(&self, other: &BBox) -> bool {
        bbox::bbox_overlap(
            self.xmin, self.xmax, self.ymin, self.ymax,
            other.xmin, other.xmax, other.ymin, other.ymax,
        )
    }
}

/// Crossing of AB with CD: `u` along AB, `v` along CD, (x, y) the point on AB.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub u: f64,
    pub v: f64,
    pub x: f64,
    pub y: f64,
}
