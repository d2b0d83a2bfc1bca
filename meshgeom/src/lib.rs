pub mod model;
pub mod geometry {
    pub mod bbox;
    pub mod intersect;
    pub mod math;
    pub mod tolerance;
}

pub use geometry::bbox::{bbox_overlap, segment_bbox};
pub use geometry::intersect::{
    classify_segments, crossing_params, crossing_point, segments_intersect, Contact,
};
pub use model::{BBox, Crossing, Segment, Vec2};
