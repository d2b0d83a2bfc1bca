use meshgeom::{BBox, Contact, Segment, Vec2};
use serde_json::json;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
}

#[test]
fn segment_methods_match_scalar_predicates() {
    let a = seg(0.0, 0.0, 2.0, 2.0);
    let b = seg(0.0, 2.0, 2.0, 0.0);
    assert!(a.intersects(&b));
    assert_eq!(a.contact(&b), Contact::Crossing);
    let c = a.crossing(&b).expect("crossing");
    assert!((c.x - 1.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);

    let far = seg(5.0, 5.0, 6.0, 5.0);
    assert!(!a.intersects(&far));
    assert!(a.crossing(&far).is_none());
}

#[test]
fn segment_bbox_is_normalized() {
    let b = seg(4.0, -1.0, 1.0, 3.0).bbox();
    assert_eq!(b, BBox::new(1.0, 4.0, -1.0, 3.0));
    assert!(b.is_normalized());
    assert!(!BBox::new(2.0, 1.0, 0.0, 1.0).is_normalized());
}

#[test]
fn bbox_overlaps_touching_boxes() {
    let a = BBox::new(0.0, 1.0, 0.0, 1.0);
    assert!(a.overlaps(&BBox::new(1.0, 2.0, 0.0, 1.0)));
    assert!(!a.overlaps(&BBox::new(2.0, 3.0, 0.0, 1.0)));
}

#[test]
fn segment_deserializes_from_json() {
    let v = json!({"a": {"x": 0.0, "y": 0.0}, "b": {"x": 4.0, "y": 0.0}});
    let s: Segment = serde_json::from_value(v).expect("segment");
    assert_eq!(s, seg(0.0, 0.0, 4.0, 0.0));
    assert!(s.intersects(&seg(2.0, 0.0, 6.0, 0.0)));
}

#[test]
fn bbox_serializes_with_named_extents() {
    let v = serde_json::to_value(BBox::new(0.0, 1.0, 2.0, 3.0)).expect("bbox");
    assert_eq!(v, json!({"xmin": 0.0, "xmax": 1.0, "ymin": 2.0, "ymax": 3.0}));
}

#[test]
fn segment_with_missing_endpoint_is_rejected() {
    let v = json!({"a": {"x": 0.0, "y": 0.0}});
    assert!(serde_json::from_value::<Segment>(v).is_err());
}
