use meshgeom::{BBox, Segment, Vec2};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Raw exports: total, unvalidated, 0/1 at the boundary.

#[wasm_bindgen]
pub fn segments_intersect(p1x: f64, p1y: f64, p2x: f64, p2y: f64,
                          p3x: f64, p3y: f64, p4x: f64, p4y: f64) -> i32 {
    meshgeom::segments_intersect(p1x, p1y, p2x, p2y, p3x, p3y, p4x, p4y) as i32
}

#[wasm_bindgen(js_name = segmentsIntersect)]
pub fn segments_intersect_camel(p1x: f64, p1y: f64, p2x: f64, p2y: f64,
                                p3x: f64, p3y: f64, p4x: f64, p4y: f64) -> i32 {
    segments_intersect(p1x, p1y, p2x, p2y, p3x, p3y, p4x, p4y)
}

#[wasm_bindgen]
pub fn bbox_overlap(axmin: f64, axmax: f64, aymin: f64, aymax: f64,
                    bxmin: f64, bxmax: f64, bymin: f64, bymax: f64) -> i32 {
    meshgeom::bbox_overlap(axmin, axmax, aymin, aymax, bxmin, bxmax, bymin, bymax) as i32
}

#[wasm_bindgen(js_name = boundingBoxesOverlap)]
pub fn bbox_overlap_camel(axmin: f64, axmax: f64, aymin: f64, aymax: f64,
                          bxmin: f64, bxmax: f64, bymin: f64, bymax: f64) -> i32 {
    bbox_overlap(axmin, axmax, aymin, aymax, bxmin, bxmax, bymin, bymax)
}

/// 0 none, 1 crossing, 2 touch
#[wasm_bindgen]
pub fn classify_segments(p1x: f64, p1y: f64, p2x: f64, p2y: f64,
                         p3x: f64, p3y: f64, p4x: f64, p4y: f64) -> u8 {
    meshgeom::classify_segments(p1x, p1y, p2x, p2y, p3x, p3y, p4x, p4y).code()
}

/// Float64Array [u, v, x, y], or null when the segments are parallel or miss.
#[wasm_bindgen]
pub fn crossing_point(ax: f64, ay: f64, bx: f64, by: f64,
                      cx: f64, cy: f64, dx: f64, dy: f64) -> JsValue {
    match meshgeom::crossing_point(ax, ay, bx, by, cx, cy, dx, dy) {
        Some(c) => crate::interop::arr_f64(&[c.u, c.v, c.x, c.y]).into(),
        None => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn segment_bbox(x1: f64, y1: f64, x2: f64, y2: f64) -> JsValue {
    let (xmin, xmax, ymin, ymax) = meshgeom::segment_bbox(x1, y1, x2, y2);
    serde_wasm_bindgen::to_value(&BBox::new(xmin, xmax, ymin, ymax)).unwrap_or(JsValue::NULL)
}

// Strict exports: result envelopes, see error.rs.

fn first_non_finite(params: &[(&'static str, f64)]) -> Option<&'static str> {
    params.iter().find(|(_, v)| !v.is_finite()).map(|(name, _)| *name)
}

#[wasm_bindgen]
pub fn segments_intersect_res(p1x: f64, p1y: f64, p2x: f64, p2y: f64,
                              p3x: f64, p3y: f64, p4x: f64, p4y: f64) -> JsValue {
    let params = [
        ("p1x", p1x), ("p1y", p1y), ("p2x", p2x), ("p2y", p2y),
        ("p3x", p3x), ("p3y", p3y), ("p4x", p4x), ("p4y", p4y),
    ];
    if let Some(name) = first_non_finite(&params) {
        return error::non_finite(name);
    }
    let hit = meshgeom::segments_intersect(p1x, p1y, p2x, p2y, p3x, p3y, p4x, p4y);
    error::ok(JsValue::from_bool(hit))
}

#[wasm_bindgen]
pub fn bbox_overlap_res(axmin: f64, axmax: f64, aymin: f64, aymax: f64,
                        bxmin: f64, bxmax: f64, bymin: f64, bymax: f64) -> JsValue {
    let params = [
        ("axmin", axmin), ("axmax", axmax), ("aymin", aymin), ("aymax", aymax),
        ("bxmin", bxmin), ("bxmax", bxmax), ("bymin", bymin), ("bymax", bymax),
    ];
    if let Some(name) = first_non_finite(&params) {
        return error::non_finite(name);
    }
    let a = BBox::new(axmin, axmax, aymin, aymax);
    let b = BBox::new(bxmin, bxmax, bymin, bymax);
    for (which, bx) in [("a", &a), ("b", &b)] {
        if bx.xmin > bx.xmax { return error::invalid_bbox(which, "x"); }
        if bx.ymin > bx.ymax { return error::invalid_bbox(which, "y"); }
    }
    error::ok(JsValue::from_bool(a.overlaps(&b)))
}

// Object form accepts either {a:{x,y}, b:{x,y}} or {x1,y1,x2,y2}.
#[derive(Deserialize)]
#[serde(untagged)]
enum SegmentInput {
    Nested(Segment),
    Flat { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl From<SegmentInput> for Segment {
    fn from(s: SegmentInput) -> Segment {
        match s {
            SegmentInput::Nested(seg) => seg,
            SegmentInput::Flat { x1, y1, x2, y2 } => Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2)),
        }
    }
}

fn segment_from_js(param: &'static str, v: JsValue) -> Result<Segment, JsValue> {
    let s: Segment = serde_wasm_bindgen::from_value::<SegmentInput>(v)
        .map(Segment::from)
        .map_err(|e| error::invalid_input(param, e.to_string()))?;
    if [s.a.x, s.a.y, s.b.x, s.b.y].iter().any(|c| !c.is_finite()) {
        return Err(error::non_finite(param));
    }
    Ok(s)
}

#[wasm_bindgen]
pub fn segments_intersect_obj(a: JsValue, b: JsValue) -> JsValue {
    let a = match segment_from_js("a", a) { Ok(s) => s, Err(e) => return e };
    let b = match segment_from_js("b", b) { Ok(s) => s, Err(e) => return e };
    error::ok(JsValue::from_bool(a.intersects(&b)))
}
