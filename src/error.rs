use wasm_bindgen::JsValue;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let message = message.into();
    #[cfg(feature = "console_log")]
    web_sys::console::debug_1(&JsValue::from_str(&format!("meshgeom: {}: {}", code, message)));
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_bbox(which: &str, axis: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "box", &JsValue::from_str(which));
    set_kv(&d, "axis", &JsValue::from_str(axis));
    err("invalid_bbox", format!("box '{}' has {}min > {}max", which, axis, axis), Some(d.into()))
}

#[inline]
pub fn invalid_input(param: &str, reason: impl Into<String>) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("invalid_input", format!("parameter '{}': {}", param, reason.into()), Some(d.into()))
}
