/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Browser implementations of the gate's external collaborators.

mod capture;
mod permission_query;
mod storage;

pub use capture::WebMediaCapture;
pub use permission_query::WebPermissionQuery;
pub use storage::LocalStorageProfileStore;

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort `(name, message)` of a rejected browser promise.
pub(crate) fn describe_js_error(err: &JsValue) -> (String, String) {
    if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
        (dom.name(), dom.message())
    } else if let Some(js) = err.dyn_ref::<js_sys::Error>() {
        (String::from(js.name()), String::from(js.message()))
    } else if let Some(s) = err.as_string() {
        (String::new(), s)
    } else {
        (String::new(), format!("{err:?}"))
    }
}
