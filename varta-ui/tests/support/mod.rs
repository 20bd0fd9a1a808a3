// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for varta-ui component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;
use wasm_bindgen::JsCast;
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn query(mount: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    mount.query_selector(selector).unwrap()
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    query(mount, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

/// Set an input's value and fire a bubbling `input` event so Yew sees it.
pub fn type_into(mount: &web_sys::Element, selector: &str, value: &str) {
    let input = query(mount, selector)
        .unwrap_or_else(|| panic!("no input matches {selector}"))
        .unchecked_into::<web_sys::HtmlInputElement>();
    input.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

/// Poll until `selector` matches, for flows that wait on browser promises.
pub async fn wait_for(mount: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    for _ in 0..50 {
        if let Some(el) = query(mount, selector) {
            return Some(el);
        }
        sleep(Duration::from_millis(20)).await;
    }
    None
}

pub async fn flush() {
    sleep(Duration::ZERO).await;
}

// ---------------------------------------------------------------------------
// Runtime config and storage
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object. Call this before rendering `App`.
pub fn inject_app_config(probe_enabled: &str) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("permissionProbeEnabled", &probe_enabled.into());
    set("anonymousName", &"Anonymous".into());
    set("logLevel", &"debug".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

pub fn clear_profile_storage() {
    if let Ok(Some(storage)) = gloo_utils::window().local_storage() {
        storage.clear().ok();
    }
}
