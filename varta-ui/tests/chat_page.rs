// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the chat page and app root.
//
// The join flow relies on Chrome's fake media devices
// (`--use-fake-ui-for-media-stream --use-fake-device-for-media-stream`),
// which auto-grant getUserMedia.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    cleanup, clear_profile_storage, click, create_mount_point, flush, inject_app_config, query,
    remove_app_config, wait_for,
};
use varta_client::{BrowserIdentity, GateConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use varta_ui::components::app::{App, AppProps};
use varta_ui::components::chat_page::{ChatPage, ChatPageProps, JOIN_PROMPT};
use varta_ui::constants::app_config;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn render_page(identity: BrowserIdentity, probe_enabled: bool) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<ChatPage>::with_root_and_props(
        mount.clone(),
        ChatPageProps {
            config: GateConfig {
                probe_enabled,
                ..GateConfig::default()
            },
            identity: Some(identity),
        },
    )
    .render();
    mount
}

fn button_label(mount: &web_sys::Element) -> String {
    query(mount, ".join-exit-btn")
        .and_then(|b| b.text_content())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn idle_page_shows_join_prompt() {
    let mount = render_page(BrowserIdentity::Chrome, true);
    flush().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains(JOIN_PROMPT));
    assert_eq!(button_label(&mount).trim(), "Join");

    let input = query(&mount, ".chat-input")
        .expect("chat input")
        .unchecked_into::<web_sys::HtmlInputElement>();
    assert!(input.disabled(), "chat is disabled until the session is active");
    assert!(query(&mount, ".permission-popover").is_none());
    assert!(query(&mount, ".popover-backdrop").is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn join_enters_room_and_exit_leaves_it() {
    clear_profile_storage();
    let mount = render_page(BrowserIdentity::Firefox, false);
    flush().await;

    click(&mount, ".join-exit-btn");
    let room = wait_for(&mount, ".room").await;
    assert!(room.is_some(), "fake devices should let the session start");

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Anonymous"));
    assert!(query(&mount, ".local-video").is_some());

    click(&mount, ".room .join-exit-btn");
    flush().await;
    assert!(query(&mount, ".room").is_none());
    assert_eq!(button_label(&mount).trim(), "Join");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn toggling_twice_returns_to_idle() {
    let mount = render_page(BrowserIdentity::Safari, false);
    flush().await;

    click(&mount, ".join-exit-btn");
    flush().await;
    if query(&mount, ".room").is_none() {
        assert_eq!(button_label(&mount).trim(), "Exit");
        click(&mount, ".join-exit-btn");
    } else {
        click(&mount, ".room .join-exit-btn");
    }
    flush().await;

    // Whatever getUserMedia does afterwards must not bring the room back.
    wait_for(&mount, ".room").await;
    assert!(query(&mount, ".room").is_none());
    assert_eq!(button_label(&mount).trim(), "Join");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn app_without_config_shows_config_error() {
    remove_app_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root_and_props(
        mount.clone(),
        AppProps {
            config: app_config(),
        },
    )
    .render();
    flush().await;

    assert!(query(&mount, ".config-error").is_some());
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("__APP_CONFIG"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn app_with_config_shows_chat_page() {
    inject_app_config("false");
    let config = app_config();
    assert!(!config.as_ref().unwrap().gate_config().probe_enabled);

    let mount = create_mount_point();
    yew::Renderer::<App>::with_root_and_props(mount.clone(), AppProps { config }).render();
    flush().await;

    assert!(query(&mount, ".config-error").is_none());
    assert!(mount.text_content().unwrap_or_default().contains(JOIN_PROMPT));

    cleanup(&mount);
    remove_app_config();
}
