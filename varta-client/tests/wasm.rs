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

//! In-browser checks for the web collaborators.

#![cfg(target_arch = "wasm32")]

use varta_client::profile::{DISPLAY_NAME_KEY, TOPICS_KEY};
use varta_client::{browser, LocalStorageProfileStore, ProfileStore, UserProfile};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage")
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let storage = local_storage();
    storage.clear().unwrap();

    let profile = UserProfile::new("Alex", vec!["Spanish".to_string()]);
    LocalStorageProfileStore.save(&profile).unwrap();

    assert_eq!(
        storage.get_item(DISPLAY_NAME_KEY).unwrap().as_deref(),
        Some("Alex")
    );
    assert_eq!(
        storage.get_item(TOPICS_KEY).unwrap().as_deref(),
        Some(r#"["Spanish"]"#)
    );
    assert_eq!(LocalStorageProfileStore.load(), profile);
}

#[wasm_bindgen_test]
fn test_corrupt_local_storage_topics_are_ignored() {
    let storage = local_storage();
    storage.clear().unwrap();
    storage.set_item(DISPLAY_NAME_KEY, "Alex").unwrap();
    storage.set_item(TOPICS_KEY, "not-json").unwrap();

    let profile = LocalStorageProfileStore.load();
    assert_eq!(profile.display_name, "Alex");
    assert!(profile.topics.is_empty());
}

#[wasm_bindgen_test]
fn test_classify_reads_navigator() {
    let ua = web_sys::window()
        .unwrap()
        .navigator()
        .user_agent()
        .unwrap();
    assert_eq!(browser::classify(), browser::classify_user_agent(&ua));
}
