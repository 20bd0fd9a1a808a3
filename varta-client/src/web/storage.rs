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

use crate::error::MediaAccessError;
use crate::profile::{ProfileStore, UserProfile, DISPLAY_NAME_KEY, TOPICS_KEY};
use web_sys::Storage;

/// Profile persisted in `window.localStorage` so that it survives page
/// reloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageProfileStore;

impl LocalStorageProfileStore {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl ProfileStore for LocalStorageProfileStore {
    fn load(&self) -> UserProfile {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, starting with an empty profile");
            return UserProfile::default();
        };
        let get = |key: &str| storage.get_item(key).ok().flatten();
        UserProfile::from_stored(get(DISPLAY_NAME_KEY), get(TOPICS_KEY))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), MediaAccessError> {
        let storage = Self::storage().ok_or_else(|| {
            MediaAccessError::StorageUnavailable("localStorage is not available".to_string())
        })?;
        let set = |key: &str, value: &str| {
            storage
                .set_item(key, value)
                .map_err(|e| MediaAccessError::StorageUnavailable(format!("{key}: {e:?}")))
        };
        set(DISPLAY_NAME_KEY, &profile.display_name)?;
        set(TOPICS_KEY, &profile.topics_json())
    }
}
