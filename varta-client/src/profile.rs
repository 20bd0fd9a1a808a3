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

//! User profile and its durable storage.
//!
//! The profile is not owned by the permission flow; the gate only carries
//! it through to the room and persists what the popover collects.

use crate::error::MediaAccessError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

pub const DISPLAY_NAME_KEY: &str = "username";
pub const TOPICS_KEY: &str = "selectedLanguages";
pub const MAX_DISPLAY_NAME_LEN: usize = 32;

static DISPLAY_NAME_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^[\p{L}\p{N} _-]*$").expect("display name pattern"));

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub topics: Vec<String>,
}

impl UserProfile {
    /// Build a profile from raw popover input: trims the name, drops blank
    /// and repeated topics while keeping their order.
    pub fn new(display_name: &str, topics: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for topic in topics {
            let topic = topic.trim().to_string();
            if !topic.is_empty() && !unique.contains(&topic) {
                unique.push(topic);
            }
        }
        Self {
            display_name: display_name.trim().to_string(),
            topics: unique,
        }
    }

    /// Name shown in the room; falls back to `anonymous` when empty.
    pub fn name_or<'a>(&'a self, anonymous: &'a str) -> &'a str {
        if self.display_name.is_empty() {
            anonymous
        } else {
            &self.display_name
        }
    }

    /// Rebuild a profile from the raw stored values.
    ///
    /// A corrupt topic list is logged and replaced with an empty one; it is
    /// never surfaced to the user.
    pub fn from_stored(display_name: Option<String>, topics: Option<String>) -> Self {
        let topics = match topics.as_deref().map(parse_topics) {
            Some(Ok(topics)) => topics,
            Some(Err(e)) => {
                log::warn!("{e}, falling back to no topics");
                Vec::new()
            }
            None => Vec::new(),
        };
        Self {
            display_name: display_name.unwrap_or_default(),
            topics,
        }
    }

    pub fn topics_json(&self) -> String {
        serde_json::to_string(&self.topics).unwrap_or_else(|_| "[]".to_string())
    }
}

fn parse_topics(raw: &str) -> Result<Vec<String>, MediaAccessError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|e| MediaAccessError::StorageCorrupt {
        key: TOPICS_KEY.to_string(),
        reason: e.to_string(),
    })
}

/// Returns `true` if `name` is acceptable as a display name. Empty is
/// allowed and means "anonymous".
pub fn is_valid_display_name(name: &str) -> bool {
    name.chars().count() <= MAX_DISPLAY_NAME_LEN && DISPLAY_NAME_RE.is_match(name)
}

/// Durable client-side storage for the profile.
pub trait ProfileStore {
    /// Never fails: missing or unreadable values yield defaults.
    fn load(&self) -> UserProfile;
    fn save(&self, profile: &UserProfile) -> Result<(), MediaAccessError>;
}

/// In-memory store for native builds and tests. Holds the same raw string
/// values a browser's local storage would.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> UserProfile {
        UserProfile::from_stored(self.get_raw(DISPLAY_NAME_KEY), self.get_raw(TOPICS_KEY))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), MediaAccessError> {
        self.set_raw(DISPLAY_NAME_KEY, &profile.display_name);
        self.set_raw(TOPICS_KEY, &profile.topics_json());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_yields_defaults() {
        let store = MemoryProfileStore::new();
        assert_eq!(store.load(), UserProfile::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryProfileStore::new();
        let profile = UserProfile::new("Alex", vec!["Spanish".to_string()]);
        store.save(&profile).unwrap();
        assert_eq!(store.get_raw(TOPICS_KEY).as_deref(), Some(r#"["Spanish"]"#));
        assert_eq!(store.load(), profile);
    }

    #[test]
    fn test_corrupt_topics_fall_back_to_empty() {
        let store = MemoryProfileStore::new();
        store.set_raw(DISPLAY_NAME_KEY, "Alex");
        store.set_raw(TOPICS_KEY, "{not json");
        let profile = store.load();
        assert_eq!(profile.display_name, "Alex");
        assert!(profile.topics.is_empty());
    }

    #[test]
    fn test_parse_topics_reports_corruption() {
        let err = parse_topics("42").unwrap_err();
        assert!(matches!(err, MediaAccessError::StorageCorrupt { ref key, .. } if key == TOPICS_KEY));
    }

    #[test]
    fn test_new_trims_and_dedups() {
        let profile = UserProfile::new(
            "  Alex ",
            vec![
                "Spanish".to_string(),
                " ".to_string(),
                "French".to_string(),
                "Spanish".to_string(),
            ],
        );
        assert_eq!(profile.display_name, "Alex");
        assert_eq!(profile.topics, vec!["Spanish", "French"]);
    }

    #[test]
    fn test_name_or_anonymous() {
        let anonymous = UserProfile::default();
        assert_eq!(anonymous.name_or("Anonymous"), "Anonymous");
        let named = UserProfile::new("Alex", Vec::new());
        assert_eq!(named.name_or("Anonymous"), "Alex");
    }

    #[test]
    fn test_display_name_validation() {
        assert!(is_valid_display_name(""));
        assert!(is_valid_display_name("Alex"));
        assert!(is_valid_display_name("María José_2"));
        assert!(!is_valid_display_name("<script>"));
        assert!(!is_valid_display_name(&"a".repeat(MAX_DISPLAY_NAME_LEN + 1)));
    }
}
