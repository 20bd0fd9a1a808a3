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

//! Gate configuration.

pub const DEFAULT_ANONYMOUS_NAME: &str = "Anonymous";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// When false every browser takes the direct-acquisition path.
    pub probe_enabled: bool,
    /// Name handed to the room when the profile has none.
    pub anonymous_name: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            probe_enabled: true,
            anonymous_name: DEFAULT_ANONYMOUS_NAME.to_string(),
        }
    }
}

/// Parse a config flag: "true" and "1" (any case) are true, anything else
/// or a missing value is false.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.trim().to_lowercase())
    } else {
        false
    }
}
