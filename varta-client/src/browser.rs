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

//! Browser classification and the per-browser permission policy.
//!
//! The classifier is a pure function of the user agent string. What each
//! browser is allowed to do lives in [`BROWSER_POLICIES`], not in ad hoc
//! conditionals scattered over the flow.

use std::fmt;

/// Browser identity tag, computed once when the gate is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrowserIdentity {
    Chrome,
    Edge,
    Firefox,
    Safari,
    Other,
}

impl BrowserIdentity {
    /// Chromium-based browsers expose `navigator.permissions.query` for
    /// camera and microphone.
    pub fn is_chromium_family(self) -> bool {
        matches!(self, Self::Chrome | Self::Edge)
    }

    pub fn policy(self) -> BrowserPolicy {
        BROWSER_POLICIES
            .iter()
            .find(|(identity, _)| *identity == self)
            .map(|(_, policy)| *policy)
            .unwrap_or(BrowserPolicy::DIRECT)
    }
}

impl fmt::Display for BrowserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chrome => "Chrome",
            Self::Edge => "Edge",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// What the permission flow may do on a given browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserPolicy {
    /// The browser can report camera/microphone status without prompting.
    pub supports_probe: bool,
}

impl BrowserPolicy {
    pub const PROBE: Self = Self {
        supports_probe: true,
    };
    pub const DIRECT: Self = Self {
        supports_probe: false,
    };
}

pub const BROWSER_POLICIES: &[(BrowserIdentity, BrowserPolicy)] = &[
    (BrowserIdentity::Chrome, BrowserPolicy::PROBE),
    (BrowserIdentity::Edge, BrowserPolicy::PROBE),
    (BrowserIdentity::Firefox, BrowserPolicy::DIRECT),
    (BrowserIdentity::Safari, BrowserPolicy::DIRECT),
    (BrowserIdentity::Other, BrowserPolicy::DIRECT),
];

/// Classify the browser we are running in.
///
/// Outside a browser (native builds, workers without a navigator) this is
/// always [`BrowserIdentity::Other`].
pub fn classify() -> BrowserIdentity {
    let identity = crate::platform::user_agent()
        .map(|ua| classify_user_agent(&ua))
        .unwrap_or(BrowserIdentity::Other);
    log::info!("Browser classified as {identity}");
    identity
}

/// Map a user agent string to a [`BrowserIdentity`].
///
/// Order matters: Edge and the iOS wrappers also carry "Chrome"/"Safari"
/// tokens, and Chrome carries "Safari".
pub fn classify_user_agent(user_agent: &str) -> BrowserIdentity {
    let ua = user_agent.to_lowercase();

    if ua.contains("edg/") || ua.contains("edga/") || ua.contains("edgios/") {
        BrowserIdentity::Edge
    } else if ua.contains("firefox/") || ua.contains("fxios/") {
        BrowserIdentity::Firefox
    } else if ua.contains("crios/") {
        // Chrome on iOS is WebKit underneath and has no permission query.
        BrowserIdentity::Safari
    } else if ua.contains("chrome/") || ua.contains("chromium/") {
        BrowserIdentity::Chrome
    } else if ua.contains("safari/") {
        BrowserIdentity::Safari
    } else {
        BrowserIdentity::Other
    }
}
