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

//! Error types for permission probing, media acquisition and profile storage.

use thiserror::Error;

/// Every failure the permission flow can run into.
///
/// None of these are fatal: the gate folds them into a [`PermissionError`]
/// record (or recovers locally) and returns to an inactive state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MediaAccessError {
    /// The permission query API failed or does not exist on this browser.
    #[error("permission query unavailable: {0}")]
    ProbeUnavailable(String),

    /// The user (or the browser on their behalf) declined the capture prompt.
    #[error("{0}")]
    AcquisitionDenied(String),

    /// No compatible device, device busy, or any other capture failure.
    #[error("{0}")]
    AcquisitionUnavailable(String),

    /// A stored profile value could not be parsed.
    #[error("stored value for `{key}` is corrupt: {reason}")]
    StorageCorrupt { key: String, reason: String },

    /// The durable storage backend is missing or rejected a write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl MediaAccessError {
    /// True for failures coming out of the capture API.
    pub fn is_acquisition(&self) -> bool {
        matches!(
            self,
            Self::AcquisitionDenied(_) | Self::AcquisitionUnavailable(_)
        )
    }
}

/// User-visible error record.
///
/// Set whenever an attempt fails, reset when the next join attempt starts.
/// An `occurred` record never blocks a retry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionError {
    pub occurred: bool,
    pub message: String,
}

impl PermissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            occurred: true,
            message: message.into(),
        }
    }
}

impl From<&MediaAccessError> for PermissionError {
    fn from(err: &MediaAccessError) -> Self {
        Self::new(err.to_string())
    }
}
