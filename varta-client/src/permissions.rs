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

//! Capability prober: reads camera/microphone permission status without
//! triggering a capture prompt.

use crate::browser::BrowserIdentity;
use crate::error::MediaAccessError;
use futures::future::LocalBoxFuture;
use std::fmt;
use std::rc::Rc;

/// A capability the permission subsystem can be asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Camera,
    Microphone,
}

impl Capability {
    /// Name understood by `navigator.permissions.query`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Microphone => "microphone",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Prompt,
    Unsupported,
}

/// Status of both capabilities the session needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityStatus {
    pub camera: PermissionStatus,
    pub microphone: PermissionStatus,
}

impl CapabilityStatus {
    pub const UNSUPPORTED: Self = Self {
        camera: PermissionStatus::Unsupported,
        microphone: PermissionStatus::Unsupported,
    };

    pub fn all_granted(&self) -> bool {
        self.camera == PermissionStatus::Granted && self.microphone == PermissionStatus::Granted
    }

    pub fn any_unsupported(&self) -> bool {
        self.camera == PermissionStatus::Unsupported
            || self.microphone == PermissionStatus::Unsupported
    }
}

/// The browser permission query subsystem.
///
/// Implementations must never prompt the user.
pub trait PermissionQuery {
    fn query(
        &self,
        capability: Capability,
    ) -> LocalBoxFuture<'static, Result<PermissionStatus, MediaAccessError>>;
}

/// Query that is never available; used where the platform has no
/// permission API at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPermissionQuery;

impl PermissionQuery for NoPermissionQuery {
    fn query(
        &self,
        capability: Capability,
    ) -> LocalBoxFuture<'static, Result<PermissionStatus, MediaAccessError>> {
        Box::pin(futures::future::ready(Err(
            MediaAccessError::ProbeUnavailable(format!("no permission API for {capability}")),
        )))
    }
}

/// Result of one probe, including why a capability ended up `Unsupported`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeReport {
    pub status: CapabilityStatus,
    pub failure: Option<MediaAccessError>,
}

#[derive(Clone)]
pub struct CapabilityProber {
    query: Rc<dyn PermissionQuery>,
}

impl CapabilityProber {
    pub fn new(query: Rc<dyn PermissionQuery>) -> Self {
        Self { query }
    }

    /// Probe camera and microphone for `identity`.
    ///
    /// Browsers without a probe-capable policy are never queried and report
    /// `Unsupported` for both. Query failures also degrade to `Unsupported`;
    /// probing never aborts the join flow.
    pub async fn probe(&self, identity: BrowserIdentity) -> ProbeReport {
        if !identity.policy().supports_probe {
            log::debug!("{identity} has no permission query, skipping probe");
            return ProbeReport {
                status: CapabilityStatus::UNSUPPORTED,
                failure: None,
            };
        }

        let (camera, microphone) = futures::join!(
            self.query.query(Capability::Camera),
            self.query.query(Capability::Microphone)
        );

        let mut failure = None;
        let mut settle = |capability: Capability, result: Result<PermissionStatus, _>| {
            result.unwrap_or_else(|e: MediaAccessError| {
                log::warn!("Permission query for {capability} failed: {e}");
                failure.get_or_insert(e);
                PermissionStatus::Unsupported
            })
        };
        let status = CapabilityStatus {
            camera: settle(Capability::Camera, camera),
            microphone: settle(Capability::Microphone, microphone),
        };
        log::info!(
            "Permission probe: camera={:?}, microphone={:?}",
            status.camera,
            status.microphone
        );
        ProbeReport { status, failure }
    }
}
