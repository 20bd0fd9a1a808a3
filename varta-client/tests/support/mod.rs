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

// Shared fakes for the gate and driver tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// item is used in every compilation unit.
#![allow(dead_code)]

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use varta_client::{
    Capability, CapabilityStatus, LocalTrack, MediaAccessError, MediaCapture, MediaTrackPair,
    PermissionQuery, PermissionStatus, ProbeReport, TrackKind,
};

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct FakeTrack {
    pub kind: TrackKind,
    pub enabled: Rc<Cell<bool>>,
    pub stopped: Rc<Cell<bool>>,
}

impl FakeTrack {
    pub fn new(kind: TrackKind) -> Self {
        Self {
            kind,
            enabled: Rc::new(Cell::new(true)),
            stopped: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl LocalTrack for FakeTrack {
    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn enabled(&self) -> bool {
        self.enabled.get() && !self.stopped.get()
    }

    fn stop(&self) {
        self.stopped.set(true);
    }
}

/// A fresh audio + video track pair, plus handles to both for assertions.
pub fn live_pair() -> (MediaTrackPair<FakeTrack>, FakeTrack, FakeTrack) {
    let audio = FakeTrack::new(TrackKind::Audio);
    let video = FakeTrack::new(TrackKind::Video);
    let pair = MediaTrackPair::from_tracks(vec![audio.clone(), video.clone()]);
    (pair, audio, video)
}

pub fn denied(message: &str) -> MediaAccessError {
    MediaAccessError::AcquisitionDenied(message.to_string())
}

// ---------------------------------------------------------------------------
// Probe results
// ---------------------------------------------------------------------------

pub fn report(camera: PermissionStatus, microphone: PermissionStatus) -> ProbeReport {
    ProbeReport {
        status: CapabilityStatus { camera, microphone },
        failure: None,
    }
}

pub fn prompt_report() -> ProbeReport {
    report(PermissionStatus::Prompt, PermissionStatus::Prompt)
}

pub fn granted_report() -> ProbeReport {
    report(PermissionStatus::Granted, PermissionStatus::Granted)
}

// ---------------------------------------------------------------------------
// Collaborators for the driver
// ---------------------------------------------------------------------------

type CaptureResult = Result<Vec<FakeTrack>, MediaAccessError>;

/// Capture whose calls stay pending until the test resolves them, in
/// whatever order it likes.
#[derive(Clone, Default)]
pub struct ControlledCapture {
    pending: Rc<RefCell<VecDeque<oneshot::Sender<CaptureResult>>>>,
    calls: Rc<Cell<u32>>,
}

impl ControlledCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Complete the oldest outstanding call.
    pub fn resolve_next(&self, result: CaptureResult) {
        let sender = self
            .pending
            .borrow_mut()
            .pop_front()
            .expect("no getUserMedia call is pending");
        let _ = sender.send(result);
    }

    /// Complete the oldest outstanding call with a fresh live pair and
    /// return handles to its tracks.
    pub fn grant_next(&self) -> (FakeTrack, FakeTrack) {
        let audio = FakeTrack::new(TrackKind::Audio);
        let video = FakeTrack::new(TrackKind::Video);
        self.resolve_next(Ok(vec![audio.clone(), video.clone()]));
        (audio, video)
    }
}

impl MediaCapture for ControlledCapture {
    type Track = FakeTrack;

    fn get_user_media(&self) -> LocalBoxFuture<'static, CaptureResult> {
        self.calls.set(self.calls.get() + 1);
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(tx);
        Box::pin(async move {
            rx.await.unwrap_or_else(|_| {
                Err(MediaAccessError::AcquisitionUnavailable(
                    "capture dropped".to_string(),
                ))
            })
        })
    }
}

/// Permission query with a fixed answer per capability.
pub struct FixedPermissions {
    pub camera: Result<PermissionStatus, MediaAccessError>,
    pub microphone: Result<PermissionStatus, MediaAccessError>,
    pub calls: Rc<Cell<u32>>,
}

impl FixedPermissions {
    pub fn both(status: PermissionStatus) -> Self {
        Self {
            camera: Ok(status),
            microphone: Ok(status),
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl PermissionQuery for FixedPermissions {
    fn query(
        &self,
        capability: Capability,
    ) -> LocalBoxFuture<'static, Result<PermissionStatus, MediaAccessError>> {
        self.calls.set(self.calls.get() + 1);
        let result = match capability {
            Capability::Camera => self.camera.clone(),
            Capability::Microphone => self.microphone.clone(),
        };
        Box::pin(futures::future::ready(result))
    }
}

/// Let spawned local tasks run to their next suspension point.
#[cfg(not(target_arch = "wasm32"))]
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
