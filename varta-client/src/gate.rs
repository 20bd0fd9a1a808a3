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

//! Session gate: owns the user's intent, the acquired tracks and the
//! active/inactive decision.
//!
//! The gate is a synchronous state machine. Every input is a [`GateMsg`];
//! [`SessionGate::handle`] applies it and returns the asynchronous work
//! ([`GateEffect`]) the caller must start. Completions come back as
//! messages tagged with the [`AttemptId`] they were started for, and are
//! dropped unless that attempt is still the current one. That check is the
//! only cancellation mechanism: an in-flight acquisition is never aborted,
//! its late result is released instead.

use crate::browser::BrowserIdentity;
use crate::config::GateConfig;
use crate::error::{MediaAccessError, PermissionError};
use crate::event_bus::emit_gate_event;
use crate::events::GateEvent;
use crate::media::{LocalTrack, MediaTrackPair};
use crate::permissions::ProbeReport;
use crate::popover::{
    JoinPlan, PopoverController, PopoverDecision, PopoverEvent, PopoverOutcome, PopoverState,
};
use crate::profile::UserProfile;

/// Monotonically increasing id of a join attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl AttemptId {
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Inputs to the gate.
#[derive(Debug)]
pub enum GateMsg<T> {
    /// Join/exit button.
    Toggle,
    /// The room asked to leave. No-op when not joined.
    ExitRequested,
    Probed {
        attempt: AttemptId,
        report: ProbeReport,
    },
    Acquired {
        attempt: AttemptId,
        result: Result<MediaTrackPair<T>, MediaAccessError>,
    },
    Popover(PopoverEvent),
}

/// Asynchronous work requested by the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEffect {
    Probe(AttemptId),
    Acquire(AttemptId),
    PersistProfile(UserProfile),
}

/// Everything the room needs once the session is active.
#[derive(Debug)]
pub struct RoomHandoff<'a, T> {
    pub display_name: &'a str,
    pub topics: &'a [String],
    pub audio: &'a T,
    pub video: &'a T,
}

/// Cloneable read-only view of the gate for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateSnapshot {
    pub identity: BrowserIdentity,
    pub intent: bool,
    pub popover_open: bool,
    pub active: bool,
    pub error: PermissionError,
    pub profile: UserProfile,
}

pub struct SessionGate<T: LocalTrack> {
    identity: BrowserIdentity,
    config: GateConfig,
    intent: bool,
    attempt: AttemptId,
    // Attempt for which the acquirer has been invoked; at most once each.
    acquiring: Option<AttemptId>,
    popover: PopoverController,
    tracks: MediaTrackPair<T>,
    error: PermissionError,
    profile: UserProfile,
    active: bool,
}

impl<T: LocalTrack> SessionGate<T> {
    pub fn new(identity: BrowserIdentity, profile: UserProfile, config: GateConfig) -> Self {
        log::info!(
            "Session gate mounted (browser={identity}, probe_enabled={})",
            config.probe_enabled
        );
        Self {
            identity,
            config,
            intent: false,
            attempt: AttemptId::default(),
            acquiring: None,
            popover: PopoverController::new(),
            tracks: MediaTrackPair::default(),
            error: PermissionError::default(),
            profile,
            active: false,
        }
    }

    pub fn handle(&mut self, msg: GateMsg<T>) -> Vec<GateEffect> {
        let effects = match msg {
            GateMsg::Toggle => {
                if self.intent {
                    self.exit();
                    Vec::new()
                } else {
                    self.join()
                }
            }
            GateMsg::ExitRequested => {
                if self.intent {
                    self.exit();
                }
                Vec::new()
            }
            GateMsg::Probed { attempt, report } => self.on_probed(attempt, report),
            GateMsg::Acquired { attempt, result } => {
                self.on_acquired(attempt, result);
                Vec::new()
            }
            GateMsg::Popover(event) => self.on_popover(event),
        };
        self.sync_activity();
        effects
    }

    /// Intent set, popover closed and both tracks present and enabled.
    pub fn is_active(&self) -> bool {
        self.intent && !self.popover.is_open() && self.tracks.is_live()
    }

    pub fn intent(&self) -> bool {
        self.intent
    }

    pub fn identity(&self) -> BrowserIdentity {
        self.identity
    }

    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn popover_state(&self) -> PopoverState {
        self.popover.state()
    }

    pub fn is_popover_open(&self) -> bool {
        self.popover.is_open()
    }

    pub fn error(&self) -> &PermissionError {
        &self.error
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn tracks(&self) -> &MediaTrackPair<T> {
        &self.tracks
    }

    /// Room hand-off data; `None` unless the session is active.
    pub fn room_handoff(&self) -> Option<RoomHandoff<'_, T>> {
        if !self.is_active() {
            return None;
        }
        let audio = self.tracks.audio.as_ref()?;
        let video = self.tracks.video.as_ref()?;
        Some(RoomHandoff {
            display_name: self.profile.name_or(&self.config.anonymous_name),
            topics: &self.profile.topics,
            audio,
            video,
        })
    }

    pub fn snapshot(&self) -> GateSnapshot {
        GateSnapshot {
            identity: self.identity,
            intent: self.intent,
            popover_open: self.popover.is_open(),
            active: self.is_active(),
            error: self.error.clone(),
            profile: self.profile.clone(),
        }
    }

    /// Unmount: release everything and invalidate in-flight work.
    pub fn teardown(&mut self) {
        log::info!("Session gate torn down");
        self.intent = false;
        self.attempt = self.attempt.next();
        self.acquiring = None;
        self.popover.dismiss();
        self.tracks.release();
        self.sync_activity();
    }

    fn join(&mut self) -> Vec<GateEffect> {
        self.intent = true;
        self.attempt = self.attempt.next();
        self.acquiring = None;
        self.error = PermissionError::default();
        log::info!("Join requested (attempt {})", self.attempt.value());
        emit_gate_event(GateEvent::IntentChanged(true));

        match self
            .popover
            .plan(self.identity.policy(), self.config.probe_enabled)
        {
            JoinPlan::Probe => vec![GateEffect::Probe(self.attempt)],
            JoinPlan::AcquireDirectly => self.request_acquire(),
        }
    }

    fn exit(&mut self) {
        self.intent = false;
        // Anything still in flight belongs to the abandoned attempt.
        self.attempt = self.attempt.next();
        self.acquiring = None;
        if self.popover.dismiss() {
            log::info!("Permission popover closed by exit");
        }
        self.tracks.release();
        log::info!("Exit requested");
        emit_gate_event(GateEvent::IntentChanged(false));
    }

    fn request_acquire(&mut self) -> Vec<GateEffect> {
        if self.acquiring == Some(self.attempt) {
            log::debug!(
                "Acquisition already requested for attempt {}",
                self.attempt.value()
            );
            return Vec::new();
        }
        self.acquiring = Some(self.attempt);
        vec![GateEffect::Acquire(self.attempt)]
    }

    fn is_current(&self, attempt: AttemptId) -> bool {
        self.intent && attempt == self.attempt
    }

    fn discard_stale(&self, attempt: AttemptId, what: &str) {
        log::debug!(
            "Discarding stale {what} result for attempt {} (current {}, intent {})",
            attempt.value(),
            self.attempt.value(),
            self.intent
        );
        emit_gate_event(GateEvent::StaleResultDiscarded(attempt.value()));
    }

    fn on_probed(&mut self, attempt: AttemptId, report: ProbeReport) -> Vec<GateEffect> {
        if !self.is_current(attempt) {
            self.discard_stale(attempt, "probe");
            return Vec::new();
        }
        if let Some(failure) = &report.failure {
            // Recorded but non-blocking: the flow falls back to acquisition,
            // whose own outcome overwrites the record.
            self.error = PermissionError::from(failure);
            emit_gate_event(GateEvent::ProbeUnavailable(failure.to_string()));
        }
        emit_gate_event(GateEvent::ProbeCompleted {
            camera: report.status.camera,
            microphone: report.status.microphone,
        });

        match self.popover.on_probe(&report.status) {
            PopoverDecision::AcquireDirectly => self.request_acquire(),
            PopoverDecision::AwaitUserInput => {
                emit_gate_event(GateEvent::PopoverOpened);
                Vec::new()
            }
            PopoverDecision::AlreadyAwaiting => Vec::new(),
        }
    }

    fn on_popover(&mut self, event: PopoverEvent) -> Vec<GateEffect> {
        match self.popover.resolve(event) {
            None => Vec::new(),
            Some(PopoverOutcome::Submitted(profile)) => {
                emit_gate_event(GateEvent::PopoverResolved);
                self.profile = profile.clone();
                let mut effects = vec![GateEffect::PersistProfile(profile)];
                if self.intent {
                    effects.extend(self.request_acquire());
                }
                effects
            }
            Some(PopoverOutcome::Cancelled) => {
                // Intent stays as it is; without tracks the session is
                // simply not active.
                emit_gate_event(GateEvent::PopoverCancelled);
                Vec::new()
            }
        }
    }

    fn on_acquired(
        &mut self,
        attempt: AttemptId,
        result: Result<MediaTrackPair<T>, MediaAccessError>,
    ) {
        if !self.is_current(attempt) || self.acquiring != Some(attempt) {
            if let Ok(mut late) = result {
                log::info!("Releasing tracks acquired after the attempt ended");
                late.release();
            }
            self.discard_stale(attempt, "acquisition");
            return;
        }

        match result {
            Ok(pair) => {
                self.error = PermissionError::default();
                self.tracks.release();
                self.tracks = pair;
                emit_gate_event(GateEvent::PermissionGranted);
            }
            Err(e) => {
                log::warn!("Join attempt {} failed: {e}", attempt.value());
                self.error = PermissionError::from(&e);
                emit_gate_event(GateEvent::PermissionDenied(self.error.message.clone()));
            }
        }
    }

    fn sync_activity(&mut self) {
        let active = self.is_active();
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            log::info!("Session active");
            emit_gate_event(GateEvent::SessionActivated);
        } else {
            log::info!("Session inactive");
            emit_gate_event(GateEvent::SessionEnded);
        }
    }
}

impl<T: LocalTrack> Drop for SessionGate<T> {
    fn drop(&mut self) {
        self.tracks.release();
    }
}
