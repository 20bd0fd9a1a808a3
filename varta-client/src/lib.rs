//! This crate provides the browser-side permission controller for varta chat sessions.
//! It manages camera/microphone access and only lets the user into a session once both
//! tracks are live.
//!
//! The pieces, leaf-first:
//!
//! - [`browser`]: classifies the browser and maps it to a [`BrowserPolicy`].
//! - [`permissions`]: probes camera/microphone status without prompting (Chromium only).
//! - [`media`]: acquires one audio and one video track via `getUserMedia`.
//! - [`popover`]: decides when the consent/profile popover must be shown.
//! - [`gate`]: the session gate state machine that ties them together.
//! - [`driver`]: runs the gate's asynchronous effects and feeds results back.
//!
//! This crate makes no assumptions about the UI. Frameworks either hold a
//! [`SessionDriver`] and re-render from its `on_change` callback, or
//! subscribe to [`GateEvent`]s on the event bus.
//!
//! # Outline of usage
//!
//! ```ignore
//! let driver = SessionDriver::new(SessionDriverOptions {
//!     identity: browser::classify(),
//!     config: GateConfig::default(),
//!     capture: WebMediaCapture,
//!     permissions: Rc::new(WebPermissionQuery),
//!     store: Rc::new(LocalStorageProfileStore),
//!     on_change: Rc::new(|| { /* re-render */ }),
//! });
//!
//! driver.toggle();                    // join: probe, maybe open the popover
//! driver.submit_profile(profile);     // popover confirmed: acquire tracks
//! if driver.is_active() {
//!     driver.with_gate(|gate| gate.room_handoff().map(|room| { /* hand off */ }));
//! }
//! driver.request_exit();              // room asked to leave: tracks stopped
//! ```

pub mod browser;
pub mod config;
pub mod driver;
pub mod error;
pub mod event_bus;
pub mod events;
pub mod gate;
pub mod media;
pub mod permissions;
pub mod platform;
pub mod popover;
pub mod profile;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use browser::{classify, BrowserIdentity, BrowserPolicy};
pub use config::{truthy, GateConfig};
pub use driver::{SessionDriver, SessionDriverOptions};
pub use error::{MediaAccessError, PermissionError};
pub use event_bus::{emit_gate_event, global_gate_sender, subscribe_gate_events};
pub use events::GateEvent;
pub use gate::{AttemptId, GateEffect, GateMsg, GateSnapshot, RoomHandoff, SessionGate};
pub use media::{LocalTrack, MediaCapture, MediaTrackPair, TrackAcquirer, TrackKind};
pub use permissions::{
    Capability, CapabilityProber, CapabilityStatus, NoPermissionQuery, PermissionQuery,
    PermissionStatus, ProbeReport,
};
pub use popover::{PopoverController, PopoverEvent, PopoverState};
pub use profile::{is_valid_display_name, MemoryProfileStore, ProfileStore, UserProfile};
#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorageProfileStore, WebMediaCapture, WebPermissionQuery};
