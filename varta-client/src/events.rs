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

//! Framework-agnostic events emitted by the session gate.
//!
//! These events are emitted via the event bus and can be subscribed to by any
//! frontend framework (Yew, Dioxus, Leptos, plain wasm-bindgen, etc.)

use crate::permissions::PermissionStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEvent {
    // === Intent ===
    /// The user toggled join/exit; carries the new intent.
    IntentChanged(bool),

    // === Probing ===
    /// The permission query answered (possibly with `Unsupported`).
    ProbeCompleted {
        camera: PermissionStatus,
        microphone: PermissionStatus,
    },

    /// The permission query failed; the flow falls back to acquisition.
    ProbeUnavailable(String),

    // === Popover ===
    PopoverOpened,
    PopoverResolved,
    PopoverCancelled,

    // === Acquisition ===
    /// Tracks were acquired for the current attempt.
    PermissionGranted,

    /// Acquisition failed; carries the user-visible message.
    PermissionDenied(String),

    // === Session ===
    SessionActivated,
    SessionEnded,

    /// A probe or acquisition result arrived for an outdated attempt.
    StaleResultDiscarded(u64),
}
