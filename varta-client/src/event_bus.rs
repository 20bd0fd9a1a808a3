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

//! Global event bus for gate events.
//!
//! A MPMC broadcast channel: any component can subscribe, the gate emits.
//!
//! # Example
//!
//! ```ignore
//! use varta_client::{subscribe_gate_events, GateEvent};
//!
//! let mut rx = subscribe_gate_events();
//! wasm_bindgen_futures::spawn_local(async move {
//!     while let Ok(event) = rx.recv().await {
//!         if let GateEvent::PermissionDenied(message) = event {
//!             log::warn!("camera/mic blocked: {message}");
//!         }
//!     }
//! });
//! ```

use crate::events::GateEvent;
use async_broadcast::{broadcast, InactiveReceiver, Receiver, Sender};
use once_cell::sync::Lazy;

/// Capacity of the event bus channel
pub const EVENT_BUS_CAPACITY: usize = 64;

struct Bus {
    sender: Sender<GateEvent>,
    // Keeps the channel open while nobody is subscribed.
    _keepalive: InactiveReceiver<GateEvent>,
}

static BUS: Lazy<Bus> = Lazy::new(|| {
    let (mut sender, receiver) = broadcast(EVENT_BUS_CAPACITY);
    sender.set_overflow(true);
    Bus {
        sender,
        _keepalive: receiver.deactivate(),
    }
});

/// Get a clone of the global sender.
pub fn global_gate_sender() -> Sender<GateEvent> {
    BUS.sender.clone()
}

/// Subscribe to gate events.
///
/// Each subscriber receives every event emitted after it subscribed.
pub fn subscribe_gate_events() -> Receiver<GateEvent> {
    BUS.sender.new_receiver()
}

/// Emit an event to all subscribers.
///
/// Never blocks. Without active subscribers the event is dropped; when the
/// channel is full the oldest event is dropped.
pub fn emit_gate_event(event: GateEvent) {
    let _ = BUS.sender.try_broadcast(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscribers_does_not_panic() {
        emit_gate_event(GateEvent::SessionEnded);
        emit_gate_event(GateEvent::PermissionDenied("nope".to_string()));
    }

    #[test]
    fn test_subscriber_receives_event() {
        let mut rx = subscribe_gate_events();
        emit_gate_event(GateEvent::StaleResultDiscarded(987_654));

        let mut seen = false;
        loop {
            match rx.try_recv() {
                Ok(event) => seen |= event == GateEvent::StaleResultDiscarded(987_654),
                Err(async_broadcast::TryRecvError::Overflowed(_)) => continue,
                Err(_) => break,
            }
        }
        assert!(seen);
    }

    #[test]
    fn test_sender_capacity() {
        assert_eq!(global_gate_sender().capacity(), EVENT_BUS_CAPACITY);
    }
}
