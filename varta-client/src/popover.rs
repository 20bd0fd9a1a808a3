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

//! Permission popover controller.
//!
//! Decides whether a join attempt must go through the consent/profile
//! popover or may call the track acquirer straight away, and owns the
//! popover's open/closed flag. Other components only read that flag.

use crate::browser::BrowserPolicy;
use crate::permissions::CapabilityStatus;
use crate::profile::UserProfile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopoverState {
    #[default]
    Closed,
    AwaitingUserInput,
}

/// Messages the popover UI sends back to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopoverEvent {
    Resolved { profile: UserProfile },
    Cancelled,
}

/// First step of a join attempt, taken before anything asynchronous runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinPlan {
    /// Query the permission subsystem first.
    Probe,
    /// Skip probing and the popover; acquire tracks now.
    AcquireDirectly,
}

/// What to do once the probe result is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopoverDecision {
    AcquireDirectly,
    /// Popover opened; acquisition waits for the user.
    AwaitUserInput,
    /// Popover was already open; nothing changes.
    AlreadyAwaiting,
}

/// Outcome of a popover event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopoverOutcome {
    Submitted(UserProfile),
    Cancelled,
}

#[derive(Clone, Debug, Default)]
pub struct PopoverController {
    state: PopoverState,
}

impl PopoverController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PopoverState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopoverState::AwaitingUserInput
    }

    pub fn plan(&self, policy: BrowserPolicy, probe_enabled: bool) -> JoinPlan {
        if policy.supports_probe && probe_enabled {
            JoinPlan::Probe
        } else {
            JoinPlan::AcquireDirectly
        }
    }

    /// Evaluate a probe result.
    ///
    /// Both capabilities granted: no popover. A failed probe (`Unsupported`)
    /// falls back to direct acquisition. Anything else opens the popover,
    /// unless it is already open.
    pub fn on_probe(&mut self, status: &CapabilityStatus) -> PopoverDecision {
        if self.is_open() {
            return PopoverDecision::AlreadyAwaiting;
        }
        if status.all_granted() || status.any_unsupported() {
            return PopoverDecision::AcquireDirectly;
        }
        log::info!("Opening permission popover");
        self.state = PopoverState::AwaitingUserInput;
        PopoverDecision::AwaitUserInput
    }

    /// Apply a popover event. Events arriving while closed are ignored.
    pub fn resolve(&mut self, event: PopoverEvent) -> Option<PopoverOutcome> {
        if !self.is_open() {
            log::debug!("Ignoring popover event while closed: {event:?}");
            return None;
        }
        self.state = PopoverState::Closed;
        match event {
            PopoverEvent::Resolved { profile } => {
                log::info!("Permission popover submitted");
                Some(PopoverOutcome::Submitted(profile))
            }
            PopoverEvent::Cancelled => {
                log::info!("Permission popover cancelled");
                Some(PopoverOutcome::Cancelled)
            }
        }
    }

    /// Close without an outcome, e.g. when the user exits mid-attempt.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = PopoverState::Closed;
        was_open
    }
}
