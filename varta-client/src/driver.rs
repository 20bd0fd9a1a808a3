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

//! Async driver for the [`SessionGate`].
//!
//! The driver runs the gate's effects as local tasks and feeds their
//! completions back into the gate. It is the piece UI code talks to.

use crate::browser::BrowserIdentity;
use crate::config::GateConfig;
use crate::gate::{GateEffect, GateMsg, GateSnapshot, SessionGate};
use crate::media::{MediaCapture, TrackAcquirer};
use crate::permissions::{CapabilityProber, PermissionQuery};
use crate::platform;
use crate::popover::PopoverEvent;
use crate::profile::{ProfileStore, UserProfile};
use std::cell::RefCell;
use std::rc::Rc;

/// Collaborators and settings needed to mount a [`SessionDriver`].
pub struct SessionDriverOptions<C> {
    pub identity: BrowserIdentity,
    pub config: GateConfig,
    pub capture: C,
    pub permissions: Rc<dyn PermissionQuery>,
    pub store: Rc<dyn ProfileStore>,
    /// Called after every message the gate processes.
    pub on_change: Rc<dyn Fn()>,
}

struct Inner<C: MediaCapture> {
    gate: RefCell<SessionGate<C::Track>>,
    acquirer: TrackAcquirer<C>,
    prober: CapabilityProber,
    store: Rc<dyn ProfileStore>,
    on_change: Rc<dyn Fn()>,
}

/// Cheap to clone; all clones drive the same gate.
pub struct SessionDriver<C: MediaCapture> {
    inner: Rc<Inner<C>>,
}

impl<C: MediaCapture> Clone for SessionDriver<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: MediaCapture + 'static> SessionDriver<C> {
    /// Mount the gate. The stored profile is read once, here.
    pub fn new(options: SessionDriverOptions<C>) -> Self {
        let profile = options.store.load();
        let gate = SessionGate::new(options.identity, profile, options.config);
        Self {
            inner: Rc::new(Inner {
                gate: RefCell::new(gate),
                acquirer: TrackAcquirer::new(options.capture),
                prober: CapabilityProber::new(options.permissions),
                store: options.store,
                on_change: options.on_change,
            }),
        }
    }

    pub fn toggle(&self) {
        self.dispatch(GateMsg::Toggle);
    }

    /// Exit callback handed to the room.
    pub fn request_exit(&self) {
        self.dispatch(GateMsg::ExitRequested);
    }

    pub fn submit_profile(&self, profile: UserProfile) {
        self.dispatch(GateMsg::Popover(PopoverEvent::Resolved { profile }));
    }

    pub fn cancel_popover(&self) {
        self.dispatch(GateMsg::Popover(PopoverEvent::Cancelled));
    }

    pub fn is_active(&self) -> bool {
        self.inner.gate.borrow().is_active()
    }

    pub fn snapshot(&self) -> GateSnapshot {
        self.inner.gate.borrow().snapshot()
    }

    /// Read access to the gate, e.g. for the room hand-off.
    pub fn with_gate<R>(&self, f: impl FnOnce(&SessionGate<C::Track>) -> R) -> R {
        f(&self.inner.gate.borrow())
    }

    /// Unmount: releases tracks; later completions are discarded.
    pub fn teardown(&self) {
        self.inner.gate.borrow_mut().teardown();
    }

    fn dispatch(&self, msg: GateMsg<C::Track>) {
        let effects = self.inner.gate.borrow_mut().handle(msg);
        (self.inner.on_change)();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: GateEffect) {
        match effect {
            GateEffect::Probe(attempt) => {
                let driver = self.clone();
                let identity = self.inner.gate.borrow().identity();
                platform::spawn_local(async move {
                    let report = driver.inner.prober.probe(identity).await;
                    driver.dispatch(GateMsg::Probed { attempt, report });
                });
            }
            GateEffect::Acquire(attempt) => {
                let driver = self.clone();
                platform::spawn_local(async move {
                    let result = driver.inner.acquirer.acquire().await;
                    driver.dispatch(GateMsg::Acquired { attempt, result });
                });
            }
            GateEffect::PersistProfile(profile) => {
                if let Err(e) = self.inner.store.save(&profile) {
                    log::warn!("Failed to persist profile: {e}");
                }
            }
        }
    }
}
