// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout observer bridge: keeps an open overlay's position inputs fresh.
//!
//! ## Overview
//!
//! While active, the bridge holds one registration per configured window signal (resize,
//! capturing scroll, orientation change) and, once the panel element is known, a size-change
//! observer and a subtree-mutation observer on it. Panel content can change shape after open
//! without any window-level event firing; the observers cover that case.
//!
//! ## Throttling
//!
//! Every trigger funnels through one animation-frame request. While a frame is pending, further
//! triggers are coalesced into it, so recomputes never run more often than the display
//! refreshes, however many observers fire at once. The recompute itself happens when the host
//! delivers the frame, and reads the latest rectangles at that point.
//!
//! ## Teardown
//!
//! [`LayoutBridge::stop`] releases every registration and cancels the pending frame. It is
//! idempotent.

use alloc::vec::Vec;

use log::trace;

use crate::host::Host;
use crate::types::{FrameRequest, ListenerId, Signals, Source};

/// Frame-throttled subscription set for one overlay session.
#[derive(Clone, Debug)]
pub struct LayoutBridge<E> {
    signals: Signals,
    active: bool,
    window: Vec<ListenerId>,
    panel: Vec<ListenerId>,
    observed: Option<E>,
    frame: Option<FrameRequest>,
    mutated: bool,
}

impl<E: Copy + Eq> LayoutBridge<E> {
    /// Create an inactive bridge that will subscribe to `signals` once started.
    pub fn new(signals: Signals) -> Self {
        Self {
            signals,
            active: false,
            window: Vec::new(),
            panel: Vec::new(),
            observed: None,
            frame: None,
            mutated: false,
        }
    }

    /// Whether the bridge currently holds its subscriptions.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of live registrations held by this bridge.
    pub fn listener_count(&self) -> usize {
        self.window.len() + self.panel.len()
    }

    /// Whether a frame request is outstanding.
    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Subscribe to window signals and panel observers, then schedule the post-paint frame.
    ///
    /// Starting an active bridge only re-targets the panel observers.
    pub fn start<H: Host<E> + ?Sized>(&mut self, host: &mut H, panel: Option<E>) {
        if !self.active {
            self.active = true;
            for (flag, source) in [
                (Signals::RESIZE, Source::Resize),
                (Signals::SCROLL, Source::Scroll),
                (Signals::ORIENTATION, Source::OrientationChange),
            ] {
                if self.signals.contains(flag) {
                    self.window.push(host.listen(source));
                }
            }
        }
        self.observe_panel(host, panel);
        // The panel has not painted yet; correct the estimate on the next frame.
        self.schedule(host);
    }

    /// Point the panel observers at `panel`, dropping observers on any previous panel.
    ///
    /// Does nothing while the bridge is inactive; [`LayoutBridge::start`] attaches the
    /// observers then.
    pub fn observe_panel<H: Host<E> + ?Sized>(&mut self, host: &mut H, panel: Option<E>) {
        if !self.active || self.observed == panel {
            return;
        }
        for id in self.panel.drain(..) {
            host.unlisten(id);
        }
        self.observed = panel;
        if let Some(el) = panel {
            if self.signals.contains(Signals::PANEL_SIZE) {
                self.panel.push(host.listen(Source::PanelSize(el)));
            }
            if self.signals.contains(Signals::PANEL_MUTATION) {
                self.panel.push(host.listen(Source::PanelMutation(el)));
            }
        }
    }

    /// Record that `signals` fired and make sure a frame is scheduled.
    ///
    /// Returns `true` if this call requested a new frame, `false` if it was coalesced into a
    /// pending one (or the bridge is inactive).
    pub fn notify<H: Host<E> + ?Sized>(&mut self, host: &mut H, signals: Signals) -> bool {
        if !self.active {
            return false;
        }
        if signals.contains(Signals::PANEL_MUTATION) {
            self.mutated = true;
        }
        self.schedule(host)
    }

    /// Request a frame unless one is already pending.
    pub fn schedule<H: Host<E> + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.active {
            return false;
        }
        if self.frame.is_some() {
            trace!("relayout coalesced into pending frame");
            return false;
        }
        self.frame = Some(host.request_frame());
        true
    }

    /// Claim a delivered frame.
    ///
    /// Returns `Some(panel_mutated)` if `request` is this bridge's pending frame, clearing the
    /// pending state; stale or foreign requests return `None`.
    pub fn take_frame(&mut self, request: FrameRequest) -> Option<bool> {
        if !self.active || self.frame != Some(request) {
            return None;
        }
        self.frame = None;
        Some(core::mem::take(&mut self.mutated))
    }

    /// Release every registration and cancel the pending frame.
    pub fn stop<H: Host<E> + ?Sized>(&mut self, host: &mut H) {
        for id in self.window.drain(..).chain(self.panel.drain(..)) {
            host.unlisten(id);
        }
        if let Some(req) = self.frame.take() {
            host.cancel_frame(req);
        }
        self.observed = None;
        self.mutated = false;
        self.active = false;
    }
}
