// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay session: one open/close lifecycle for a dropdown, tooltip, or action menu.
//!
//! ## Overview
//!
//! A session composes the position calculator, the [`LayoutBridge`] and the [`Dismissal`]
//! controller. The host creates one session per overlay when the owning component mounts and
//! forwards the events the session registered for:
//!
//! - layout signals → [`OverlaySession::layout_changed`],
//! - "the panel painted" → [`OverlaySession::panel_measured`],
//! - animation frames → [`OverlaySession::frame`],
//! - pointer-down / touch-start → [`OverlaySession::pointer_down`].
//!
//! ## Lifecycle
//!
//! - [`open`](OverlaySession::open): mark open, compute a position from the best available
//!   size, start the bridge (which schedules the post-paint correction), arm dismissal.
//! - [`close`](OverlaySession::close): disarm dismissal, stop the bridge, drop the position.
//!   Idempotent.
//! - Re-entrant `open` forces a synchronous recompute and nothing else.
//!
//! Sessions share nothing. Nested overlays (a tooltip inside a dropdown row) each own a
//! session; structural containment keeps the inner press from dismissing the outer panel.

use log::debug;
use tether_geometry::{Placement, Position, compute_position};

use crate::bridge::LayoutBridge;
use crate::dismiss::Dismissal;
use crate::host::Host;
use crate::normalize::{RoleAccess, RoleCleanup};
use crate::types::{Dismissed, FrameRequest, Flush, OverlayConfig, Signals};

/// Open/close lifecycle of one anchored overlay.
///
/// ## Usage
///
/// ```
/// use kurbo::{Rect, Size};
/// use tether_geometry::{ParentLookup, Placement};
/// use tether_overlay::host::Host;
/// use tether_overlay::session::OverlaySession;
/// use tether_overlay::types::{FrameRequest, ListenerId, OverlayConfig, Source};
///
/// // A host with one trigger (1) and nothing else mounted.
/// #[derive(Default)]
/// struct Page { next: u64, frames: Vec<FrameRequest> }
///
/// impl ParentLookup<u32> for Page {
///     fn parent_of(&self, _node: &u32) -> Option<u32> { None }
/// }
///
/// impl Host<u32> for Page {
///     fn viewport(&self) -> Size { Size::new(1024.0, 768.0) }
///     fn rect_of(&self, el: &u32) -> Option<Rect> {
///         (*el == 1).then(|| Rect::from_origin_size((100.0, 100.0), (120.0, 40.0)))
///     }
///     fn listen(&mut self, _source: Source<u32>) -> ListenerId {
///         self.next += 1;
///         ListenerId(self.next)
///     }
///     fn unlisten(&mut self, _id: ListenerId) {}
///     fn request_frame(&mut self) -> FrameRequest {
///         self.next += 1;
///         self.frames.push(FrameRequest(self.next));
///         FrameRequest(self.next)
///     }
///     fn cancel_frame(&mut self, req: FrameRequest) { self.frames.retain(|f| *f != req); }
/// }
///
/// let mut page = Page::default();
/// let mut session = OverlaySession::new(Placement::default(), OverlayConfig::default());
/// let pos = session.open(&mut page, 1).unwrap();
/// assert_eq!((pos.top, pos.left), (144.0, 100.0));
///
/// session.close(&mut page);
/// assert!(page.frames.is_empty());
/// assert!(session.position().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct OverlaySession<E> {
    placement: Placement,
    config: OverlayConfig,
    trigger: Option<E>,
    panel: Option<E>,
    open: bool,
    position: Option<Position>,
    bridge: LayoutBridge<E>,
    dismissal: Dismissal<E>,
}

impl<E: Copy + Eq + core::fmt::Debug> OverlaySession<E> {
    /// Create a closed session.
    pub fn new(placement: Placement, config: OverlayConfig) -> Self {
        Self {
            placement,
            config,
            trigger: None,
            panel: None,
            open: false,
            position: None,
            bridge: LayoutBridge::new(config.signals),
            dismissal: Dismissal::new(),
        }
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The most recently computed position; `None` while closed or before the first pass.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The placement this session was created with.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// The session configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The trigger element of the current (or last) open.
    pub fn trigger(&self) -> Option<E> {
        self.trigger
    }

    /// The panel element, once the host has rendered it.
    pub fn panel(&self) -> Option<E> {
        self.panel
    }

    /// Number of host registrations currently owned by this session.
    pub fn listener_count(&self) -> usize {
        self.bridge.listener_count() + self.dismissal.listener_count()
    }

    /// Whether this session is waiting on an animation frame.
    pub fn has_pending_frame(&self) -> bool {
        self.bridge.has_pending_frame()
    }

    /// Open the overlay anchored to `trigger` and return the initial position.
    ///
    /// When already open, adopts `trigger` and recomputes synchronously; subscriptions are not
    /// touched. Returns `None` if the trigger is not mounted.
    pub fn open<H: Host<E> + ?Sized>(&mut self, host: &mut H, trigger: E) -> Option<Position> {
        self.trigger = Some(trigger);
        if self.open {
            return self.recompute(host);
        }
        self.open = true;
        debug!("overlay open: trigger={trigger:?}");
        let position = self.recompute(host);
        self.bridge.start(host, self.panel);
        self.dismissal.arm(host);
        position
    }

    /// Close the overlay, releasing every registration and pending frame. Idempotent.
    pub fn close<H: Host<E> + ?Sized>(&mut self, host: &mut H) {
        self.dismissal.disarm(host);
        self.bridge.stop(host);
        self.position = None;
        if self.open {
            self.open = false;
            debug!("overlay closed: trigger={:?}", self.trigger);
        }
    }

    /// Close if open, otherwise open on `trigger`. Returns the new open state.
    pub fn toggle<H: Host<E> + ?Sized>(&mut self, host: &mut H, trigger: E) -> bool {
        if self.open {
            self.close(host);
        } else {
            self.open(host, trigger);
        }
        self.open
    }

    /// Tell the session which element is its panel (`None` when the panel unmounts).
    ///
    /// While open, panel observers follow the new element and a recompute is scheduled.
    pub fn set_panel<H: Host<E> + ?Sized>(&mut self, host: &mut H, panel: Option<E>) {
        if self.panel == panel {
            return;
        }
        self.panel = panel;
        if self.open {
            self.bridge.observe_panel(host, panel);
            self.bridge.schedule(host);
        }
    }

    /// A registered layout source fired.
    pub fn layout_changed<H: Host<E> + ?Sized>(&mut self, host: &mut H, signals: Signals) {
        if self.open {
            self.bridge.notify(host, signals);
        }
    }

    /// The panel has painted and can be measured; schedule the corrective recompute.
    pub fn panel_measured<H: Host<E> + ?Sized>(&mut self, host: &mut H) {
        if self.open {
            self.bridge.schedule(host);
        }
    }

    /// Deliver an animation frame.
    ///
    /// Returns `None` if the frame does not belong to this session (stale, foreign, or
    /// delivered after close). Otherwise recomputes once, using the rectangles current at this
    /// moment.
    pub fn frame<H: Host<E> + ?Sized>(
        &mut self,
        host: &mut H,
        request: FrameRequest,
    ) -> Option<Flush> {
        let panel_mutated = self.bridge.take_frame(request)?;
        let position = self.recompute(host);
        Some(Flush {
            position,
            panel_mutated,
        })
    }

    /// Deliver an animation frame and, if the panel mutated, run `cleanup` over it.
    pub fn frame_with_cleanup<H: Host<E> + RoleAccess<E> + ?Sized>(
        &mut self,
        host: &mut H,
        request: FrameRequest,
        cleanup: &RoleCleanup,
    ) -> Option<Flush> {
        let flush = self.frame(host, request)?;
        if let (true, Some(panel)) = (flush.panel_mutated, self.panel) {
            cleanup.apply(host, &panel);
        }
        Some(flush)
    }

    /// Deliver a document-level pointer-down or touch-start on `target`.
    ///
    /// An outside press closes the session and returns [`Dismissed`]. A touch-start followed by
    /// its compatibility mouse-down therefore dismisses once.
    pub fn pointer_down<H: Host<E> + ?Sized>(
        &mut self,
        host: &mut H,
        target: Option<E>,
    ) -> Option<Dismissed> {
        if !self.open {
            return None;
        }
        let dismissed = self
            .dismissal
            .press(&*host, target, self.trigger, self.panel)?;
        debug!("overlay dismissed by outside press: target={target:?}");
        self.close(host);
        Some(dismissed)
    }

    /// Recompute from the host's current geometry.
    ///
    /// Skipped (returning `None`, keeping the previous position) when the trigger is not
    /// mounted, or when a panel handle is set but the panel is not mounted. A session without a
    /// panel handle yet uses the size estimate.
    fn recompute<H: Host<E> + ?Sized>(&mut self, host: &H) -> Option<Position> {
        let trigger = self.trigger?;
        let Some(trigger_rect) = host.rect_of(&trigger) else {
            debug!("relayout skipped: trigger {trigger:?} not mounted");
            return None;
        };
        let panel_size = match self.panel {
            Some(panel) => match host.rect_of(&panel) {
                Some(r) => Some(r.size()),
                None => {
                    debug!("relayout skipped: panel {panel:?} not mounted");
                    return None;
                }
            },
            None => None,
        };
        let position = compute_position(
            trigger_rect,
            host.viewport(),
            &self.placement,
            panel_size,
            &self.config.position,
        );
        self.position = Some(position);
        Some(position)
    }
}
