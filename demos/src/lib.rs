// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toy page and clock for the demos.
//!
//! [`ToyPage`] stands in for a DOM: elements are `u32` ids with a parent, a rectangle, an
//! optional ARIA role, and an "interactive" flag. It records listener registrations and frame
//! requests so the demos can show what a session asked for. [`ToyClock`] is a manual timer
//! queue.

use std::collections::BTreeMap;
use std::time::Duration;

use kurbo::{Rect, Size};
use tether_gesture::{DragTargets, TimerId, Timers};
use tether_geometry::{ParentLookup, is_within};
use tether_overlay::{FrameRequest, Host, ListenerId, RoleAccess, Source};

/// One element on the toy page.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Parent element, `None` for the document root.
    pub parent: Option<u32>,
    /// Bounds in viewport coordinates; `None` while not mounted.
    pub rect: Option<Rect>,
    /// ARIA role attribute.
    pub role: Option<String>,
    /// Whether presses on this element belong to a control.
    pub interactive: bool,
}

/// An in-memory page implementing every host trait the engine needs.
#[derive(Debug)]
pub struct ToyPage {
    /// Viewport size.
    pub viewport: Size,
    /// Elements by id.
    pub elements: BTreeMap<u32, Element>,
    listeners: BTreeMap<ListenerId, Source<u32>>,
    frames: Vec<FrameRequest>,
    next: u64,
}

impl ToyPage {
    /// An empty page with the given viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Size::new(width, height),
            elements: BTreeMap::new(),
            listeners: BTreeMap::new(),
            frames: Vec::new(),
            next: 0,
        }
    }

    /// Insert or replace an element.
    pub fn mount(&mut self, id: u32, parent: Option<u32>, rect: Rect) -> &mut Element {
        let el = self.elements.entry(id).or_default();
        el.parent = parent;
        el.rect = Some(rect);
        el
    }

    /// Move an element without changing its parent.
    pub fn set_rect(&mut self, id: u32, rect: Rect) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.rect = Some(rect);
        }
    }

    /// Live listener registrations.
    pub fn listeners(&self) -> impl Iterator<Item = &Source<u32>> {
        self.listeners.values()
    }

    /// Hand the pending frame requests to the caller, as a frame callback would.
    pub fn take_frames(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.frames)
    }
}

impl ParentLookup<u32> for ToyPage {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.elements.get(node).and_then(|e| e.parent)
    }
}

impl Host<u32> for ToyPage {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn rect_of(&self, element: &u32) -> Option<Rect> {
        self.elements.get(element).and_then(|e| e.rect)
    }

    fn listen(&mut self, source: Source<u32>) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        log::trace!("listen {id:?} -> {source:?}");
        self.listeners.insert(id, source);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next += 1;
        let req = FrameRequest(self.next);
        self.frames.push(req);
        req
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.frames.retain(|f| *f != request);
    }
}

impl RoleAccess<u32> for ToyPage {
    fn subtree(&self, root: &u32) -> Vec<u32> {
        self.elements
            .keys()
            .copied()
            .filter(|id| is_within(self, *id, *root))
            .collect()
    }

    fn role_of(&self, element: &u32) -> Option<&str> {
        self.elements.get(element).and_then(|e| e.role.as_deref())
    }

    fn remove_role(&mut self, element: &u32) {
        if let Some(el) = self.elements.get_mut(element) {
            el.role = None;
        }
    }
}

impl DragTargets<u32> for ToyPage {
    fn is_interactive(&self, element: &u32) -> bool {
        self.elements.get(element).is_some_and(|e| e.interactive)
    }
}

/// A manual timer queue.
#[derive(Debug, Default)]
pub struct ToyClock {
    /// Current time.
    pub now: Duration,
    pending: Vec<(TimerId, Duration)>,
    next: u64,
}

impl ToyClock {
    /// Advance to `to` and return the timers that expired, in deadline order.
    pub fn advance(&mut self, to: Duration) -> Vec<TimerId> {
        self.now = to;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(_, at)| *at <= now);
        self.pending = rest;
        due.sort_by_key(|(_, at)| *at);
        due.into_iter().map(|(id, _)| id).collect()
    }
}

impl Timers for ToyClock {
    fn start_timer(&mut self, after: Duration) -> TimerId {
        self.next += 1;
        let id = TimerId(self.next);
        self.pending.push((id, self.now + after));
        id
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.pending.retain(|(t, _)| *t != id);
    }
}
