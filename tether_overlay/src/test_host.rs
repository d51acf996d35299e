// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host used by the unit tests.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use tether_geometry::ParentLookup;

use crate::host::Host;
use crate::normalize::RoleAccess;
use crate::types::{FrameRequest, ListenerId, Source};

#[derive(Debug, Default)]
pub(crate) struct TestHost {
    pub(crate) viewport: Size,
    pub(crate) rects: BTreeMap<u32, Rect>,
    pub(crate) parents: BTreeMap<u32, u32>,
    pub(crate) roles: BTreeMap<u32, &'static str>,
    listeners: BTreeMap<ListenerId, Source<u32>>,
    frames: Vec<FrameRequest>,
    next: u64,
    pub(crate) frames_requested: usize,
    pub(crate) stale_removals: usize,
}

impl TestHost {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Size::new(width, height),
            ..Default::default()
        }
    }

    pub(crate) fn mount(&mut self, el: u32, parent: Option<u32>, rect: Rect) {
        self.rects.insert(el, rect);
        if let Some(p) = parent {
            self.parents.insert(el, p);
        }
    }

    pub(crate) fn unmount(&mut self, el: u32) {
        self.rects.remove(&el);
    }

    pub(crate) fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn has_source(&self, source: Source<u32>) -> bool {
        self.listeners.values().any(|s| *s == source)
    }

    pub(crate) fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Take the pending frame requests, as the event loop would when a frame starts.
    pub(crate) fn take_frames(&mut self) -> Vec<FrameRequest> {
        core::mem::take(&mut self.frames)
    }
}

impl ParentLookup<u32> for TestHost {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.parents.get(node).copied()
    }
}

impl Host<u32> for TestHost {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn rect_of(&self, element: &u32) -> Option<Rect> {
        self.rects.get(element).copied()
    }

    fn listen(&mut self, source: Source<u32>) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.listeners.insert(id, source);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_none() {
            self.stale_removals += 1;
        }
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next += 1;
        self.frames_requested += 1;
        let req = FrameRequest(self.next);
        self.frames.push(req);
        req
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let before = self.frames.len();
        self.frames.retain(|f| *f != request);
        if self.frames.len() == before {
            self.stale_removals += 1;
        }
    }
}

impl RoleAccess<u32> for TestHost {
    fn subtree(&self, root: &u32) -> Vec<u32> {
        self.rects
            .keys()
            .copied()
            .filter(|el| tether_geometry::is_within(self, *el, *root))
            .collect()
    }

    fn role_of(&self, element: &u32) -> Option<&str> {
        self.roles.get(element).copied()
    }

    fn remove_role(&mut self, element: &u32) {
        self.roles.remove(element);
    }
}
