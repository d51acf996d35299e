// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: geometry reads, event registration, and frame scheduling.
//!
//! A session never owns an event loop. Whatever drives the UI (a DOM binding, a native toolkit,
//! a test double) implements [`Host`] and forwards the events it registered for back into the
//! session.

use kurbo::{Rect, Size};
use tether_geometry::ParentLookup;

use crate::types::{FrameRequest, ListenerId, Source};

/// Services a host provides to overlay sessions.
///
/// The [`ParentLookup`] supertrait exposes the element hierarchy used for structural
/// containment checks.
pub trait Host<E>: ParentLookup<E> {
    /// Current viewport size. Read fresh on every recompute.
    fn viewport(&self) -> Size;

    /// On-screen bounds of `element`, or `None` if it is not mounted.
    fn rect_of(&self, element: &E) -> Option<Rect>;

    /// Register a listener or observer and return its handle.
    fn listen(&mut self, source: Source<E>) -> ListenerId;

    /// Remove a registration previously returned by [`Host::listen`].
    ///
    /// Sessions never pass the same handle twice.
    fn unlisten(&mut self, id: ListenerId);

    /// Ask for a callback on the next animation frame.
    fn request_frame(&mut self) -> FrameRequest;

    /// Cancel a frame request.
    ///
    /// The request may already have been dequeued by the event loop; unknown requests must be
    /// ignored.
    fn cancel_frame(&mut self, request: FrameRequest);
}
