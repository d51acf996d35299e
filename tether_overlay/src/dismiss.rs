// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal controller: close an overlay on presses outside of it.
//!
//! ## Overview
//!
//! While armed, the controller holds a document-level pointer-down and a touch-start
//! registration. A press dismisses the overlay when its target lies structurally outside both
//! the trigger and the panel subtrees. Presses on nested interactive children of the panel
//! (for example a tooltip button inside a dropdown row) are inside by construction, whether or
//! not their handlers stopped propagation.

use alloc::vec::Vec;
use core::marker::PhantomData;

use tether_geometry::{ParentLookup, is_within};

use crate::host::Host;
use crate::types::{Dismissed, ListenerId, Source};

/// Whether a press on `target` lies outside both `trigger` and `panel`.
///
/// A missing target (the document itself, or an element the host cannot resolve) is outside.
/// Missing trigger or panel handles contain nothing.
pub fn is_outside<E, T>(
    tree: &T,
    target: Option<E>,
    trigger: Option<E>,
    panel: Option<E>,
) -> bool
where
    E: Copy + Eq,
    T: ParentLookup<E> + ?Sized,
{
    let Some(target) = target else {
        return true;
    };
    let inside = |root: Option<E>| root.is_some_and(|r| is_within(tree, target, r));
    !inside(trigger) && !inside(panel)
}

/// Outside-press listener set for one overlay.
#[derive(Clone, Debug)]
pub struct Dismissal<E> {
    listeners: Vec<ListenerId>,
    _phantom: PhantomData<fn() -> E>,
}

impl<E> Default for Dismissal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Dismissal<E> {
    /// Create a disarmed controller.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Whether the controller currently listens for presses.
    pub fn is_armed(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Number of live registrations held by this controller.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E: Copy + Eq> Dismissal<E> {
    /// Start listening for pointer-down and touch-start. Idempotent.
    pub fn arm<H: Host<E> + ?Sized>(&mut self, host: &mut H) {
        if self.is_armed() {
            return;
        }
        self.listeners.push(host.listen(Source::PointerDown));
        self.listeners.push(host.listen(Source::TouchStart));
    }

    /// Stop listening. Idempotent.
    pub fn disarm<H: Host<E> + ?Sized>(&mut self, host: &mut H) {
        for id in self.listeners.drain(..) {
            host.unlisten(id);
        }
    }

    /// Classify a press delivered through this controller's registrations.
    ///
    /// Returns [`Dismissed`] for an outside press while armed. Presses while disarmed (late
    /// deliveries after close) never dismiss.
    pub fn press<T: ParentLookup<E> + ?Sized>(
        &self,
        tree: &T,
        target: Option<E>,
        trigger: Option<E>,
        panel: Option<E>,
    ) -> Option<Dismissed> {
        (self.is_armed() && is_outside(tree, target, trigger, panel)).then_some(Dismissed)
    }
}
