// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unified pointer input for mouse, touch, and pen.
//!
//! ## Overview
//!
//! Recognizers in this crate consume one [`PointerEvent`] type regardless of the input device.
//! Hosts build it with [`PointerEvent::from_mouse`] or [`PointerEvent::from_touches`] (or
//! [`PointerEvent::new`] for pen and native pointer streams).
//!
//! After a touch, browsers emit compatibility mouse events for the same tap. Feed every event
//! through a [`PointerFilter`] first so that each physical tap reaches the recognizers once.

use core::time::Duration;

use kurbo::Point;

/// Mouse events arriving this soon after touch activity are treated as compatibility events.
pub const DEFAULT_GHOST_WINDOW: Duration = Duration::from_millis(700);

/// The device that produced a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad.
    Mouse,
    /// Finger on a touch screen.
    Touch,
    /// Stylus.
    Pen,
}

/// Where in a press a pointer event falls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed or contact started.
    Down,
    /// Pointer moved.
    Move,
    /// Button released or contact ended.
    Up,
    /// Pointer left the element.
    Leave,
    /// The platform took the pointer away (scroll takeover, system gesture).
    Cancel,
}

/// A device-independent pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Phase of the press.
    pub phase: PointerPhase,
    /// Position in viewport coordinates.
    pub position: Point,
    /// Input device.
    pub kind: PointerKind,
    /// Host timestamp, relative to any fixed origin.
    pub timestamp: Duration,
}

impl PointerEvent {
    /// Create an event from its parts.
    pub fn new(
        phase: PointerPhase,
        kind: PointerKind,
        position: impl Into<Point>,
        timestamp: Duration,
    ) -> Self {
        Self {
            phase,
            position: position.into(),
            kind,
            timestamp,
        }
    }

    /// A mouse event at `(x, y)`.
    pub fn from_mouse(phase: PointerPhase, x: f64, y: f64, timestamp: Duration) -> Self {
        Self::new(phase, PointerKind::Mouse, (x, y), timestamp)
    }

    /// A touch event from the changed touch points of a DOM-style touch event.
    ///
    /// The first point is used. Returns `None` for an empty list.
    pub fn from_touches(
        phase: PointerPhase,
        touches: &[Point],
        timestamp: Duration,
    ) -> Option<Self> {
        let first = touches.first()?;
        Some(Self::new(phase, PointerKind::Touch, *first, timestamp))
    }
}

/// Drops compatibility mouse events that follow touch input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointerFilter {
    /// How long after the last touch event mouse events are dropped.
    pub ghost_window: Duration,
    last_touch: Option<Duration>,
}

impl Default for PointerFilter {
    fn default() -> Self {
        Self::new(DEFAULT_GHOST_WINDOW)
    }
}

impl PointerFilter {
    /// Create a filter with the given ghost window.
    pub fn new(ghost_window: Duration) -> Self {
        Self {
            ghost_window,
            last_touch: None,
        }
    }

    /// Whether `event` should be delivered to recognizers.
    ///
    /// Touch and pen events always pass. Mouse events pass unless they fall within the ghost
    /// window of the most recent touch event.
    pub fn accept(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerKind::Touch => {
                self.last_touch = Some(event.timestamp);
                true
            }
            PointerKind::Pen => true,
            PointerKind::Mouse => match self.last_touch {
                Some(t) if event.timestamp.saturating_sub(t) <= self.ghost_window => {
                    log::trace!("dropped compatibility mouse event: {:?}", event.phase);
                    false
                }
                _ => true,
            },
        }
    }
}
