// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click versus long-press disambiguation.
//!
//! ## Overview
//!
//! A [`PressRecognizer`] turns one element's down → move* → up sequence into at most one
//! [`Gesture`]:
//!
//! - held past [`PressConfig::long_press`] without moving → [`Gesture::LongPress`], and the
//!   following release produces nothing;
//! - released before that → [`Gesture::Click`];
//! - moved farther than [`PressConfig::move_tolerance`] first → nothing (the press is treated
//!   as the start of a scroll or drag).
//!
//! ## States
//!
//! ```text
//! Idle ──down──▶ Pressing ──timer──▶ LongPressed ──up──▶ Idle
//!                   │ ╰─────move > tolerance──▶ Cancelled ──up──▶ Idle
//!                   ╰──up (Click)──▶ Idle
//! ```
//!
//! Leave and cancel end the press from any state without a gesture.
//!
//! ## Timers
//!
//! The recognizer never sleeps. It asks a [`Timers`] host for one timer per press and expects
//! [`PressRecognizer::timer_fired`] when it expires. Every exit from `Pressing` cancels the
//! timer before returning, and an expiry that does not match the live timer is ignored.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use tether_gesture::press::{Gesture, PressRecognizer, TimerId, Timers};
//!
//! #[derive(Default)]
//! struct Clock { next: u64, live: Vec<TimerId> }
//! impl Timers for Clock {
//!     fn start_timer(&mut self, _after: Duration) -> TimerId {
//!         self.next += 1;
//!         self.live.push(TimerId(self.next));
//!         TimerId(self.next)
//!     }
//!     fn cancel_timer(&mut self, id: TimerId) { self.live.retain(|t| *t != id); }
//! }
//!
//! let mut clock = Clock::default();
//! let mut press = PressRecognizer::default();
//!
//! // Quick tap.
//! assert_eq!(press.down(&mut clock, (100.0, 100.0)), None);
//! assert_eq!(press.up(&mut clock), Some(Gesture::Click));
//! assert!(clock.live.is_empty());
//!
//! // Held until the timer fires.
//! press.down(&mut clock, (100.0, 100.0));
//! let timer = clock.live[0];
//! assert_eq!(press.timer_fired(timer), Some(Gesture::LongPress));
//! assert_eq!(press.up(&mut clock), None);
//! ```

use core::time::Duration;

use kurbo::Point;
use log::trace;
use tether_geometry::exceeds;

use crate::pointer::{PointerEvent, PointerPhase};

/// Default hold time before a press becomes a long press.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// Default distance, in pixels, a press may travel before it is cancelled.
pub const DEFAULT_MOVE_TOLERANCE: f64 = 10.0;

/// Handle for a one-shot timer, minted by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// One-shot timers provided by the host.
pub trait Timers {
    /// Start a timer that expires after `after`; the host later reports the returned id.
    fn start_timer(&mut self, after: Duration) -> TimerId;

    /// Cancel a timer. Cancelling an expired or unknown timer must be harmless.
    fn cancel_timer(&mut self, id: TimerId);
}

/// Thresholds for a [`PressRecognizer`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PressConfig {
    /// Hold time before the press becomes a long press. Zero fires on down.
    pub long_press: Duration,
    /// Travel allowed before the press is cancelled. Non-positive values cancel on any
    /// movement.
    pub move_tolerance: f64,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            long_press: DEFAULT_LONG_PRESS,
            move_tolerance: DEFAULT_MOVE_TOLERANCE,
        }
    }
}

/// Where a press is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PressState {
    /// No press.
    #[default]
    Idle,
    /// Down, timer running, not yet moved out of tolerance.
    Pressing,
    /// The long press fired; the release will be swallowed.
    LongPressed,
    /// Moved out of tolerance; the release will be swallowed.
    Cancelled,
}

/// A recognized gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Short press and release in place.
    Click,
    /// Press held past the long-press threshold.
    LongPress,
}

/// Per-element click / long-press state machine.
#[derive(Clone, Debug, Default)]
pub struct PressRecognizer {
    config: PressConfig,
    state: PressState,
    start: Point,
    timer: Option<TimerId>,
}

impl PressRecognizer {
    /// Create an idle recognizer.
    pub fn new(config: PressConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Current state.
    pub fn state(&self) -> PressState {
        self.state
    }

    /// The thresholds in use.
    pub fn config(&self) -> &PressConfig {
        &self.config
    }

    /// Where the current press started.
    pub fn start(&self) -> Option<Point> {
        (self.state != PressState::Idle).then_some(self.start)
    }

    /// Whether a long-press timer is live.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Pointer down at `at`.
    ///
    /// A press that is still live (second finger, or an up event the host never saw) is reset
    /// first. Returns [`Gesture::LongPress`] only when the threshold is zero.
    pub fn down<T: Timers + ?Sized>(
        &mut self,
        timers: &mut T,
        at: impl Into<Point>,
    ) -> Option<Gesture> {
        self.reset(timers);
        self.start = at.into();
        if self.config.long_press.is_zero() {
            self.state = PressState::LongPressed;
            return Some(Gesture::LongPress);
        }
        self.state = PressState::Pressing;
        self.timer = Some(timers.start_timer(self.config.long_press));
        trace!("press started at {:?}", self.start);
        None
    }

    /// Pointer moved to `to`. Cancels the press once it leaves the tolerance radius.
    pub fn moved<T: Timers + ?Sized>(&mut self, timers: &mut T, to: impl Into<Point>) {
        if self.state != PressState::Pressing {
            return;
        }
        if exceeds(self.start, to.into(), self.config.move_tolerance) {
            self.cancel_timer(timers);
            self.state = PressState::Cancelled;
            trace!("press cancelled by movement");
        }
    }

    /// The host reports that timer `id` expired.
    pub fn timer_fired(&mut self, id: TimerId) -> Option<Gesture> {
        if self.state != PressState::Pressing || self.timer != Some(id) {
            return None;
        }
        self.timer = None;
        self.state = PressState::LongPressed;
        trace!("long press recognized");
        Some(Gesture::LongPress)
    }

    /// Pointer released. Returns [`Gesture::Click`] for a press still in `Pressing`.
    pub fn up<T: Timers + ?Sized>(&mut self, timers: &mut T) -> Option<Gesture> {
        let gesture = (self.state == PressState::Pressing).then_some(Gesture::Click);
        self.reset(timers);
        gesture
    }

    /// Pointer left the element or the platform cancelled it: end without a gesture.
    pub fn leave<T: Timers + ?Sized>(&mut self, timers: &mut T) {
        self.reset(timers);
    }

    /// Feed one [`PointerEvent`].
    pub fn handle<T: Timers + ?Sized>(
        &mut self,
        timers: &mut T,
        event: &PointerEvent,
    ) -> Option<Gesture> {
        match event.phase {
            PointerPhase::Down => self.down(timers, event.position),
            PointerPhase::Move => {
                self.moved(timers, event.position);
                None
            }
            PointerPhase::Up => self.up(timers),
            PointerPhase::Leave | PointerPhase::Cancel => {
                self.leave(timers);
                None
            }
        }
    }

    /// Return to `Idle`, cancelling any live timer. Idempotent.
    pub fn reset<T: Timers + ?Sized>(&mut self, timers: &mut T) {
        self.cancel_timer(timers);
        self.state = PressState::Idle;
    }

    fn cancel_timer<T: Timers + ?Sized>(&mut self, timers: &mut T) {
        if let Some(id) = self.timer.take() {
            timers.cancel_timer(id);
        }
    }
}
