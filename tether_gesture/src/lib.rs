// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Gesture: sans-IO pointer gestures for touch-first UI.
//!
//! - [`pointer`]: one [`PointerEvent`](pointer::PointerEvent) type for mouse, touch, and pen,
//!   plus a [`PointerFilter`](pointer::PointerFilter) that drops the compatibility mouse events
//!   browsers synthesize after a tap.
//! - [`press`]: [`PressRecognizer`](press::PressRecognizer), which tells a click from a long
//!   press from the start of a scroll.
//! - [`swipe`]: [`SwipeDismiss`](swipe::SwipeDismiss), a vertical drag tracker for dismissing
//!   bottom sheets.
//!
//! Nothing here owns a clock or an event loop. Timers come from a host
//! [`Timers`](press::Timers) implementation, and element structure from
//! [`ParentLookup`](tether_geometry::ParentLookup).
//!
//! ## Example
//!
//! ```
//! use tether_gesture::swipe::{DragTargets, Release, SwipeConfig, SwipeDismiss};
//! use tether_geometry::ParentLookup;
//!
//! // A sheet (1) with a drag handle (2).
//! struct Sheet;
//! impl ParentLookup<u32> for Sheet {
//!     fn parent_of(&self, node: &u32) -> Option<u32> { (*node == 2).then_some(1) }
//! }
//! impl DragTargets<u32> for Sheet {
//!     fn is_interactive(&self, _element: &u32) -> bool { false }
//! }
//!
//! let mut swipe = SwipeDismiss::new(2, SwipeConfig::default());
//! assert!(swipe.press(&Sheet, Some(2), 300.0));
//! swipe.drag_to(420.0);
//! assert_eq!(swipe.release(), Some(Release::Dismiss));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod pointer;
pub mod press;
pub mod swipe;

pub use pointer::{DEFAULT_GHOST_WINDOW, PointerEvent, PointerFilter, PointerKind, PointerPhase};
pub use press::{
    DEFAULT_LONG_PRESS, DEFAULT_MOVE_TOLERANCE, Gesture, PressConfig, PressRecognizer, PressState,
    TimerId, Timers,
};
pub use swipe::{
    DEFAULT_COMMIT_THRESHOLD, DEFAULT_FADE_DISTANCE, DragState, DragTargets, Release, SwipeConfig,
    SwipeDismiss, backdrop_opacity, sheet_transform,
};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn press_config_fills_defaults() {
        let config: PressConfig = serde_json::from_str(r#"{ "move_tolerance": 4.0 }"#).unwrap();
        assert_eq!(config.long_press, DEFAULT_LONG_PRESS);
        assert_eq!(config.move_tolerance, 4.0);

        let config: SwipeConfig = serde_json::from_str(r#"{ "commit_threshold": 80.0 }"#).unwrap();
        assert_eq!(config.fade_distance, DEFAULT_FADE_DISTANCE);
        assert_eq!(config.commit_threshold, 80.0);
    }
}
