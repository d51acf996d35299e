// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-dismiss for bottom sheets.
//!
//! ## Overview
//!
//! A [`SwipeDismiss`] tracks a vertical drag that starts on a sheet's drag handle. While the
//! drag is live, the sheet follows the pointer 1:1 (downward only) via [`sheet_transform`] and
//! the backdrop fades with [`backdrop_opacity`]. On release the drag either commits
//! ([`Release::Dismiss`]) or asks the host to animate the sheet back ([`Release::SnapBack`]).
//!
//! Presses on interactive controls nested in the handle (a close button, a tab strip) do not
//! start a drag. The check is structural, through [`DragTargets`].

use kurbo::Affine;
use log::debug;
use tether_geometry::{ParentLookup, is_within_except};

use crate::pointer::{PointerEvent, PointerPhase};

/// Default drag distance, in pixels, past which a release dismisses the sheet.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 100.0;

/// Default drag distance, in pixels, over which the backdrop fades out completely.
pub const DEFAULT_FADE_DISTANCE: f64 = 400.0;

/// Element queries needed to decide whether a press may start a drag.
pub trait DragTargets<E>: ParentLookup<E> {
    /// Whether `element` is an interactive control that keeps its own presses.
    fn is_interactive(&self, element: &E) -> bool;
}

/// Thresholds for a [`SwipeDismiss`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Release beyond this offset dismisses.
    pub commit_threshold: f64,
    /// Offset at which the backdrop is fully transparent.
    pub fade_distance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            fade_distance: DEFAULT_FADE_DISTANCE,
        }
    }
}

/// A live drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragState {
    /// Pointer Y at press start.
    pub start_y: f64,
    /// Current downward offset, never negative.
    pub offset: f64,
}

/// What the host should do when a drag ends.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Release {
    /// Close the sheet.
    Dismiss,
    /// Animate the sheet from `from` back to rest.
    SnapBack {
        /// Offset at release.
        from: f64,
    },
}

/// Sheet transform for a drag offset: a pure vertical translation.
pub fn sheet_transform(offset: f64) -> Affine {
    Affine::translate((0.0, offset.max(0.0)))
}

/// Backdrop opacity for a drag offset: `1` at rest, fading linearly to `0` at `fade_distance`.
///
/// A non-positive `fade_distance` hides the backdrop as soon as the sheet moves.
pub fn backdrop_opacity(offset: f64, fade_distance: f64) -> f64 {
    if fade_distance <= 0.0 {
        return if offset > 0.0 { 0.0 } else { 1.0 };
    }
    (1.0 - offset / fade_distance).clamp(0.0, 1.0)
}

/// Vertical drag tracker for one sheet.
#[derive(Clone, Debug)]
pub struct SwipeDismiss<E> {
    config: SwipeConfig,
    handle: E,
    drag: Option<DragState>,
}

impl<E: Copy + Eq> SwipeDismiss<E> {
    /// Create a tracker for the sheet whose drag handle is `handle`.
    pub fn new(handle: E, config: SwipeConfig) -> Self {
        Self {
            config,
            handle,
            drag: None,
        }
    }

    /// The drag handle element.
    pub fn handle(&self) -> E {
        self.handle
    }

    /// The thresholds in use.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The live drag, if any.
    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    /// Whether a drag is live.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current offset; zero when not dragging.
    pub fn offset(&self) -> f64 {
        self.drag.map_or(0.0, |d| d.offset)
    }

    /// Current sheet transform.
    pub fn transform(&self) -> Affine {
        sheet_transform(self.offset())
    }

    /// Current backdrop opacity.
    pub fn backdrop_opacity(&self) -> f64 {
        backdrop_opacity(self.offset(), self.config.fade_distance)
    }

    /// Press started on `target` at vertical position `y`.
    ///
    /// Starts a drag if `target` is within the handle and not within an interactive control
    /// nested in it. Returns whether a drag started.
    ///
    /// A drag that is still live (second finger, or an up event the host never saw) is dropped
    /// first, whether or not the new press starts one.
    pub fn press<T: DragTargets<E> + ?Sized>(
        &mut self,
        tree: &T,
        target: Option<E>,
        y: f64,
    ) -> bool {
        self.drag = None;
        let Some(target) = target else {
            return false;
        };
        if !is_within_except(tree, target, self.handle, |el| tree.is_interactive(el)) {
            return false;
        }
        self.drag = Some(DragState {
            start_y: y,
            offset: 0.0,
        });
        true
    }

    /// Pointer moved to vertical position `y`. Returns the new offset while dragging.
    ///
    /// Upward movement past the start clamps to zero.
    pub fn drag_to(&mut self, y: f64) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        drag.offset = (y - drag.start_y).max(0.0);
        Some(drag.offset)
    }

    /// Pointer released. Ends the drag and decides between dismissal and snap-back.
    pub fn release(&mut self) -> Option<Release> {
        let drag = self.drag.take()?;
        if drag.offset > self.config.commit_threshold {
            debug!("sheet dismissed by swipe: offset={}", drag.offset);
            Some(Release::Dismiss)
        } else {
            Some(Release::SnapBack { from: drag.offset })
        }
    }

    /// The platform cancelled the pointer. Ends the drag without dismissing.
    pub fn cancel(&mut self) -> Option<Release> {
        let drag = self.drag.take()?;
        Some(Release::SnapBack { from: drag.offset })
    }

    /// Feed one [`PointerEvent`] whose target resolved to `target`.
    ///
    /// Returns a [`Release`] when the event ended a drag. Leaving the handle does not end a
    /// drag; the sheet keeps following the pointer.
    pub fn handle_event<T: DragTargets<E> + ?Sized>(
        &mut self,
        tree: &T,
        target: Option<E>,
        event: &PointerEvent,
    ) -> Option<Release> {
        match event.phase {
            PointerPhase::Down => {
                self.press(tree, target, event.position.y);
                None
            }
            PointerPhase::Move => {
                self.drag_to(event.position.y);
                None
            }
            PointerPhase::Up => self.release(),
            PointerPhase::Cancel => self.cancel(),
            PointerPhase::Leave => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use kurbo::Point;

    // Sheet 1 ─ handle 2 ─┬─ grip 3
    //                     └─ close button 4 ─ icon 5
    // Sheet body 6 sits beside the handle.
    struct Sheet;

    impl ParentLookup<u32> for Sheet {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                2 | 6 => Some(1),
                3 | 4 => Some(2),
                5 => Some(4),
                _ => None,
            }
        }
    }

    impl DragTargets<u32> for Sheet {
        fn is_interactive(&self, element: &u32) -> bool {
            *element == 4
        }
    }

    fn sheet() -> SwipeDismiss<u32> {
        SwipeDismiss::new(2, SwipeConfig::default())
    }

    #[test]
    fn drag_past_threshold_dismisses() {
        let mut s = sheet();
        assert!(s.press(&Sheet, Some(3), 300.0));
        assert_eq!(s.drag_to(420.0), Some(120.0));
        assert_eq!(s.release(), Some(Release::Dismiss));
        assert!(!s.is_dragging());
    }

    #[test]
    fn commit_boundary() {
        let mut s = sheet();
        s.press(&Sheet, Some(2), 0.0);
        s.drag_to(DEFAULT_COMMIT_THRESHOLD + 1.0);
        assert_eq!(s.release(), Some(Release::Dismiss));

        s.press(&Sheet, Some(2), 0.0);
        s.drag_to(DEFAULT_COMMIT_THRESHOLD - 1.0);
        assert_eq!(
            s.release(),
            Some(Release::SnapBack {
                from: DEFAULT_COMMIT_THRESHOLD - 1.0
            })
        );
        assert_eq!(s.offset(), 0.0);
        assert_eq!(s.transform(), Affine::IDENTITY);
    }

    #[test]
    fn exactly_at_threshold_snaps_back() {
        let mut s = sheet();
        s.press(&Sheet, Some(2), 0.0);
        s.drag_to(DEFAULT_COMMIT_THRESHOLD);
        assert!(matches!(s.release(), Some(Release::SnapBack { .. })));
    }

    #[test]
    fn upward_drag_clamps_to_zero() {
        let mut s = sheet();
        s.press(&Sheet, Some(3), 300.0);
        assert_eq!(s.drag_to(250.0), Some(0.0));
        assert_eq!(s.backdrop_opacity(), 1.0);
    }

    #[test]
    fn interactive_children_and_outside_presses_do_not_drag() {
        let mut s = sheet();
        assert!(!s.press(&Sheet, Some(4), 0.0));
        assert!(!s.press(&Sheet, Some(5), 0.0));
        assert!(!s.press(&Sheet, Some(6), 0.0));
        assert!(!s.press(&Sheet, None, 0.0));
        assert_eq!(s.drag_to(200.0), None);
        assert_eq!(s.release(), None);
    }

    #[test]
    fn rejected_press_drops_live_drag() {
        let mut s = sheet();
        assert!(s.press(&Sheet, Some(2), 300.0));
        // The up for that press never arrived; the next press lands on the close button.
        assert!(!s.press(&Sheet, Some(4), 300.0));
        assert!(!s.is_dragging());
        assert_eq!(s.drag_to(450.0), None);
        assert_eq!(s.offset(), 0.0);
        assert_eq!(s.release(), None);
    }

    #[test]
    fn second_press_restarts_drag() {
        let mut s = sheet();
        s.press(&Sheet, Some(3), 300.0);
        s.drag_to(380.0);
        assert!(s.press(&Sheet, Some(2), 500.0));
        assert_eq!(s.drag_to(550.0), Some(50.0));
        assert_eq!(s.release(), Some(Release::SnapBack { from: 50.0 }));
    }

    #[test]
    fn cancel_never_dismisses() {
        let mut s = sheet();
        s.press(&Sheet, Some(3), 0.0);
        s.drag_to(500.0);
        assert_eq!(s.cancel(), Some(Release::SnapBack { from: 500.0 }));
        assert_eq!(s.cancel(), None);
    }

    #[test]
    fn transform_follows_offset() {
        let mut s = sheet();
        s.press(&Sheet, Some(3), 100.0);
        s.drag_to(160.0);
        assert_eq!(s.transform() * Point::ZERO, Point::new(0.0, 60.0));
        assert_eq!(s.backdrop_opacity(), 1.0 - 60.0 / 400.0);
    }

    #[test]
    fn backdrop_fades_and_clamps() {
        assert_eq!(backdrop_opacity(0.0, 400.0), 1.0);
        assert_eq!(backdrop_opacity(200.0, 400.0), 0.5);
        assert_eq!(backdrop_opacity(800.0, 400.0), 0.0);
        assert_eq!(backdrop_opacity(-10.0, 400.0), 1.0);
        assert_eq!(backdrop_opacity(0.0, 0.0), 1.0);
        assert_eq!(backdrop_opacity(1.0, 0.0), 0.0);
    }

    #[test]
    fn pointer_events_drive_the_drag() {
        let mut s = sheet();
        let ev = |phase, y: f64| {
            PointerEvent::new(phase, crate::pointer::PointerKind::Touch, (0.0, y), Duration::ZERO)
        };
        assert_eq!(s.handle_event(&Sheet, Some(3), &ev(PointerPhase::Down, 300.0)), None);
        assert_eq!(s.handle_event(&Sheet, Some(6), &ev(PointerPhase::Leave, 300.0)), None);
        assert_eq!(s.handle_event(&Sheet, Some(6), &ev(PointerPhase::Move, 420.0)), None);
        assert_eq!(s.offset(), 120.0);
        assert_eq!(
            s.handle_event(&Sheet, Some(6), &ev(PointerPhase::Up, 420.0)),
            Some(Release::Dismiss)
        );
    }
}
