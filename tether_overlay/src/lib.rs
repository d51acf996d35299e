// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Overlay: sans-IO sessions for anchored overlays.
//!
//! An overlay (dropdown, tooltip, action menu) is a panel tied to a trigger element. While open
//! it must stay next to the trigger as the page scrolls, the window resizes, or the panel's own
//! content changes shape, and it must close when the user presses somewhere else.
//!
//! This crate models that lifecycle without touching any event loop:
//!
//! - [`host`]: the [`Host`](host::Host) trait a UI binding implements: rectangles, listener
//!   registration, frame scheduling, and the element hierarchy.
//! - [`bridge`]: [`LayoutBridge`](bridge::LayoutBridge), the frame-throttled set of layout
//!   subscriptions.
//! - [`dismiss`]: [`Dismissal`](dismiss::Dismissal), outside-press detection by structural
//!   containment.
//! - [`normalize`]: [`RoleCleanup`](normalize::RoleCleanup), a post-render pass that strips
//!   conflicting ARIA roles from panel content.
//! - [`session`]: [`OverlaySession`](session::OverlaySession), which composes all of the above
//!   with the position calculator from [`tether_geometry`].
//!
//! ## Flow
//!
//! The session computes, the host executes. Every method that needs a side effect takes
//! `&mut impl Host` and asks for it; the host later feeds the resulting events back in.
//!
//! 1. `open(host, trigger)` computes a first position from a size estimate, registers layout
//!    sources and outside-press listeners, and requests a frame.
//! 2. The host renders the panel and calls `set_panel`.
//! 3. The host delivers the frame; `frame` recomputes with the measured panel.
//! 4. Any layout source firing calls `layout_changed`; bursts collapse into one frame.
//! 5. An outside press (or an explicit `close`) releases every registration.
//!
//! Frames and presses delivered after close are recognized by handle and ignored.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bridge;
pub mod dismiss;
pub mod host;
pub mod normalize;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_host;

pub use bridge::LayoutBridge;
pub use dismiss::{Dismissal, is_outside};
pub use host::Host;
pub use normalize::{DEFAULT_STRIPPED_ROLES, RoleAccess, RoleCleanup};
pub use session::OverlaySession;
pub use types::{Dismissed, FrameRequest, Flush, ListenerId, OverlayConfig, Signals, Source};
