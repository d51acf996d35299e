// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Geometry: Kurbo-native geometry for panels anchored to a trigger.
//!
//! This crate is the leaf of the Tether workspace. Everything here is a pure function of its
//! inputs: no state, no host calls, no scheduling.
//!
//! - [`geometry`]: clamping, edge-overflow correction, and distance tests over [`kurbo`] types.
//! - [`tree`]: structural containment over a host element hierarchy, via [`ParentLookup`].
//! - [`position`]: the position calculator that places a floating panel next to its trigger
//!   and keeps it inside the viewport.
//!
//! ## Placing a panel
//!
//! A panel is placed on one [`Side`] of its trigger and aligned to its start, center, or end.
//! The result is clamped so that the panel never renders partially off-screen, even when that
//! means abandoning the requested placement.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use tether_geometry::{Align, Placement, PositionConfig, Side, compute_position};
//!
//! // A trigger near the bottom-right corner of a 1024×768 viewport.
//! let trigger = Rect::from_origin_size((900.0, 780.0), (120.0, 44.0));
//! let placement = Placement { side: Side::Bottom, align: Align::End, offset: 8.0 };
//! let config = PositionConfig::default();
//!
//! let pos = compute_position(
//!     trigger,
//!     Size::new(1024.0, 768.0),
//!     &placement,
//!     Some(Size::new(160.0, 200.0)),
//!     &config,
//! );
//!
//! // Below the trigger would overflow the viewport, so the panel is pulled back up.
//! assert_eq!(pos.top, 768.0 - 200.0 - config.edge_padding);
//! ```
//!
//! ## Unknown panel size
//!
//! Before the panel has painted there is nothing to measure. Pass `None` and the calculator
//! falls back to [`PositionConfig::estimated_height`]; callers re-run it once a real
//! measurement exists.
//!
//! This crate is `no_std`.

#![no_std]

pub mod geometry;
pub mod position;
pub mod tree;
pub mod types;

pub use geometry::{clamp_axis, distance, exceeds, overflow, rect_from_bounds, shift_inside};
pub use position::compute_position;
pub use tree::{Ancestors, NoParent, ParentLookup, ancestors, is_within, is_within_except};
pub use types::{
    Align, DEFAULT_DESKTOP_BREAKPOINT, DEFAULT_EDGE_PADDING, DEFAULT_ESTIMATED_HEIGHT, PanelWidth,
    Placement, Position, PositionConfig, Side,
};
