// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for overlay sessions: handles, event sources, signals, and outcomes.
//!
//! ## Overview
//!
//! These types describe the protocol between a session and its [`Host`](crate::host::Host).
//! Handles ([`ListenerId`], [`FrameRequest`]) are minted by the host; the session only stores
//! and returns them.

use tether_geometry::{Position, PositionConfig};

/// Handle for a listener or observer registration, minted by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Handle for a pending animation-frame request, minted by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(pub u64);

bitflags::bitflags! {
    /// Layout-affecting signals that make an open overlay recompute its position.
    ///
    /// Used both to configure which sources a session subscribes to and to report which
    /// sources fired.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Signals: u8 {
        /// Window resize.
        const RESIZE         = 0b0000_0001;
        /// Scroll anywhere in the document (one capturing window listener).
        const SCROLL         = 0b0000_0010;
        /// Device orientation change.
        const ORIENTATION    = 0b0000_0100;
        /// The panel element changed size.
        const PANEL_SIZE     = 0b0000_1000;
        /// The panel subtree changed (attributes or children).
        const PANEL_MUTATION = 0b0001_0000;
    }
}

impl Signals {
    /// Window-level signals.
    pub const WINDOW: Self = Self::RESIZE.union(Self::SCROLL).union(Self::ORIENTATION);
    /// Observers attached to the panel element.
    pub const PANEL: Self = Self::PANEL_SIZE.union(Self::PANEL_MUTATION);
}

impl Default for Signals {
    fn default() -> Self {
        Self::all()
    }
}

/// An event source a session registers with its host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source<E> {
    /// Window `resize`.
    Resize,
    /// Window `scroll`, registered in the capture phase so scrolls in any ancestor are seen.
    Scroll,
    /// Window `orientationchange`.
    OrientationChange,
    /// Size-change observer on the panel element.
    PanelSize(E),
    /// Subtree-mutation observer (attributes and children) on the panel element.
    PanelMutation(E),
    /// Document-level pointer-down (mouse), capture phase.
    PointerDown,
    /// Document-level touch-start, capture phase.
    TouchStart,
}

impl<E> Source<E> {
    /// The layout signal this source reports, if it is a layout source.
    pub fn signal(&self) -> Option<Signals> {
        match self {
            Self::Resize => Some(Signals::RESIZE),
            Self::Scroll => Some(Signals::SCROLL),
            Self::OrientationChange => Some(Signals::ORIENTATION),
            Self::PanelSize(_) => Some(Signals::PANEL_SIZE),
            Self::PanelMutation(_) => Some(Signals::PANEL_MUTATION),
            Self::PointerDown | Self::TouchStart => None,
        }
    }
}

/// Configuration for an [`OverlaySession`](crate::session::OverlaySession).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Position calculator configuration.
    pub position: PositionConfig,
    /// Layout signals the session subscribes to while open.
    pub signals: Signals,
}

/// An outside interaction dismissed the overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dismissed;

/// Result of flushing a session's animation frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Flush {
    /// The freshly computed position, or `None` if the pass was skipped because the trigger
    /// or panel is no longer mounted.
    pub position: Option<Position>,
    /// The panel subtree mutated since the previous flush; post-render normalization (see
    /// [`RoleCleanup`](crate::normalize::RoleCleanup)) should run.
    pub panel_mutated: bool,
}
