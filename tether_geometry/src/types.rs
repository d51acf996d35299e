// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for panel placement: sides, alignments, configuration, and the computed position.

use kurbo::Rect;

/// Default gap kept between a panel and the viewport edges.
pub const DEFAULT_EDGE_PADDING: f64 = 8.0;

/// Height assumed for a panel that has not been measured yet.
///
/// Large enough that a panel opened near the bottom of the viewport is pulled up on the first
/// pass rather than jumping after it paints.
pub const DEFAULT_ESTIMATED_HEIGHT: f64 = 240.0;

/// Viewport width from which the desktop panel width applies.
pub const DEFAULT_DESKTOP_BREAKPOINT: f64 = 768.0;

/// Which side of the trigger the panel opens on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    #[default]
    Bottom,
}

/// How the panel lines up with the trigger along the horizontal axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Left edges line up.
    #[default]
    Start,
    /// Centers line up.
    Center,
    /// Right edges line up.
    End,
}

/// Requested placement of a panel relative to its trigger.
///
/// Immutable for the lifetime of an overlay; the computed position may still deviate from it
/// when clamping requires.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Placement {
    /// Side of the trigger.
    pub side: Side,
    /// Horizontal alignment.
    pub align: Align,
    /// Gap between trigger and panel, in pixels.
    pub offset: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Start,
            offset: 4.0,
        }
    }
}

/// Width policy for panels.
///
/// Narrow viewports make the panel exactly as wide as its trigger. From `breakpoint` up, a
/// configured `desktop` width is used instead.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelWidth {
    /// Fixed width on wide viewports. `None` matches the trigger width everywhere.
    pub desktop: Option<f64>,
    /// Minimum viewport width for `desktop` to apply.
    pub breakpoint: f64,
}

impl Default for PanelWidth {
    fn default() -> Self {
        Self {
            desktop: None,
            breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
        }
    }
}

impl PanelWidth {
    /// A policy that uses `width` on viewports at least `breakpoint` wide.
    pub const fn desktop(width: f64, breakpoint: f64) -> Self {
        Self {
            desktop: Some(width),
            breakpoint,
        }
    }

    /// Resolve the panel width for a trigger and viewport width (before any viewport cap).
    pub fn resolve(&self, trigger_width: f64, viewport_width: f64) -> f64 {
        match self.desktop {
            Some(w) if viewport_width >= self.breakpoint => w,
            _ => trigger_width,
        }
    }
}

/// Configuration for the position calculator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositionConfig {
    /// Minimum gap between the panel and every viewport edge.
    pub edge_padding: f64,
    /// Width policy.
    pub width: PanelWidth,
    /// Height used while the panel has not been measured.
    pub estimated_height: f64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            edge_padding: DEFAULT_EDGE_PADDING,
            width: PanelWidth::default(),
            estimated_height: DEFAULT_ESTIMATED_HEIGHT,
        }
    }
}

/// Computed panel position, in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Distance from the top of the viewport.
    pub top: f64,
    /// Distance from the left of the viewport.
    pub left: f64,
    /// Width to apply to the panel.
    pub width: f64,
}

impl Position {
    /// The panel box for a given panel height.
    pub fn rect(&self, height: f64) -> Rect {
        Rect::from_origin_size((self.left, self.top), (self.width, height))
    }
}
