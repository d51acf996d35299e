// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position calculator.
//!
//! ## Overview
//!
//! [`compute_position`] places a panel next to its trigger according to a [`Placement`], then
//! clamps the result into the viewport minus [`PositionConfig::edge_padding`].
//!
//! ## Rules
//!
//! - Vertical: below the trigger's bottom edge plus `offset`, or above its top edge by the panel
//!   height plus `offset`.
//! - Horizontal: left edges, centers, or right edges line up.
//! - Width: the [`PanelWidth`](crate::PanelWidth) policy, capped at the padded viewport width.
//! - Clamping always wins over the requested placement.
//!
//! The function is pure: the same inputs always produce the same position.

use kurbo::{Rect, Size};

use crate::geometry::shift_inside;
use crate::types::{Align, Placement, Position, PositionConfig, Side};

/// Compute the position of a panel anchored to `trigger`.
///
/// `panel` is the measured panel size, if any. A missing or zero-area measurement falls back to
/// [`PositionConfig::estimated_height`] and the computed width.
pub fn compute_position(
    trigger: Rect,
    viewport: Size,
    placement: &Placement,
    panel: Option<Size>,
    config: &PositionConfig,
) -> Position {
    let trigger = trigger.abs();
    let padding = config.edge_padding.max(0.0);
    let available_width = (viewport.width - 2.0 * padding).max(0.0);

    let width = config
        .width
        .resolve(trigger.width(), viewport.width)
        .min(available_width)
        .max(0.0);

    let measured = panel.filter(|s| s.width > 0.0 && s.height > 0.0);
    let (panel_width, panel_height) = match measured {
        Some(s) => (s.width.min(available_width), s.height),
        None => (width, config.estimated_height.max(0.0)),
    };

    let top = match placement.side {
        Side::Bottom => trigger.y1 + placement.offset,
        Side::Top => trigger.y0 - panel_height - placement.offset,
    };
    let left = match placement.align {
        Align::Start => trigger.x0,
        Align::Center => trigger.x0 + trigger.width() / 2.0 - panel_width / 2.0,
        Align::End => trigger.x1 - panel_width,
    };

    let requested = Rect::from_origin_size((left, top), (panel_width, panel_height));
    let placed = shift_inside(requested, viewport.to_rect(), padding);
    Position {
        top: placed.y0,
        left: placed.x0,
        width,
    }
}
