// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers: clamping, edge-overflow correction, and movement tests.
//!
//! All functions assume finite inputs. Clamping is written with `f64::min`/`f64::max`, so a NaN
//! start coordinate collapses onto an edge instead of propagating.

use kurbo::{Insets, Point, Rect};

/// Build a rectangle from a DOM-style `{top, left, width, height}` snapshot.
pub fn rect_from_bounds(top: f64, left: f64, width: f64, height: f64) -> Rect {
    Rect::from_origin_size((left, top), (width, height))
}

/// Clamp a 1-D start coordinate so that `[start, start + extent]` stays within
/// `[padding, available - padding]`.
///
/// When the extent does not fit, the leading edge wins and the result is `padding`.
pub fn clamp_axis(start: f64, extent: f64, available: f64, padding: f64) -> f64 {
    let max = available - extent - padding;
    start.min(max).max(padding)
}

/// How far each edge of `inner` pokes outside of `bounds`.
///
/// Edges that are inside `bounds` report zero. Both rectangles are expected to be normalized
/// (`x0 <= x1`, `y0 <= y1`).
pub fn overflow(inner: Rect, bounds: Rect) -> Insets {
    Insets::new(
        (bounds.x0 - inner.x0).max(0.0),
        (bounds.y0 - inner.y0).max(0.0),
        (inner.x1 - bounds.x1).max(0.0),
        (inner.y1 - bounds.y1).max(0.0),
    )
}

/// Translate `inner` (without resizing it) so that it lies within `bounds` shrunk by `padding`
/// on every side.
///
/// If `inner` is larger than the padded area along an axis, it is aligned to the leading
/// (left or top) padded edge along that axis.
pub fn shift_inside(inner: Rect, bounds: Rect, padding: f64) -> Rect {
    let x0 = bounds.x0 + clamp_axis(inner.x0 - bounds.x0, inner.width(), bounds.width(), padding);
    let y0 = bounds.y0 + clamp_axis(inner.y0 - bounds.y0, inner.height(), bounds.height(), padding);
    inner.with_origin((x0, y0))
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Whether `b` is farther than `threshold` from `a`.
///
/// A non-positive (or NaN) threshold is treated as zero: any nonzero movement exceeds it.
#[inline]
pub fn exceeds(a: Point, b: Point, threshold: f64) -> bool {
    let t = threshold.max(0.0);
    a.distance_squared(b) > t * t
}
