// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural containment over a host element hierarchy.
//!
//! ## Overview
//!
//! Overlays decide "inside or outside" by walking the host's parent chain, never by asking
//! whether an event's propagation was stopped somewhere. The host supplies the chain through
//! [`ParentLookup`]; the helpers here answer containment questions from it.
//!
//! Walks are bounded by [`MAX_DEPTH`] so that a host reporting a cyclic ancestry cannot hang
//! the caller.

/// Upper bound on the number of nodes visited by a single ancestor walk.
pub const MAX_DEPTH: usize = 4096;

/// Look up the parent of an element.
pub trait ParentLookup<E> {
    /// Returns the parent of `node`, or `None` if `node` is a root (or detached).
    fn parent_of(&self, node: &E) -> Option<E>;
}

/// A parent provider where every node is a root.
///
/// With `NoParent`, a node is only ever within itself.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<E> ParentLookup<E> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &E) -> Option<E> {
        None
    }
}

/// Iterator over a node followed by its ancestors, inner→outer.
///
/// Returned by [`ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, E, T: ?Sized> {
    tree: &'a T,
    next: Option<E>,
    remaining: usize,
}

impl<E: Copy, T: ParentLookup<E> + ?Sized> Iterator for Ancestors<'_, E, T> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.remaining == 0 {
            return None;
        }
        let cur = self.next?;
        self.remaining -= 1;
        self.next = self.tree.parent_of(&cur);
        Some(cur)
    }
}

/// Walk from `node` (inclusive) up to the root.
pub fn ancestors<E: Copy, T: ParentLookup<E> + ?Sized>(tree: &T, node: E) -> Ancestors<'_, E, T> {
    Ancestors {
        tree,
        next: Some(node),
        remaining: MAX_DEPTH,
    }
}

/// Whether `node` is `root` or a descendant of `root`.
pub fn is_within<E: Copy + Eq, T: ParentLookup<E> + ?Sized>(tree: &T, node: E, root: E) -> bool {
    ancestors(tree, node).any(|n| n == root)
}

/// Whether `node` is within `root` without passing through a blocked node on the way up.
///
/// The walk starts at `node` and stops at `root`; `root` itself is never tested against
/// `blocked`. Used to accept presses on a drag handle while rejecting presses that land on an
/// interactive control nested inside it.
pub fn is_within_except<E, T, F>(tree: &T, node: E, root: E, blocked: F) -> bool
where
    E: Copy + Eq,
    T: ParentLookup<E> + ?Sized,
    F: Fn(&E) -> bool,
{
    for n in ancestors(tree, node) {
        if n == root {
            return true;
        }
        if blocked(&n) {
            return false;
        }
    }
    false
}
