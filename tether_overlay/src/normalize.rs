// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-render normalization of panel content.
//!
//! Third-party widgets rendered inside a panel (sliders, carousels) sometimes inject ARIA roles
//! that conflict with the panel's own semantics. [`RoleCleanup`] strips them.
//!
//! The pass is driven by the layout bridge's subtree-mutation observer: whenever a flushed
//! frame reports [`Flush::panel_mutated`](crate::types::Flush::panel_mutated), run the pass over
//! the panel. It is idempotent, so running it on a clean subtree is harmless.

use alloc::vec::Vec;

use log::debug;

/// Roles stripped by [`RoleCleanup::default`].
pub const DEFAULT_STRIPPED_ROLES: &[&str] = &["group", "tabpanel"];

/// Attribute access for the normalization pass.
pub trait RoleAccess<E> {
    /// All mounted elements in the subtree rooted at `root`, including `root`.
    fn subtree(&self, root: &E) -> Vec<E>;

    /// The `role` attribute of `element`, if set.
    fn role_of(&self, element: &E) -> Option<&str>;

    /// Remove the `role` attribute from `element`.
    fn remove_role(&mut self, element: &E);
}

/// Strips disallowed ARIA roles from a panel subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoleCleanup {
    /// Role tokens that cause the `role` attribute to be removed.
    pub roles: &'static [&'static str],
}

impl Default for RoleCleanup {
    fn default() -> Self {
        Self {
            roles: DEFAULT_STRIPPED_ROLES,
        }
    }
}

impl RoleCleanup {
    /// Whether a `role` attribute value contains a disallowed token.
    ///
    /// ARIA allows a space-separated fallback list; any disallowed token taints the attribute.
    pub fn strips(&self, role: &str) -> bool {
        role.split_ascii_whitespace()
            .any(|token| self.roles.iter().any(|r| r.eq_ignore_ascii_case(token)))
    }

    /// Run the pass over the subtree rooted at `root`. Returns the number of roles removed.
    pub fn apply<E, H: RoleAccess<E> + ?Sized>(&self, host: &mut H, root: &E) -> usize {
        let mut removed = 0;
        for el in host.subtree(root) {
            if host.role_of(&el).is_some_and(|r| self.strips(r)) {
                host.remove_role(&el);
                removed += 1;
            }
        }
        if removed > 0 {
            debug!("stripped {removed} disallowed role(s) from panel subtree");
        }
        removed
    }
}
