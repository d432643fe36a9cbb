// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over the floating tree.
//!
//! The pointer is "over" a floating element when it is over its trigger or
//! popup, or over any part of a nested element. The hovered set is therefore
//! a root→leaf chain of elements, and moving the pointer changes it by
//! leaving a tail and entering a new one below their common ancestor.
//!
//! Leaves are emitted inner→outer and enters outer→inner, so a submenu
//! closes before its parent is considered left, and a parent's pending close
//! is canceled before a child starts opening.

use alloc::vec::Vec;

use crate::types::{FloatingId, HoverTarget};

/// A hover transition of one element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum HoverEvent {
    Enter(FloatingId),
    Leave(FloatingId),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct HoverPath {
    chain: Vec<FloatingId>,
    leaf: Option<HoverTarget>,
}

impl HoverPath {
    pub(crate) fn leaf(&self) -> Option<HoverTarget> {
        self.leaf
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: FloatingId) -> bool {
        self.chain.contains(&id)
    }

    /// Move to `chain` (root→leaf) with `leaf` as the innermost target.
    pub(crate) fn update(&mut self, chain: &[FloatingId], leaf: Option<HoverTarget>) -> Vec<HoverEvent> {
        let shared = self
            .chain
            .iter()
            .zip(chain)
            .take_while(|(old, new)| old == new)
            .count();

        let mut out: Vec<HoverEvent> = self.chain[shared..]
            .iter()
            .rev()
            .map(|&id| HoverEvent::Leave(id))
            .collect();
        out.extend(chain[shared..].iter().map(|&id| HoverEvent::Enter(id)));

        self.chain.clear();
        self.chain.extend_from_slice(chain);
        self.leaf = leaf;
        out
    }

    /// Drop `id` from the chain without emitting events (the element is gone).
    pub(crate) fn forget(&mut self, id: FloatingId) {
        if let Some(pos) = self.chain.iter().position(|&k| k == id) {
            self.chain.truncate(pos);
            self.leaf = None;
        }
    }
}
