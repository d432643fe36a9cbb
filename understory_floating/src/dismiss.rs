// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal stack and outside-press resolution.
//!
//! ## Stack
//!
//! Elements are armed for dismissal while mounted and logically open, in
//! opening order (most recent last). Escape only ever targets the top.
//!
//! ## Outside press
//!
//! The walk starts at the top:
//! - a press inside the element (its popup, its anchor, or an open
//!   descendant's popup) ends the walk;
//! - otherwise the element is dismissed, and the walk continues downward
//!   unless that element blocks the pointer (a press-opened modal), or the
//!   next element has a blocking backdrop of its own that catches this press.

use alloc::vec::Vec;
use kurbo::Point;

use crate::types::FloatingId;

#[derive(Clone, Debug, Default)]
pub(crate) struct DismissalStack {
    entries: Vec<FloatingId>,
}

impl DismissalStack {
    /// Arm `id` on top; re-arming moves it to the top.
    pub(crate) fn push(&mut self, id: FloatingId) {
        self.remove(id);
        self.entries.push(id);
    }

    pub(crate) fn remove(&mut self, id: FloatingId) {
        self.entries.retain(|&e| e != id);
    }

    pub(crate) fn top(&self) -> Option<FloatingId> {
        self.entries.last().copied()
    }

    /// Armed elements, topmost first.
    pub(crate) fn top_down(&self) -> impl Iterator<Item = FloatingId> + '_ {
        self.entries.iter().rev().copied()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// What the resolver needs to know about armed elements.
pub(crate) trait StackView {
    /// Press lands on the element: popup, anchor, or an open descendant.
    fn contains_point(&self, id: FloatingId, pt: Point) -> bool;
    /// The element's own trigger received this very press.
    fn pressed_trigger_at(&self, id: FloatingId, now: u64) -> bool;
    /// The element dismisses on outside press.
    fn dismisses_on_outside_press(&self, id: FloatingId) -> bool;
    /// The element's backdrop blocks pointer events to content below.
    fn blocks_pointer(&self, id: FloatingId) -> bool;
}

/// Elements to dismiss for a pointer-down at `pt`, topmost first.
pub(crate) fn resolve_outside_press(
    stack: &DismissalStack,
    view: &impl StackView,
    pt: Point,
    now: u64,
) -> Vec<FloatingId> {
    let mut out = Vec::new();
    let mut walk = stack.top_down().peekable();
    while let Some(id) = walk.next() {
        if view.contains_point(id, pt) || view.pressed_trigger_at(id, now) {
            break;
        }
        if !view.dismisses_on_outside_press(id) {
            break;
        }
        out.push(id);
        if view.blocks_pointer(id) {
            break;
        }
        if walk.peek().is_some_and(|&below| view.blocks_pointer(below)) {
            break;
        }
    }
    out
}
