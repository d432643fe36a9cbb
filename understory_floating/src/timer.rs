// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven timer queue for open/close delays.
//!
//! Each element has at most one pending timer per [`TimerSlot`]. Scheduling
//! into an occupied slot replaces the old timer before the new one exists, so
//! two competing timers for the same element and kind are never alive.

use alloc::vec::Vec;

use crate::types::{ChangeReason, FloatingId, InstantType, OpenedBy};

/// What a timer does when it fires.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TimerAction {
    Open {
        by: OpenedBy,
        instant: Option<InstantType>,
    },
    Close {
        reason: ChangeReason,
    },
}

impl TimerAction {
    pub(crate) fn slot(self) -> TimerSlot {
        match self {
            Self::Open { .. } => TimerSlot::Open,
            Self::Close { .. } => TimerSlot::Close,
        }
    }
}

/// Debounce key within an element.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TimerSlot {
    Open,
    Close,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Timer {
    /// Generational handle; a timer outliving its element fails the liveness check.
    pub(crate) id: FloatingId,
    pub(crate) action: TimerAction,
    pub(crate) deadline: u64,
    seq: u64,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct TimerQueue {
    timers: Vec<Timer>,
    seq: u64,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, id: FloatingId, action: TimerAction, deadline: u64) {
        self.cancel(id, action.slot());
        self.seq += 1;
        self.timers.push(Timer {
            id,
            action,
            deadline,
            seq: self.seq,
        });
    }

    /// Cancel the pending timer in `slot`; returns whether one existed.
    pub(crate) fn cancel(&mut self, id: FloatingId, slot: TimerSlot) -> bool {
        let before = self.timers.len();
        self.timers
            .retain(|t| !(t.id == id && t.action.slot() == slot));
        before != self.timers.len()
    }

    pub(crate) fn cancel_all(&mut self, id: FloatingId) {
        self.timers.retain(|t| t.id != id);
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self, id: FloatingId, slot: TimerSlot) -> bool {
        self.timers
            .iter()
            .any(|t| t.id == id && t.action.slot() == slot)
    }

    pub(crate) fn next_deadline(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at `now`; ties fire in scheduling order.
    pub(crate) fn pop_due(&mut self, now: u64) -> Option<Timer> {
        let (i, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.seq))?;
        Some(self.timers.remove(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: FloatingId = FloatingId(0, 1);
    const B: FloatingId = FloatingId(1, 1);

    fn open() -> TimerAction {
        TimerAction::Open {
            by: OpenedBy::Hover,
            instant: None,
        }
    }

    fn close() -> TimerAction {
        TimerAction::Close {
            reason: ChangeReason::Hover,
        }
    }

    #[test]
    fn same_slot_debounces() {
        let mut q = TimerQueue::default();
        q.schedule(A, open(), 100);
        q.schedule(A, open(), 250);
        assert_eq!(q.next_deadline(), Some(250), "earlier timer replaced");
        assert!(q.pop_due(200).is_none(), "nothing due yet");
        assert_eq!(q.pop_due(250).map(|t| t.deadline), Some(250), "fires once");
        assert!(q.pop_due(1000).is_none(), "no second timer");
    }

    #[test]
    fn slots_are_independent() {
        let mut q = TimerQueue::default();
        q.schedule(A, open(), 100);
        q.schedule(A, close(), 50);
        assert!(q.is_pending(A, TimerSlot::Open), "open pending");
        assert!(q.cancel(A, TimerSlot::Open), "open canceled");
        assert!(!q.cancel(A, TimerSlot::Open), "nothing left to cancel");
        assert!(q.is_pending(A, TimerSlot::Close), "close untouched");
    }

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut q = TimerQueue::default();
        q.schedule(B, open(), 100);
        q.schedule(A, open(), 100);
        q.schedule(A, close(), 40);
        let order: Vec<_> = core::iter::from_fn(|| q.pop_due(100))
            .map(|t| (t.id, t.action.slot()))
            .collect();
        assert_eq!(
            order,
            [(A, TimerSlot::Close), (B, TimerSlot::Open), (A, TimerSlot::Open)],
            "deadline first, then scheduling order"
        );
    }

    #[test]
    fn cancel_all_clears_element() {
        let mut q = TimerQueue::default();
        q.schedule(A, open(), 10);
        q.schedule(A, close(), 20);
        q.schedule(B, open(), 30);
        q.cancel_all(A);
        assert_eq!(q.next_deadline(), Some(30), "only B remains");
    }
}
