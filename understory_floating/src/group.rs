// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delay groups.
//!
//! Once any member of a group has opened, siblings open without their hover
//! delay: while a member is open, and for `timeout_ms` after the last one
//! closed. At most one member is active at a time.

use crate::types::{DelayGroupOptions, FloatingId};

#[derive(Clone, Debug)]
pub(crate) struct DelayGroup {
    options: DelayGroupOptions,
    active: Option<FloatingId>,
    last_close: Option<u64>,
}

impl DelayGroup {
    pub(crate) fn new(options: DelayGroupOptions) -> Self {
        Self {
            options,
            active: None,
            last_close: None,
        }
    }

    pub(crate) fn active(&self) -> Option<FloatingId> {
        self.active
    }

    /// Whether `id` should skip its open delay at `now`.
    pub(crate) fn is_instant_phase(&self, id: FloatingId, now: u64) -> bool {
        if self.active.is_some_and(|a| a != id) {
            return true;
        }
        self.last_close
            .is_some_and(|t| now.saturating_sub(t) < self.options.timeout_ms)
    }

    pub(crate) fn open_delay(&self, member_delay: u64) -> u64 {
        self.options.delay_ms.unwrap_or(member_delay)
    }

    pub(crate) fn close_delay(&self, member_delay: u64) -> u64 {
        self.options.close_delay_ms.unwrap_or(member_delay)
    }

    pub(crate) fn member_opened(&mut self, id: FloatingId) {
        self.active = Some(id);
    }

    pub(crate) fn member_closed(&mut self, id: FloatingId, now: u64) {
        if self.active == Some(id) {
            self.active = None;
            self.last_close = Some(now);
        }
    }

    pub(crate) fn member_removed(&mut self, id: FloatingId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }
}
