// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount/transition controller.
//!
//! ## Overview
//!
//! [`Presence`] tracks whether a popup is in the tree and which transition
//! phase it is in, separately from the logical open flag. Closing keeps the
//! popup mounted until its exit transition finishes.
//!
//! ## Completion detection
//!
//! Whether a transition is still running is asked of a [`TransitionProbe`] on
//! each frame. A transition counts as finished after two consecutive idle
//! samples one frame apart, so one unreliable frame cannot end it early.
//! [`Engine::transition_end`](crate::Engine::transition_end) finishes it at
//! once, and `transition_timeout_ms` bounds the wait.

use crate::types::{FloatingId, TransitionPhase};

/// Reports whether an element's enter/exit transition is still running.
///
/// Implementations should answer from resolved style (a transition declared
/// with a zero computed duration is not running).
pub trait TransitionProbe {
    /// Returns true while `id` has an active animation or transition.
    fn is_animating(&self, id: FloatingId) -> bool;
}

impl<F: Fn(FloatingId) -> bool> TransitionProbe for F {
    fn is_animating(&self, id: FloatingId) -> bool {
        self(id)
    }
}

/// Probe for hosts without animations: every transition completes after the lookahead.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTransitions;

impl TransitionProbe for NoTransitions {
    fn is_animating(&self, _id: FloatingId) -> bool {
        false
    }
}

/// Observable outcome of a presence update.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum PresenceStep {
    /// Nothing observable changed.
    None,
    /// Entered the tree in `Initial`.
    Mounted,
    /// Phase changed while staying mounted.
    Moved,
    /// Left the tree.
    Unmounted,
}

/// Idle samples required before a transition counts as finished.
const IDLE_SAMPLES: u8 = 2;

#[derive(Clone, Debug, Default)]
pub(crate) struct Presence {
    phase: TransitionPhase,
    phase_started: u64,
    idle_samples: u8,
    // Mounted during the frame being stepped; `Initial` stays for the next one.
    held: bool,
    // The single pending frame step; superseding requests overwrite it.
    needs_frame: bool,
}

impl Presence {
    pub(crate) fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.phase != TransitionPhase::Unmounted
    }

    pub(crate) fn needs_frame(&self) -> bool {
        self.needs_frame
    }

    fn enter(&mut self, phase: TransitionPhase, now: u64) {
        self.phase = phase;
        self.phase_started = now;
        self.idle_samples = 0;
        self.held = false;
        self.needs_frame = matches!(
            phase,
            TransitionPhase::Initial | TransitionPhase::Opening | TransitionPhase::Closing
        );
    }

    pub(crate) fn request_open(&mut self, now: u64, animate: bool) -> PresenceStep {
        match self.phase {
            TransitionPhase::Unmounted => {
                self.enter(TransitionPhase::Initial, now);
                PresenceStep::Mounted
            }
            TransitionPhase::Closing => {
                // Resume without remounting.
                if animate {
                    self.enter(TransitionPhase::Opening, now);
                } else {
                    self.enter(TransitionPhase::Open, now);
                }
                PresenceStep::Moved
            }
            TransitionPhase::Initial | TransitionPhase::Opening | TransitionPhase::Open => {
                PresenceStep::None
            }
        }
    }

    /// Keep `Initial` through the frame currently being stepped.
    pub(crate) fn hold_initial(&mut self) {
        if self.phase == TransitionPhase::Initial {
            self.held = true;
        }
    }

    pub(crate) fn request_close(&mut self, now: u64, animate: bool) -> PresenceStep {
        match self.phase {
            TransitionPhase::Initial | TransitionPhase::Opening | TransitionPhase::Open => {
                if animate {
                    self.enter(TransitionPhase::Closing, now);
                    PresenceStep::Moved
                } else {
                    self.enter(TransitionPhase::Unmounted, now);
                    PresenceStep::Unmounted
                }
            }
            TransitionPhase::Closing | TransitionPhase::Unmounted => PresenceStep::None,
        }
    }

    /// Advance by one frame. `sample` is only consulted while a transition runs.
    pub(crate) fn on_frame(
        &mut self,
        now: u64,
        animate: bool,
        timeout_ms: u64,
        sample: impl FnOnce() -> bool,
    ) -> PresenceStep {
        if !self.needs_frame {
            return PresenceStep::None;
        }
        match self.phase {
            TransitionPhase::Initial if self.held => {
                self.held = false;
                PresenceStep::None
            }
            TransitionPhase::Initial => {
                if animate {
                    self.enter(TransitionPhase::Opening, now);
                } else {
                    self.enter(TransitionPhase::Open, now);
                }
                PresenceStep::Moved
            }
            TransitionPhase::Opening | TransitionPhase::Closing => {
                if !animate {
                    return self.complete(now);
                }
                if sample() {
                    self.idle_samples = 0;
                } else {
                    self.idle_samples = self.idle_samples.saturating_add(1);
                }
                let timed_out = now.saturating_sub(self.phase_started) >= timeout_ms;
                if timed_out && self.idle_samples < IDLE_SAMPLES {
                    tracing::debug!(phase = ?self.phase, "transition detection timed out");
                }
                if self.idle_samples >= IDLE_SAMPLES || timed_out {
                    self.complete(now)
                } else {
                    PresenceStep::None
                }
            }
            TransitionPhase::Open | TransitionPhase::Unmounted => {
                self.needs_frame = false;
                PresenceStep::None
            }
        }
    }

    /// Finish the running transition, if any.
    pub(crate) fn complete(&mut self, now: u64) -> PresenceStep {
        match self.phase {
            TransitionPhase::Opening => {
                self.enter(TransitionPhase::Open, now);
                PresenceStep::Moved
            }
            TransitionPhase::Closing => {
                self.enter(TransitionPhase::Unmounted, now);
                PresenceStep::Unmounted
            }
            TransitionPhase::Initial | TransitionPhase::Open | TransitionPhase::Unmounted => {
                PresenceStep::None
            }
        }
    }
}
