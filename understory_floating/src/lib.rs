// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_floating --heading-base-level=0

//! Understory Floating: the open/close engine behind tooltips, popovers, menus, and select lists.
//!
//! An [`Engine`] owns every anchored floating element of a window and decides, deterministically,
//! when each one is logically open, when it is mounted, where it sits, and what dismisses it.
//!
//! - Mount transitions: an element stays mounted while its exit animation runs, and reopening
//!   during the exit resumes without a remount. See [`TransitionPhase`].
//! - Timing: per-element open and close delays, debounced per element, and delay groups that let
//!   siblings open instantly once one of them is open. See [`Engine::create_group`].
//! - Dismissal: outside press, Escape, scroll, and a detached anchor, resolved against a stack of
//!   open elements so nested popups close inner-first.
//! - Stacking: every mounted element holds a z-index band, nested elements sit above their
//!   parents, and modal elements report a backdrop.
//! - Placement: [`Engine::layout`] runs `understory_placement` and keeps the result for snapshots.
//!
//! ## Host-driven time
//!
//! The engine never reads a clock and never spawns anything. Each entry point takes the current
//! time in milliseconds; [`Engine::advance`] fires due timers and [`Engine::frame`] steps
//! transitions once per rendered frame. [`Engine::next_deadline`] says when to call back.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_floating::{Engine, FloatingOptions, HoverTarget, NoTransitions, TransitionPhase};
//!
//! let mut engine = Engine::default();
//! let tooltip = engine.insert(FloatingOptions { delay_ms: 200, ..Default::default() })?;
//!
//! engine.pointer_over(Some(HoverTarget::trigger(tooltip)), 0)?;
//! engine.advance(199);
//! assert!(!engine.is_open(tooltip)?);
//! engine.advance(200);
//! assert!(engine.is_open(tooltip)?);
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let anchor = Rect::new(100.0, 100.0, 160.0, 124.0);
//! engine.layout(tooltip, anchor, Size::new(80.0, 30.0), Some(viewport))?;
//!
//! // Initial, then two idle frames of lookahead before the element counts as open.
//! for now in [216, 232, 248] {
//!     engine.frame(now, &NoTransitions);
//! }
//! let snapshot = engine.snapshot(tooltip)?;
//! assert_eq!(snapshot.phase, TransitionPhase::Open);
//! assert_eq!((snapshot.x, snapshot.y), (90.0, 124.0));
//! # Ok::<(), understory_floating::FloatingError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dismiss;
mod engine;
mod error;
mod group;
mod hover;
mod interaction;
mod layer;
mod measure;
mod presence;
mod timer;
mod types;

pub use engine::Engine;
pub use error::{FloatingError, Result};
pub use measure::Measure;
pub use presence::{NoTransitions, TransitionProbe};
pub use types::{
    Backdrop, ChangeReason, DelayGroupOptions, DismissFlags, EngineOptions, FloatingId,
    FloatingOptions, GroupId, HoverTarget, InstantType, Layer, OpenChangeDetails,
    OpenChangeHandler, OpenedBy, Part, Snapshot, TransitionPhase, Trigger,
};

pub use understory_placement::{PlacementRequest, PlacementResult};
