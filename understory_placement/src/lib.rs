// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native anchored positioning for floating UI.
//!
//! Given an anchor rectangle, a popup size, and a [`PlacementRequest`], [`compute_placement`]
//! decides where the popup goes: which [`Side`] of the anchor, which [`Align`]ment along that side,
//! the popup origin, the arrow offset, and how much room is available.
//!
//! ## Collision avoidance
//!
//! The popup tries to stay inside the request's collision boundary, shrunk by the collision padding.
//! - Main axis: when the preferred side overflows, the opposite side is tried ("flip"),
//!   then the perpendicular sides when a [`FallbackAxis`] is set.
//! - Cross axis: the popup slides along the anchor edge until it fits or clamps to the boundary
//!   ("shift"). Unless [`PlacementRequest::sticky`] is set, it never slides off the anchor.
//! - When nothing fits, the candidate with the least overflow area wins, ties keeping the preferred side.
//!
//! ## Not a layout engine
//!
//! This crate does not measure anything. Upstream code supplies viewport-space rectangles and
//! applies the result; see `understory_floating` for the state machine that decides when a popup
//! is mounted and when to recompute its placement.
//!
//! ## Degenerate input
//!
//! A zero-area or non-finite anchor or boundary never panics and never yields `NaN`:
//! the popup is centered in the boundary instead.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{compute_placement, Align, PlacementRequest, Side};
//!
//! let request = PlacementRequest {
//!     side: Side::Bottom,
//!     align: Align::Center,
//!     side_offset: 8.0,
//!     collision_boundary: Rect::new(0.0, 0.0, 1280.0, 720.0),
//!     ..Default::default()
//! };
//! let anchor = Rect::new(600.0, 40.0, 680.0, 72.0);
//! let placed = compute_placement(anchor, Size::new(200.0, 120.0), &request);
//!
//! assert_eq!(placed.side, Side::Bottom);
//! assert_eq!((placed.x, placed.y), (540.0, 80.0));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod resolve;
mod safe;
mod types;

pub use resolve::compute_placement;
pub use safe::SafeTriangle;
pub use types::{
    Align, AlignAvoidance, ArrowOptions, ArrowPosition, CollisionAvoidance, FallbackAxis,
    PlacementRequest, PlacementResult, Side, SideAvoidance, TextDirection,
};
