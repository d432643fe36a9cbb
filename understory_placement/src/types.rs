// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement inputs and outputs: sides, alignments, requests, and results.

use kurbo::{Insets, Rect};

/// Edge of the anchor that the popup attaches to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Right of the anchor.
    Right,
    /// Below the anchor.
    #[default]
    Bottom,
    /// Left of the anchor.
    Left,
}

impl Side {
    /// The side across the anchor from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the popup sits above or below the anchor (main axis is `y`).
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Alignment of the popup along the anchor edge it attaches to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Align {
    /// Align the popup's start edge with the anchor's start edge.
    Start,
    /// Center the popup on the anchor.
    #[default]
    Center,
    /// Align the popup's end edge with the anchor's end edge.
    End,
}

impl Align {
    /// `Start` and `End` swap; `Center` stays.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::Center => Self::Center,
            Self::End => Self::Start,
        }
    }
}

/// Inline direction, used to resolve `Start`/`End` on top and bottom sides.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextDirection {
    /// Left to right: start is the left edge.
    #[default]
    Ltr,
    /// Right to left: start is the right edge.
    Rtl,
}

/// What to do when the popup overflows on its main axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SideAvoidance {
    /// Try the opposite side (and the fallback axis, if enabled).
    #[default]
    Flip,
    /// Keep the preferred side even when it overflows.
    None,
}

/// What to do when the popup overflows on its cross axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum AlignAvoidance {
    /// Slide the popup along the anchor edge until it fits, or clamp to the boundary.
    #[default]
    Shift,
    /// Try the other alignments without sliding.
    Flip,
    /// Keep the preferred alignment.
    None,
}

/// Whether perpendicular sides are tried once both sides of the preferred axis overflow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FallbackAxis {
    /// Never leave the preferred axis.
    None,
    /// Try the inline-start (or top) perpendicular side first.
    Start,
    /// Try the inline-end (or bottom) perpendicular side first.
    #[default]
    End,
}

/// Collision avoidance policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CollisionAvoidance {
    /// Main-axis policy.
    pub side: SideAvoidance,
    /// Cross-axis policy.
    pub align: AlignAvoidance,
    /// Perpendicular fallback when flipping alone does not resolve the overflow.
    pub fallback_axis: FallbackAxis,
}

/// Arrow geometry, used to compute [`ArrowPosition`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowOptions {
    /// Arrow extent along the popup edge it sits on.
    pub size: f64,
    /// Minimum distance between the arrow and the popup corners (rounded-corner inset).
    pub padding: f64,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            size: 10.0,
            padding: 5.0,
        }
    }
}

/// A placement request, supplied by the popup's owner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Preferred side of the anchor.
    pub side: Side,
    /// Preferred alignment along that side.
    pub align: Align,
    /// Gap between anchor and popup on the main axis.
    pub side_offset: f64,
    /// Displacement along the cross axis, toward the alignment's end.
    pub align_offset: f64,
    /// Rectangle the popup should stay within, usually the viewport.
    pub collision_boundary: Rect,
    /// Keep-out distance from each edge of [`collision_boundary`](Self::collision_boundary).
    pub collision_padding: Insets,
    /// Flip/shift policy.
    pub collision_avoidance: CollisionAvoidance,
    /// When `false`, shifting stops once the popup would detach from the anchor.
    pub sticky: bool,
    /// Arrow geometry, if the popup renders one.
    pub arrow: Option<ArrowOptions>,
    /// Inline direction for `Start`/`End`.
    pub direction: TextDirection,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Center,
            side_offset: 0.0,
            align_offset: 0.0,
            collision_boundary: Rect::ZERO,
            collision_padding: Insets::uniform(5.0),
            collision_avoidance: CollisionAvoidance::default(),
            sticky: false,
            arrow: None,
            direction: TextDirection::Ltr,
        }
    }
}

/// Arrow offset inside the popup.
///
/// Only the coordinate along the popup edge facing the anchor is set: `x` for
/// [`Side::Top`]/[`Side::Bottom`], `y` for [`Side::Left`]/[`Side::Right`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArrowPosition {
    /// Offset from the popup's left edge.
    pub x: Option<f64>,
    /// Offset from the popup's top edge.
    pub y: Option<f64>,
    /// False when the arrow had to be clamped away from the anchor center.
    pub centered: bool,
}

/// Outcome of [`compute_placement`](crate::compute_placement).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Popup left edge, viewport coordinates.
    pub x: f64,
    /// Popup top edge, viewport coordinates.
    pub y: f64,
    /// Chosen side; may differ from the preferred one after a flip.
    pub side: Side,
    /// Chosen alignment.
    pub align: Align,
    /// Arrow offset, when the request carried [`ArrowOptions`].
    pub arrow: Option<ArrowPosition>,
    /// Room for the popup on the chosen side's main axis, and the bounds' cross extent.
    pub available_width: f64,
    /// See [`available_width`](Self::available_width).
    pub available_height: f64,
    /// The anchor lies entirely outside the collision boundary.
    pub anchor_hidden: bool,
}

impl PlacementResult {
    /// The popup rectangle for a popup of the given size.
    pub fn rect(&self, size: kurbo::Size) -> Rect {
        Rect::new(self.x, self.y, self.x + size.width, self.y + size.height)
    }
}
