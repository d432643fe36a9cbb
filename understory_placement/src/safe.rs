// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent geometry.
//!
//! When the pointer leaves a trigger and heads toward its popup, it usually
//! crosses empty space (the side offset, or a corner of the anchor). A
//! [`SafeTriangle`] spans from the exit point to the popup's near edge; while
//! the pointer stays inside it, a hover-opened popup should stay open.

use kurbo::{Point, Rect};

use crate::types::Side;

/// Triangle from the pointer's exit point to the two corners of the popup edge
/// that faces the anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SafeTriangle {
    /// Where the pointer left the trigger.
    pub apex: Point,
    /// First near-edge corner of the popup.
    pub a: Point,
    /// Second near-edge corner of the popup.
    pub b: Point,
}

impl SafeTriangle {
    /// Build the triangle for a popup placed on `side` of its anchor.
    pub fn new(exit: Point, popup: Rect, side: Side) -> Self {
        let (a, b) = match side {
            Side::Bottom => (Point::new(popup.x0, popup.y0), Point::new(popup.x1, popup.y0)),
            Side::Top => (Point::new(popup.x0, popup.y1), Point::new(popup.x1, popup.y1)),
            Side::Right => (Point::new(popup.x0, popup.y0), Point::new(popup.x0, popup.y1)),
            Side::Left => (Point::new(popup.x1, popup.y0), Point::new(popup.x1, popup.y1)),
        };
        Self { apex: exit, a, b }
    }

    /// Whether `pt` lies inside the triangle (edges included).
    pub fn contains(&self, pt: Point) -> bool {
        let d1 = cross(self.apex, self.a, pt);
        let d2 = cross(self.a, self.b, pt);
        let d3 = cross(self.b, self.apex, pt);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
