// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host geometry for re-layout.

use kurbo::{Rect, Size};

use crate::types::FloatingId;

/// Supplies current geometry for mounted elements.
///
/// Used by [`Engine::update_layout`](crate::Engine::update_layout) whenever
/// the host's layout may have moved an anchor or resized a popup.
pub trait Measure {
    /// Anchor rectangle in the boundary's coordinate space.
    ///
    /// `None` means the anchor is no longer attached to the layout tree.
    fn anchor_rect(&self, id: FloatingId) -> Option<Rect>;

    /// Natural size of the popup content.
    fn popup_size(&self, id: FloatingId) -> Option<Size>;

    /// Collision boundary overriding the element's configured one.
    fn boundary(&self, id: FloatingId) -> Option<Rect> {
        let _ = id;
        None
    }
}
