// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking bands and backdrop policy.
//!
//! Every newly mounted top-level element gets the next band, so later popups
//! stack above earlier ones. A nested element sits one band above its parent,
//! and never below anything already handed out. The counter restarts once no
//! element holds a band.

use alloc::vec::Vec;

use crate::types::{Backdrop, FloatingId, Layer, OpenedBy};

#[derive(Clone, Debug)]
pub(crate) struct LayerAllocator {
    held: Vec<(FloatingId, u32)>,
    next_band: u32,
    base_z_index: i32,
    z_index_step: i32,
}

impl LayerAllocator {
    pub(crate) fn new(base_z_index: i32, z_index_step: i32) -> Self {
        Self {
            held: Vec::new(),
            next_band: 0,
            base_z_index,
            z_index_step,
        }
    }

    fn band_of(&self, id: FloatingId) -> Option<u32> {
        self.held.iter().find(|(k, _)| *k == id).map(|&(_, b)| b)
    }

    fn layer(&self, band: u32) -> Layer {
        let band_z = i32::try_from(band)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.z_index_step);
        Layer {
            band,
            z_index: self.base_z_index.saturating_add(band_z),
        }
    }

    pub(crate) fn get(&self, id: FloatingId) -> Option<Layer> {
        self.band_of(id).map(|b| self.layer(b))
    }

    pub(crate) fn assign(&mut self, id: FloatingId, parent: Option<FloatingId>) -> Layer {
        if let Some(band) = self.band_of(id) {
            return self.layer(band);
        }
        let band = match parent.and_then(|p| self.band_of(p)) {
            Some(parent_band) => parent_band.saturating_add(1).max(self.next_band),
            None => self.next_band,
        };
        self.held.push((id, band));
        self.next_band = self.next_band.max(band.saturating_add(1));
        self.layer(band)
    }

    pub(crate) fn release(&mut self, id: FloatingId) {
        self.held.retain(|(k, _)| *k != id);
        if self.held.is_empty() {
            self.next_band = 0;
        }
    }
}

/// Backdrop for an element, derived from modality and how it was opened.
///
/// Hover-opened backdrops let the pointer through so moving across content
/// below neither dismisses nor blocks scrolling.
pub(crate) fn backdrop_for(modal: bool, opened_by: Option<OpenedBy>) -> Option<Backdrop> {
    if !modal {
        return None;
    }
    Some(Backdrop {
        blocks_pointer: opened_by != Some(OpenedBy::Hover),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: FloatingId = FloatingId(0, 1);
    const B: FloatingId = FloatingId(1, 1);
    const C: FloatingId = FloatingId(2, 1);

    #[test]
    fn top_level_bands_increase() {
        let mut l = LayerAllocator::new(1000, 10);
        assert_eq!(l.assign(A, None), Layer { band: 0, z_index: 1000 }, "first band");
        assert_eq!(l.assign(B, None), Layer { band: 1, z_index: 1010 }, "second band");
        assert_eq!(l.assign(A, None).band, 0, "assign is idempotent");
    }

    #[test]
    fn nested_inherits_plus_one_without_collisions() {
        let mut l = LayerAllocator::new(0, 1);
        l.assign(A, None);
        let child = l.assign(C, Some(A));
        assert_eq!(child.band, 1, "parent band + 1");
        assert_eq!(l.assign(B, None).band, 2, "next top-level goes above the child");
    }

    #[test]
    fn counter_restarts_when_empty() {
        let mut l = LayerAllocator::new(0, 1);
        l.assign(A, None);
        l.assign(B, None);
        l.release(A);
        assert_eq!(l.assign(C, None).band, 2, "monotonic while any band is held");
        l.release(B);
        l.release(C);
        assert_eq!(l.get(C), None, "released");
        assert_eq!(l.assign(A, None).band, 0, "restart after all released");
    }

    #[test]
    fn backdrop_policy_follows_opened_by() {
        assert_eq!(backdrop_for(false, Some(OpenedBy::Press)), None, "non-modal");
        assert_eq!(
            backdrop_for(true, Some(OpenedBy::Hover)),
            Some(Backdrop {
                blocks_pointer: false
            }),
            "hover backdrop is pointer-transparent"
        );
        assert_eq!(
            backdrop_for(true, Some(OpenedBy::Press)),
            Some(Backdrop {
                blocks_pointer: true
            }),
            "press backdrop blocks"
        );
    }
}
