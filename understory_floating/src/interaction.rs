// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input routing: hover, press, focus and dismissal sources.

use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use understory_placement::SafeTriangle;

use crate::Engine;
use crate::dismiss::{StackView, resolve_outside_press};
use crate::error::Result;
use crate::hover::HoverEvent;
use crate::layer::backdrop_for;
use crate::timer::{TimerAction, TimerSlot};
use crate::types::{ChangeReason, DismissFlags, FloatingId, HoverTarget, OpenedBy, Part, Trigger};

impl Engine {
    /// The pointer is now over `target` (or over nothing floating).
    ///
    /// Being over a nested element counts as being over each of its
    /// ancestors, so moving into a submenu keeps its parent open.
    pub fn pointer_over(&mut self, target: Option<HoverTarget>, now: u64) -> Result<()> {
        self.now = now;
        let chain = match target {
            Some(t) => {
                self.element(t.id)?;
                self.ancestry(t.id)
            }
            None => Vec::new(),
        };
        for event in self.hover.update(&chain, target) {
            match event {
                HoverEvent::Leave(id) => self.hover_left(id, now)?,
                HoverEvent::Enter(id) => {
                    let over_trigger = target == Some(HoverTarget::trigger(id));
                    self.hover_entered(id, over_trigger, now)?;
                }
            }
        }
        Ok(())
    }

    /// Pointer motion with position, for the safe-triangle grace area.
    ///
    /// Leaving a hover-opened trigger toward its popup does not count as
    /// leaving while the pointer stays inside the triangle spanned by the
    /// exit point and the popup's near edge. The triangle only covers empty
    /// space and the surfaces of enclosing elements: landing on any other
    /// floating element routes normally. A pointer resting in the triangle
    /// for `safe_triangle_timeout_ms` closes the element.
    pub fn pointer_move(
        &mut self,
        point: Point,
        target: Option<HoverTarget>,
        now: u64,
    ) -> Result<()> {
        if let Some(prev) = self.hover.leaf()
            && prev.part == Part::Trigger
            && self.safe.is_none()
            && target.is_none_or(|t| t.id != prev.id)
        {
            let exit = self.last_point.unwrap_or(point);
            self.safe = self
                .safe_triangle_for(prev.id, exit)
                .map(|triangle| (prev.id, triangle));
        }
        if let Some((owner, triangle)) = self.safe {
            let arrived = target.is_some_and(|t| self.is_within(t.id, owner));
            let crossing = target
                .is_none_or(|t| t.part == Part::Popup && self.is_within(owner, t.id));
            if !arrived && crossing && triangle.contains(point) {
                self.last_point = Some(point);
                let grace = self.element(owner)?.options.safe_triangle_timeout_ms;
                self.timers.schedule(
                    owner,
                    TimerAction::Close {
                        reason: ChangeReason::Hover,
                    },
                    now.saturating_add(grace),
                );
                return Ok(());
            }
            self.safe = None;
            if arrived {
                self.timers.cancel(owner, TimerSlot::Close);
            }
        }
        self.last_point = Some(point);
        self.pointer_over(target, now)
    }

    fn safe_triangle_for(&self, id: FloatingId, exit: Point) -> Option<SafeTriangle> {
        let el = self.slot(id)?;
        if !el.open || el.opened_by != Some(OpenedBy::Hover) || !el.options.safe_triangle {
            return None;
        }
        let popup = el.popup?;
        let side = el.placement?.side;
        Some(SafeTriangle::new(exit, popup, side))
    }

    fn hover_entered(&mut self, id: FloatingId, over_trigger: bool, now: u64) -> Result<()> {
        self.timers.cancel(id, TimerSlot::Close);
        let el = self.element(id)?;
        if over_trigger && el.options.open_on_hover && !el.open {
            let delay = el.options.delay_ms;
            self.schedule_open(id, Trigger::Hover, delay, now)?;
        }
        Ok(())
    }

    fn hover_left(&mut self, id: FloatingId, now: u64) -> Result<()> {
        let el = self.element(id)?;
        if el.open && el.opened_by != Some(OpenedBy::Hover) {
            return Ok(());
        }
        let delay = el.options.close_delay_ms;
        self.schedule_close_for(id, delay, ChangeReason::Hover, now)
    }

    /// The trigger of `id` was pressed.
    ///
    /// Opens a closed element. An element opened by hover or focus becomes
    /// press-opened and stays open; otherwise the press closes it.
    ///
    /// For a press that lands on a trigger, call this before
    /// [`pointer_down`](Self::pointer_down) with the same `now`, so the
    /// dismissal pass recognizes the press as the one that opened the element.
    pub fn trigger_press(&mut self, id: FloatingId, now: u64) -> Result<()> {
        self.now = now;
        let el = self.element_mut(id)?;
        el.trigger_pressed_at = Some(now);
        let (open, opened_by) = (el.open, el.opened_by);
        if !open {
            return self.schedule_open(id, Trigger::Press, 0, now);
        }
        match opened_by {
            Some(OpenedBy::Hover | OpenedBy::Focus) => self.upgrade(id, OpenedBy::Press),
            _ => {
                self.timers.cancel(id, TimerSlot::Close);
                self.request_close(id, ChangeReason::Press)?;
            }
        }
        Ok(())
    }

    /// The trigger of `id` received keyboard focus.
    pub fn focus(&mut self, id: FloatingId, now: u64) -> Result<()> {
        if !self.element(id)?.options.open_on_focus {
            return Ok(());
        }
        self.schedule_open(id, Trigger::Focus, 0, now)
    }

    /// The trigger of `id` lost focus to `next_focus`.
    ///
    /// A focus-opened element closes unless focus moved into itself or one
    /// of its nested elements.
    pub fn blur(&mut self, id: FloatingId, next_focus: Option<FloatingId>, now: u64) -> Result<()> {
        self.now = now;
        let el = self.element(id)?;
        if !el.open || el.opened_by != Some(OpenedBy::Focus) {
            return Ok(());
        }
        if next_focus.is_some_and(|next| self.is_within(next, id)) {
            return Ok(());
        }
        self.request_close(id, ChangeReason::Blur)?;
        Ok(())
    }

    /// A pointer-down anywhere in the window.
    ///
    /// Returns the elements it dismissed, topmost first. When the press also
    /// hits a trigger, [`trigger_press`](Self::trigger_press) must run first
    /// at the same `now`; a press on an element's own trigger is never an
    /// outside press.
    pub fn pointer_down(&mut self, point: Point, now: u64) -> Result<Vec<FloatingId>> {
        self.now = now;
        let targets = resolve_outside_press(&self.stack, &*self, point, now);
        let mut closed = Vec::with_capacity(targets.len());
        for id in targets {
            if self.slot(id).is_some_and(|el| el.open)
                && self.request_close(id, ChangeReason::OutsidePress)?
            {
                closed.push(id);
            }
        }
        Ok(closed)
    }

    /// Escape key. Dismisses only the topmost element.
    pub fn escape(&mut self, now: u64) -> Result<Option<FloatingId>> {
        self.now = now;
        let Some(top) = self.stack.top() else {
            return Ok(None);
        };
        if !self
            .element(top)?
            .options
            .dismiss
            .contains(DismissFlags::ESCAPE_KEY)
        {
            return Ok(None);
        }
        Ok(self
            .request_close(top, ChangeReason::EscapeKey)?
            .then_some(top))
    }

    /// The page scrolled by `delta`.
    ///
    /// Elements opting into scroll dismissal close once the distance scrolled
    /// since they opened exceeds their tolerance.
    pub fn scroll(&mut self, delta: Vec2, now: u64) -> Result<Vec<FloatingId>> {
        self.now = now;
        let distance = delta.hypot();
        let armed: Vec<FloatingId> = self.stack.top_down().collect();
        let mut over = Vec::new();
        for id in armed {
            let el = self.element_mut(id)?;
            if !el.options.dismiss.contains(DismissFlags::SCROLL) {
                continue;
            }
            el.scrolled += distance;
            if el.scrolled > el.options.scroll_tolerance {
                over.push(id);
            }
        }
        let mut closed = Vec::new();
        for id in over {
            if self.slot(id).is_some_and(|el| el.open)
                && self.request_close(id, ChangeReason::Scroll)?
            {
                closed.push(id);
            }
        }
        Ok(closed)
    }

    /// The anchor of `id` left the layout tree.
    pub fn anchor_detached(&mut self, id: FloatingId, now: u64) -> Result<bool> {
        self.now = now;
        let el = self.element(id)?;
        if !el.open || !el.options.dismiss.contains(DismissFlags::ANCHOR_DETACHED) {
            return Ok(false);
        }
        self.request_close(id, ChangeReason::AnchorDetached)
    }
}

impl StackView for Engine {
    fn contains_point(&self, id: FloatingId, pt: Point) -> bool {
        let Some(el) = self.slot(id) else {
            return false;
        };
        el.popup.is_some_and(|r| r.contains(pt))
            || el.anchor.is_some_and(|r| r.contains(pt))
            || el.children.iter().any(|&child| {
                self.slot(child).is_some_and(|c| c.open) && self.contains_point(child, pt)
            })
    }

    fn pressed_trigger_at(&self, id: FloatingId, now: u64) -> bool {
        self.slot(id)
            .is_some_and(|el| el.trigger_pressed_at == Some(now))
    }

    fn dismisses_on_outside_press(&self, id: FloatingId) -> bool {
        self.slot(id)
            .is_some_and(|el| el.options.dismiss.contains(DismissFlags::OUTSIDE_PRESS))
    }

    fn blocks_pointer(&self, id: FloatingId) -> bool {
        self.slot(id).is_some_and(|el| {
            backdrop_for(el.options.modal, el.opened_by).is_some_and(|b| b.blocks_pointer)
        })
    }
}
