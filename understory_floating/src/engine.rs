// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating element engine: registry, open state, timers and layout.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use understory_placement::{PlacementRequest, PlacementResult, SafeTriangle, compute_placement};

use crate::dismiss::DismissalStack;
use crate::error::{FloatingError, Result};
use crate::group::DelayGroup;
use crate::hover::HoverPath;
use crate::layer::{LayerAllocator, backdrop_for};
use crate::measure::Measure;
use crate::presence::{Presence, PresenceStep, TransitionProbe};
use crate::timer::{TimerAction, TimerQueue, TimerSlot};
use crate::types::{
    ChangeReason, DelayGroupOptions, EngineOptions, FloatingId, FloatingOptions, GroupId,
    InstantType, OpenChangeDetails, OpenChangeHandler, OpenedBy, Snapshot, Trigger,
};

pub(crate) struct Element {
    pub(crate) generation: u32,
    pub(crate) options: FloatingOptions,
    pub(crate) children: Vec<FloatingId>,
    pub(crate) open: bool,
    pub(crate) opened_by: Option<OpenedBy>,
    pub(crate) instant: Option<InstantType>,
    pub(crate) presence: Presence,
    pub(crate) placement: Option<PlacementResult>,
    pub(crate) anchor: Option<Rect>,
    pub(crate) popup: Option<Rect>,
    /// Scroll distance accumulated since the element last opened.
    pub(crate) scrolled: f64,
    pub(crate) trigger_pressed_at: Option<u64>,
    pub(crate) handler: Option<OpenChangeHandler>,
}

impl Element {
    fn new(generation: u32, options: FloatingOptions) -> Self {
        Self {
            generation,
            options,
            children: Vec::new(),
            open: false,
            opened_by: None,
            instant: None,
            presence: Presence::default(),
            placement: None,
            anchor: None,
            popup: None,
            scrolled: 0.0,
            trigger_pressed_at: None,
            handler: None,
        }
    }
}

impl core::fmt::Debug for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Element")
            .field("generation", &self.generation)
            .field("open", &self.open)
            .field("opened_by", &self.opened_by)
            .field("phase", &self.presence.phase())
            .field("children", &self.children)
            .field("has_handler", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

/// Coordinates every anchored floating element of one window.
///
/// The engine never reads a clock. Every entry point takes the host's current
/// time in milliseconds, [`advance`](Self::advance) fires due timers, and
/// [`frame`](Self::frame) steps mount transitions once per rendered frame.
pub struct Engine {
    options: EngineOptions,
    slots: Vec<Option<Element>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    groups: Vec<DelayGroup>,
    pub(crate) timers: TimerQueue,
    pub(crate) stack: DismissalStack,
    layers: LayerAllocator,
    pub(crate) hover: HoverPath,
    pub(crate) safe: Option<(FloatingId, SafeTriangle)>,
    pub(crate) last_point: Option<Point>,
    pub(crate) now: u64,
    /// Set while [`Engine::frame`] fires timers.
    framing: bool,
}

impl core::fmt::Debug for Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("Engine")
            .field("options", &self.options)
            .field("elements_total", &self.slots.len())
            .field("elements_alive", &alive)
            .field("groups", &self.groups.len())
            .field("stack", &self.stack)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Create an empty engine.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            layers: LayerAllocator::new(options.base_z_index, options.z_index_step),
            options,
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            groups: Vec::new(),
            timers: TimerQueue::default(),
            stack: DismissalStack::default(),
            hover: HoverPath::default(),
            safe: None,
            last_point: None,
            now: 0,
            framing: false,
        }
    }

    /// Engine-wide options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Create a delay group. Groups live as long as the engine.
    pub fn create_group(&mut self, options: DelayGroupOptions) -> GroupId {
        self.groups.push(DelayGroup::new(options));
        #[allow(
            clippy::cast_possible_truncation,
            reason = "GroupId uses 32-bit indices by design."
        )]
        GroupId((self.groups.len() - 1) as u32)
    }

    /// Member currently holding the group's active slot.
    pub fn group_active(&self, group: GroupId) -> Result<Option<FloatingId>> {
        self.groups
            .get(group.idx())
            .map(DelayGroup::active)
            .ok_or(FloatingError::UnknownGroup(group))
    }

    /// Register a new floating element. It starts closed and unmounted.
    pub fn insert(&mut self, options: FloatingOptions) -> Result<FloatingId> {
        if let Some(group) = options.group
            && group.idx() >= self.groups.len()
        {
            return Err(FloatingError::UnknownGroup(group));
        }
        if let Some(parent) = options.parent
            && !self.is_alive(parent)
        {
            return Err(FloatingError::UnknownParent(parent));
        }
        let parent = options.parent;
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Element::new(generation, options));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "FloatingId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Element::new(generation, options)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "FloatingId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        let id = FloatingId::new(idx, generation);
        if let Some(p) = parent
            && let Some(parent) = self.slot_mut(p)
        {
            parent.children.push(id);
        }
        tracing::trace!(?id, ?parent, "floating element inserted");
        Ok(id)
    }

    /// Dispose of an element and its nested elements.
    ///
    /// Pending timers are dropped and no change notifications fire.
    pub fn remove(&mut self, id: FloatingId) -> Result<()> {
        let el = self.element(id)?;
        let children = el.children.clone();
        let parent = el.options.parent;
        let group = el.options.group;
        for child in children {
            if self.is_alive(child) {
                self.remove(child)?;
            }
        }
        self.timers.cancel_all(id);
        self.stack.remove(id);
        self.layers.release(id);
        self.hover.forget(id);
        if self.safe.is_some_and(|(owner, _)| owner == id) {
            self.safe = None;
        }
        if let Some(group) = group.and_then(|g| self.groups.get_mut(g.idx())) {
            group.member_removed(id);
        }
        if let Some(p) = parent
            && let Some(parent) = self.slot_mut(p)
        {
            parent.children.retain(|&c| c != id);
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        tracing::trace!(?id, "floating element removed");
        Ok(())
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: FloatingId) -> bool {
        self.slot(id).is_some()
    }

    pub(crate) fn slot(&self, id: FloatingId) -> Option<&Element> {
        self.slots
            .get(id.idx())
            .and_then(Option::as_ref)
            .filter(|el| el.generation == id.1)
    }

    pub(crate) fn slot_mut(&mut self, id: FloatingId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.idx())
            .and_then(Option::as_mut)
            .filter(|el| el.generation == id.1)
    }

    pub(crate) fn element(&self, id: FloatingId) -> Result<&Element> {
        self.slot(id).ok_or(FloatingError::UnknownElement(id))
    }

    pub(crate) fn element_mut(&mut self, id: FloatingId) -> Result<&mut Element> {
        self.slot_mut(id).ok_or(FloatingError::UnknownElement(id))
    }

    /// Install the open-change handler for `id`, replacing any previous one.
    ///
    /// The handler runs before every logical open or close and may veto it
    /// with [`OpenChangeDetails::cancel`].
    pub fn set_open_change_handler(
        &mut self,
        id: FloatingId,
        handler: impl FnMut(&mut OpenChangeDetails) + 'static,
    ) -> Result<()> {
        self.element_mut(id)?.handler = Some(Box::new(handler));
        Ok(())
    }

    /// Replace the placement request used by future layouts of `id`.
    pub fn set_placement(&mut self, id: FloatingId, placement: PlacementRequest) -> Result<()> {
        self.element_mut(id)?.options.placement = placement;
        Ok(())
    }

    /// Options `id` was created with, including later placement changes.
    pub fn element_options(&self, id: FloatingId) -> Result<&FloatingOptions> {
        Ok(&self.element(id)?.options)
    }

    /// Logical open state.
    pub fn is_open(&self, id: FloatingId) -> Result<bool> {
        Ok(self.element(id)?.open)
    }

    /// Everything a renderer needs to draw `id` this frame.
    pub fn snapshot(&self, id: FloatingId) -> Result<Snapshot> {
        let el = self.element(id)?;
        let placement = el.placement;
        let arrow = placement.and_then(|p| p.arrow);
        let mounted = el.presence.is_mounted();
        Ok(Snapshot {
            open: el.open,
            mounted,
            phase: el.presence.phase(),
            opened_by: el.opened_by,
            side: placement.map_or(el.options.placement.side, |p| p.side),
            align: placement.map_or(el.options.placement.align, |p| p.align),
            x: placement.map_or(0.0, |p| p.x),
            y: placement.map_or(0.0, |p| p.y),
            arrow_x: arrow.and_then(|a| a.x),
            arrow_y: arrow.and_then(|a| a.y),
            anchor_hidden: placement.is_some_and(|p| p.anchor_hidden),
            instant: el.instant,
            layer: self.layers.get(id),
            backdrop: if mounted {
                backdrop_for(el.options.modal, el.opened_by)
            } else {
                None
            },
        })
    }

    /// Topmost element armed for dismissal.
    pub fn top(&self) -> Option<FloatingId> {
        self.stack.top()
    }

    /// Earliest pending timer deadline, for scheduling the next
    /// [`advance`](Self::advance).
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Open `id` now, canceling any pending timers.
    ///
    /// Returns whether the open state changed.
    pub fn open(&mut self, id: FloatingId, now: u64) -> Result<bool> {
        self.now = now;
        self.element(id)?;
        self.timers.cancel(id, TimerSlot::Open);
        self.timers.cancel(id, TimerSlot::Close);
        self.request_open(id, OpenedBy::Programmatic, ChangeReason::Programmatic, None)
    }

    /// Close `id` now, canceling any pending timers.
    ///
    /// Returns whether the open state changed.
    pub fn close(&mut self, id: FloatingId, now: u64) -> Result<bool> {
        self.now = now;
        self.element(id)?;
        self.timers.cancel(id, TimerSlot::Open);
        self.timers.cancel(id, TimerSlot::Close);
        self.request_close(id, ChangeReason::Programmatic)
    }

    /// Flip the logical open state of `id`.
    pub fn toggle(&mut self, id: FloatingId, now: u64) -> Result<bool> {
        if self.element(id)?.open {
            self.close(id, now)
        } else {
            self.open(id, now)
        }
    }

    /// Open `id` after `delay_ms`, replacing any pending open.
    ///
    /// A pending close is canceled. Press and focus open immediately, and a
    /// group in its instant phase skips the hover delay. A press on an element
    /// that hover or focus opened upgrades it to press-opened.
    pub fn schedule_open(
        &mut self,
        id: FloatingId,
        trigger: Trigger,
        delay_ms: u64,
        now: u64,
    ) -> Result<()> {
        self.now = now;
        let el = self.element(id)?;
        let (open, opened_by, group) = (el.open, el.opened_by, el.options.group);
        self.timers.cancel(id, TimerSlot::Close);
        let by = OpenedBy::from(trigger);
        if open {
            if trigger == Trigger::Press
                && matches!(opened_by, Some(OpenedBy::Hover | OpenedBy::Focus))
            {
                self.upgrade(id, OpenedBy::Press);
            }
            return Ok(());
        }
        let (delay, instant) = match trigger {
            Trigger::Hover => match group.and_then(|g| self.groups.get(g.idx())) {
                Some(group) if group.is_instant_phase(id, now) => (0, Some(InstantType::Delay)),
                Some(group) => (group.open_delay(delay_ms), None),
                None => (delay_ms, None),
            },
            Trigger::Press => (0, Some(InstantType::Press)),
            Trigger::Focus => (0, Some(InstantType::Focus)),
        };
        if delay == 0 {
            self.timers.cancel(id, TimerSlot::Open);
            self.request_open(id, by, reason_for(by), instant)?;
        } else {
            tracing::trace!(?id, delay, "open scheduled");
            self.timers.schedule(
                id,
                TimerAction::Open { by, instant },
                now.saturating_add(delay),
            );
        }
        Ok(())
    }

    /// Close `id` after `close_delay_ms`, replacing any pending close.
    ///
    /// A pending open is canceled, so scheduling a close before the open
    /// delay elapses means the element never opens.
    pub fn schedule_close(&mut self, id: FloatingId, close_delay_ms: u64, now: u64) -> Result<()> {
        self.schedule_close_for(id, close_delay_ms, ChangeReason::Programmatic, now)
    }

    pub(crate) fn schedule_close_for(
        &mut self,
        id: FloatingId,
        close_delay_ms: u64,
        reason: ChangeReason,
        now: u64,
    ) -> Result<()> {
        self.now = now;
        let el = self.element(id)?;
        let (open, group) = (el.open, el.options.group);
        if self.timers.cancel(id, TimerSlot::Open) {
            tracing::trace!(?id, "pending open canceled");
        }
        if !open {
            return Ok(());
        }
        let delay = match group.and_then(|g| self.groups.get(g.idx())) {
            Some(group) => group.close_delay(close_delay_ms),
            None => close_delay_ms,
        };
        if delay == 0 {
            self.timers.cancel(id, TimerSlot::Close);
            self.request_close(id, reason)?;
        } else {
            self.timers
                .schedule(id, TimerAction::Close { reason }, now.saturating_add(delay));
        }
        Ok(())
    }

    /// Fire every timer due at `now`, in deadline order.
    ///
    /// Each timer runs with its own deadline as the current time, so group
    /// close stamps reflect when the close was due rather than when the host
    /// got around to calling this.
    pub fn advance(&mut self, now: u64) {
        while let Some(timer) = self.timers.pop_due(now) {
            if !self.is_alive(timer.id) {
                tracing::trace!(id = ?timer.id, "stale timer dropped");
                continue;
            }
            self.now = timer.deadline.max(self.now);
            let result = match timer.action {
                TimerAction::Open { by, instant } => {
                    self.request_open(timer.id, by, reason_for(by), instant)
                }
                TimerAction::Close { reason } => self.request_close(timer.id, reason),
            };
            if let Err(err) = result {
                tracing::debug!(%err, "timer target vanished");
            }
        }
        self.now = now;
    }

    /// Step mount transitions by one rendered frame.
    ///
    /// Fires due timers first. An element those timers mount stays in
    /// `Initial` until the next frame. `probe` reports whether an element's
    /// popup still has running enter or exit animations.
    pub fn frame(&mut self, now: u64, probe: &impl TransitionProbe) {
        self.framing = true;
        self.advance(now);
        self.framing = false;
        let animations = self.options.animations_enabled;
        let mut unmounted = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let Some(el) = slot.as_mut() else {
                continue;
            };
            if !el.presence.needs_frame() {
                continue;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "FloatingId uses 32-bit indices by design."
            )]
            let id = FloatingId::new(idx as u32, el.generation);
            let animate = animations && el.options.animated;
            let timeout = el.options.transition_timeout_ms;
            let step = el
                .presence
                .on_frame(now, animate, timeout, || probe.is_animating(id));
            if step != PresenceStep::None {
                tracing::trace!(?id, phase = ?el.presence.phase(), "phase advanced");
            }
            if step == PresenceStep::Unmounted {
                unmounted.push(id);
            }
        }
        for id in unmounted {
            self.unmounted(id);
        }
    }

    /// The host observed the end of `id`'s enter or exit transition.
    pub fn transition_end(&mut self, id: FloatingId, now: u64) -> Result<()> {
        self.now = now;
        if self.element_mut(id)?.presence.complete(now) == PresenceStep::Unmounted {
            self.unmounted(id);
        }
        Ok(())
    }

    /// Resolve and store the placement of `id`.
    ///
    /// `boundary` overrides the configured collision boundary for this call.
    /// With neither a boundary here nor one in the element's
    /// [`PlacementRequest`], the popup is centered in an empty boundary at
    /// the origin.
    pub fn layout(
        &mut self,
        id: FloatingId,
        anchor: Rect,
        popup: Size,
        boundary: Option<Rect>,
    ) -> Result<PlacementResult> {
        let el = self.element_mut(id)?;
        let mut request = el.options.placement;
        if let Some(boundary) = boundary {
            request.collision_boundary = boundary;
        }
        let bounds = request.collision_boundary;
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            tracing::debug!(?id, ?bounds, "layout without a collision boundary");
        }
        let result = compute_placement(anchor, popup, &request);
        el.placement = Some(result);
        el.anchor = Some(anchor);
        el.popup = Some(result.rect(popup));
        Ok(result)
    }

    /// Re-layout every mounted element from host geometry.
    ///
    /// A mounted element whose anchor is gone is dismissed as detached.
    /// The boundary comes from [`Measure::boundary`] or, when that returns
    /// `None`, from the element's configured collision boundary; one of the
    /// two must be set for placement to avoid anything.
    pub fn update_layout(&mut self, measure: &impl Measure, now: u64) -> Result<()> {
        self.now = now;
        let mounted: Vec<FloatingId> = self.ids().filter(|&id| self.is_mounted(id)).collect();
        for id in mounted {
            if !self.is_alive(id) {
                continue;
            }
            match measure.anchor_rect(id) {
                Some(anchor) => {
                    let size = measure.popup_size(id).unwrap_or(Size::ZERO);
                    self.layout(id, anchor, size, measure.boundary(id))?;
                }
                None => {
                    self.anchor_detached(id, now)?;
                }
            }
        }
        Ok(())
    }

    fn ids(&self) -> impl Iterator<Item = FloatingId> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.as_ref().map(|el| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "FloatingId uses 32-bit indices by design."
                )]
                FloatingId::new(i as u32, el.generation)
            })
        })
    }

    fn is_mounted(&self, id: FloatingId) -> bool {
        self.slot(id).is_some_and(|el| el.presence.is_mounted())
    }

    fn animate(&self, el: &Element) -> bool {
        self.options.animations_enabled && el.options.animated
    }

    /// `id` followed by its ancestors, innermost first.
    pub(crate) fn ancestors(&self, id: FloatingId) -> impl Iterator<Item = FloatingId> + '_ {
        core::iter::successors(Some(id), |&cur| {
            self.slot(cur).and_then(|el| el.options.parent)
        })
    }

    /// Root→`id` chain of nested elements.
    pub(crate) fn ancestry(&self, id: FloatingId) -> Vec<FloatingId> {
        let mut chain: Vec<FloatingId> = self.ancestors(id).collect();
        chain.reverse();
        chain
    }

    /// Whether `id` is `ancestor` or nested somewhere below it.
    pub(crate) fn is_within(&self, id: FloatingId, ancestor: FloatingId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    pub(crate) fn upgrade(&mut self, id: FloatingId, by: OpenedBy) {
        if let Some(el) = self.slot_mut(id) {
            tracing::debug!(?id, from = ?el.opened_by, to = ?by, "open reason upgraded");
            el.opened_by = Some(by);
        }
    }

    /// Run the handler; returns true when it vetoed the change.
    fn notify(&mut self, id: FloatingId, open: bool, reason: ChangeReason) -> bool {
        let Some(el) = self.slot_mut(id) else {
            return false;
        };
        let Some(mut handler) = el.handler.take() else {
            return false;
        };
        let mut details = OpenChangeDetails::new(id, open, reason);
        handler(&mut details);
        if let Some(el) = self.slot_mut(id) {
            el.handler = Some(handler);
        }
        if details.is_canceled() {
            tracing::debug!(?id, open, ?reason, "open change canceled by handler");
        }
        details.is_canceled()
    }

    pub(crate) fn request_open(
        &mut self,
        id: FloatingId,
        by: OpenedBy,
        reason: ChangeReason,
        instant: Option<InstantType>,
    ) -> Result<bool> {
        if self.element(id)?.open {
            return Ok(false);
        }
        if self.notify(id, true, reason) {
            return Ok(false);
        }
        self.apply_open(id, by, instant);
        Ok(true)
    }

    pub(crate) fn request_close(&mut self, id: FloatingId, reason: ChangeReason) -> Result<bool> {
        if !self.element(id)?.open {
            return Ok(false);
        }
        if self.notify(id, false, reason) {
            return Ok(false);
        }
        self.apply_close(id, reason);
        Ok(true)
    }

    fn apply_open(&mut self, id: FloatingId, by: OpenedBy, instant: Option<InstantType>) {
        let Some(el) = self.slot(id) else {
            return;
        };
        let (group, parent, animate) = (el.options.group, el.options.parent, self.animate(el));
        self.timers.cancel(id, TimerSlot::Open);
        self.timers.cancel(id, TimerSlot::Close);

        if let Some(group) = group {
            // The previous member closes first so its close stamp is in place.
            let previous = self.groups.get(group.idx()).and_then(DelayGroup::active);
            let open_sibling = previous
                .filter(|&p| p != id && self.slot(p).is_some_and(|sibling| sibling.open));
            if let Some(previous) = open_sibling {
                self.notify(previous, false, ChangeReason::GroupSwitch);
                self.apply_close(previous, ChangeReason::GroupSwitch);
                if let Some(sibling) = self.slot_mut(previous) {
                    sibling.instant = Some(InstantType::Delay);
                }
            }
            if let Some(group) = self.groups.get_mut(group.idx()) {
                group.member_opened(id);
            }
        }

        let (now, framing) = (self.now, self.framing);
        let Some(el) = self.slot_mut(id) else {
            return;
        };
        el.open = true;
        el.opened_by = Some(by);
        el.instant = instant;
        el.scrolled = 0.0;
        let step = el.presence.request_open(now, animate);
        if framing {
            el.presence.hold_initial();
        }
        let phase = el.presence.phase();
        if step == PresenceStep::Mounted {
            self.layers.assign(id, parent);
        }
        self.stack.push(id);
        tracing::debug!(?id, ?by, ?phase, "floating element opened");
    }

    /// Close `id` after closing its open descendants, innermost first.
    pub(crate) fn apply_close(&mut self, id: FloatingId, reason: ChangeReason) {
        let Some(el) = self.slot(id) else {
            return;
        };
        let children = el.children.clone();
        let animate = self.animate(el);
        for child in children {
            if self.slot(child).is_some_and(|c| c.open) {
                self.notify(child, false, ChangeReason::ParentClosed);
                self.apply_close(child, ChangeReason::ParentClosed);
            }
        }

        self.timers.cancel(id, TimerSlot::Open);
        self.timers.cancel(id, TimerSlot::Close);
        self.stack.remove(id);
        if self.safe.is_some_and(|(owner, _)| owner == id) {
            self.safe = None;
        }

        let now = self.now;
        let Some(el) = self.slot_mut(id) else {
            return;
        };
        el.open = false;
        if reason.is_dismissal() {
            el.instant = Some(InstantType::Dismiss);
        }
        let group = el.options.group;
        let step = el.presence.request_close(now, animate);
        if let Some(group) = group.and_then(|g| self.groups.get_mut(g.idx())) {
            group.member_closed(id, now);
        }
        tracing::debug!(?id, ?reason, "floating element closed");
        if step == PresenceStep::Unmounted {
            self.unmounted(id);
        }
    }

    /// Per-open state is discarded once the element leaves the tree.
    fn unmounted(&mut self, id: FloatingId) {
        self.layers.release(id);
        if let Some(el) = self.slot_mut(id) {
            el.opened_by = None;
            el.trigger_pressed_at = None;
            el.scrolled = 0.0;
        }
        tracing::trace!(?id, "floating element unmounted");
    }
}

fn reason_for(by: OpenedBy) -> ChangeReason {
    match by {
        OpenedBy::Hover => ChangeReason::Hover,
        OpenedBy::Press => ChangeReason::Press,
        OpenedBy::Focus => ChangeReason::Focus,
        OpenedBy::Programmatic => ChangeReason::Programmatic,
    }
}
