// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the engine: handles, phases, options, and snapshots.

use alloc::boxed::Box;
use understory_placement::{Align, PlacementRequest, Side};

/// Identifier for a floating element registered with an [`Engine`](crate::Engine).
///
/// A small, copyable handle made of a slot index and a generation counter.
/// Removing an element frees its slot; a later element reusing the slot gets a
/// higher generation, so a stale `FloatingId` never aliases a live element.
/// Operations on a stale handle return
/// [`FloatingError::UnknownElement`](crate::FloatingError::UnknownElement).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FloatingId(pub(crate) u32, pub(crate) u32);

impl FloatingId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a delay group.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GroupId(pub(crate) u32);

impl GroupId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Interaction that asked an element to open.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Trigger {
    /// Pointer rested on the trigger.
    Hover,
    /// Trigger was pressed (click or tap).
    Press,
    /// Trigger received keyboard focus.
    Focus,
}

/// How an open element was opened.
///
/// Drives hover-leave handling and the backdrop pointer policy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OpenedBy {
    /// Opened by hovering the trigger; closes when the pointer leaves.
    Hover,
    /// Opened by pressing the trigger; ignores hover-leave.
    Press,
    /// Opened by focusing the trigger; closes on blur.
    Focus,
    /// Opened through [`Engine::open`](crate::Engine::open).
    Programmatic,
}

impl From<Trigger> for OpenedBy {
    fn from(trigger: Trigger) -> Self {
        match trigger {
            Trigger::Hover => Self::Hover,
            Trigger::Press => Self::Press,
            Trigger::Focus => Self::Focus,
        }
    }
}

/// Mount/transition phase of a floating element.
///
/// `Unmounted → Initial → Opening → Open`, then `Open → Closing → Unmounted`.
/// `Initial` lasts exactly one frame so the starting style is committed before
/// the enter transition runs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TransitionPhase {
    /// Not in the tree.
    #[default]
    Unmounted,
    /// Mounted this frame; starting style not yet committed.
    Initial,
    /// Enter transition running.
    Opening,
    /// Fully open.
    Open,
    /// Exit transition running; unmounts when it completes.
    Closing,
}

/// Why the last transition should be skipped or shortened by the view layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InstantType {
    /// Opened without delay because a delay-group sibling was recently open.
    Delay,
    /// Opened by keyboard focus.
    Focus,
    /// Opened by a press.
    Press,
    /// Closed by a dismissal gesture.
    Dismiss,
}

/// What caused an open-state change.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChangeReason {
    /// Pointer entered or left the trigger/popup.
    Hover,
    /// Trigger press.
    Press,
    /// Trigger focus.
    Focus,
    /// Focus left the trigger and popup.
    Blur,
    /// Pointer-down outside the element.
    OutsidePress,
    /// Escape key.
    EscapeKey,
    /// Ancestor scrolled beyond the element's tolerance.
    Scroll,
    /// The anchor is gone from the tree.
    AnchorDetached,
    /// The parent element closed.
    ParentClosed,
    /// Another member of the same delay group opened.
    GroupSwitch,
    /// `open`/`close`/`toggle` or an explicitly scheduled change.
    Programmatic,
}

impl ChangeReason {
    /// Whether the change comes from a dismissal gesture.
    pub const fn is_dismissal(self) -> bool {
        matches!(
            self,
            Self::OutsidePress | Self::EscapeKey | Self::Scroll | Self::AnchorDetached
        )
    }
}

bitflags::bitflags! {
    /// Dismissal sources an element listens to while open.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DismissFlags: u8 {
        /// Pointer-down outside the anchor, popup, and open descendants.
        const OUTSIDE_PRESS   = 0b0000_0001;
        /// Escape key while the element is topmost.
        const ESCAPE_KEY      = 0b0000_0010;
        /// Ancestor scroll beyond [`FloatingOptions::scroll_tolerance`].
        const SCROLL          = 0b0000_0100;
        /// The anchor disappeared.
        const ANCHOR_DETACHED = 0b0000_1000;
    }
}

impl Default for DismissFlags {
    fn default() -> Self {
        Self::OUTSIDE_PRESS | Self::ESCAPE_KEY | Self::ANCHOR_DETACHED
    }
}

/// Part of a floating element the pointer is over.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Part {
    /// The trigger (anchor).
    Trigger,
    /// The popup itself.
    Popup,
}

/// Innermost floating element part under the pointer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HoverTarget {
    /// Element owning the part.
    pub id: FloatingId,
    /// Trigger or popup.
    pub part: Part,
}

impl HoverTarget {
    /// Pointer over `id`'s trigger.
    pub const fn trigger(id: FloatingId) -> Self {
        Self {
            id,
            part: Part::Trigger,
        }
    }

    /// Pointer over `id`'s popup.
    pub const fn popup(id: FloatingId) -> Self {
        Self {
            id,
            part: Part::Popup,
        }
    }
}

/// Per-element configuration.
#[derive(Clone, Debug)]
pub struct FloatingOptions {
    /// Enclosing floating element, for nested menus and popovers.
    pub parent: Option<FloatingId>,
    /// Delay group membership.
    pub group: Option<GroupId>,
    /// Renders a backdrop; press-opened modal elements block pointer events below.
    pub modal: bool,
    /// Open when the trigger is hovered.
    pub open_on_hover: bool,
    /// Open when the trigger is focused.
    pub open_on_focus: bool,
    /// Hover open delay in milliseconds.
    pub delay_ms: u64,
    /// Hover close delay in milliseconds.
    pub close_delay_ms: u64,
    /// Keep a hover-opened element open while the pointer travels toward its popup.
    pub safe_triangle: bool,
    /// How long the pointer may rest inside the safe triangle before the
    /// element closes anyway.
    pub safe_triangle_timeout_ms: u64,
    /// Armed dismissal sources.
    pub dismiss: DismissFlags,
    /// Accumulated ancestor scroll, in pixels, tolerated before dismissing.
    pub scroll_tolerance: f64,
    /// Whether the element declares enter/exit transitions worth waiting for.
    pub animated: bool,
    /// Upper bound on transition detection before forcing completion.
    pub transition_timeout_ms: u64,
    /// Placement request used by [`Engine::layout`](crate::Engine::layout).
    pub placement: PlacementRequest,
}

impl Default for FloatingOptions {
    fn default() -> Self {
        Self {
            parent: None,
            group: None,
            modal: false,
            open_on_hover: true,
            open_on_focus: true,
            delay_ms: 600,
            close_delay_ms: 0,
            safe_triangle: true,
            safe_triangle_timeout_ms: 300,
            dismiss: DismissFlags::default(),
            scroll_tolerance: 0.0,
            animated: true,
            transition_timeout_ms: 1000,
            placement: PlacementRequest::default(),
        }
    }
}

/// Delay group configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DelayGroupOptions {
    /// Open delay for every member, overriding [`FloatingOptions::delay_ms`].
    pub delay_ms: Option<u64>,
    /// Close delay for every member, overriding [`FloatingOptions::close_delay_ms`].
    pub close_delay_ms: Option<u64>,
    /// Window after the last member closed during which members open instantly.
    pub timeout_ms: u64,
}

impl Default for DelayGroupOptions {
    fn default() -> Self {
        Self {
            delay_ms: None,
            close_delay_ms: None,
            timeout_ms: 400,
        }
    }
}

/// Engine-wide configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// When false, every transition completes synchronously.
    pub animations_enabled: bool,
    /// z-index of band zero.
    pub base_z_index: i32,
    /// z-index distance between consecutive bands.
    pub z_index_step: i32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            base_z_index: 1000,
            z_index_step: 10,
        }
    }
}

/// Stacking layer held by a mounted element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Layer {
    /// Stacking band; higher is nearer to the user.
    pub band: u32,
    /// z-index derived from the band.
    pub z_index: i32,
}

/// Backdrop state of a modal element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Backdrop {
    /// False for hover-opened elements so the pointer passes through to content below.
    pub blocks_pointer: bool,
}

/// Read-only view of a floating element, projected by the view layer onto attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Logical open state.
    pub open: bool,
    /// Whether the popup is in the tree.
    pub mounted: bool,
    /// Mount/transition phase.
    pub phase: TransitionPhase,
    /// How the element was opened, while mounted.
    pub opened_by: Option<OpenedBy>,
    /// Chosen side (preferred side before the first layout).
    pub side: Side,
    /// Chosen alignment (preferred alignment before the first layout).
    pub align: Align,
    /// Popup left edge.
    pub x: f64,
    /// Popup top edge.
    pub y: f64,
    /// Arrow offset from the popup's left edge.
    pub arrow_x: Option<f64>,
    /// Arrow offset from the popup's top edge.
    pub arrow_y: Option<f64>,
    /// The anchor lies outside the collision boundary.
    pub anchor_hidden: bool,
    /// Reason to skip the transition, if any.
    pub instant: Option<InstantType>,
    /// Stacking layer while mounted.
    pub layer: Option<Layer>,
    /// Backdrop, for modal elements while mounted.
    pub backdrop: Option<Backdrop>,
}

/// Details passed to an open-change handler.
///
/// Call [`cancel`](Self::cancel) to veto the change; the element then keeps
/// its current state. Cascading closes (parent closed, group switch) are not
/// cancelable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenChangeDetails {
    id: FloatingId,
    open: bool,
    reason: ChangeReason,
    cancelable: bool,
    canceled: bool,
}

impl OpenChangeDetails {
    pub(crate) fn new(id: FloatingId, open: bool, reason: ChangeReason) -> Self {
        let cancelable = !matches!(reason, ChangeReason::ParentClosed | ChangeReason::GroupSwitch);
        Self {
            id,
            open,
            reason,
            cancelable,
            canceled: false,
        }
    }

    /// Element changing state.
    pub fn id(&self) -> FloatingId {
        self.id
    }

    /// Requested open state.
    pub fn open(&self) -> bool {
        self.open
    }

    /// Interaction that caused the change.
    pub fn reason(&self) -> ChangeReason {
        self.reason
    }

    /// Whether [`cancel`](Self::cancel) has any effect.
    pub fn is_cancelable(&self) -> bool {
        self.cancelable
    }

    /// Veto the change.
    pub fn cancel(&mut self) {
        if self.cancelable {
            self.canceled = true;
        }
    }

    /// Whether the change was vetoed.
    pub fn is_canceled(&self) -> bool {
        self.canceled
    }
}

/// Callback invoked on every open-state change of an element.
pub type OpenChangeHandler = Box<dyn FnMut(&mut OpenChangeDetails)>;
