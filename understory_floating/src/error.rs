// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration errors.
//!
//! These signal a structural mistake in how the engine is driven (a handle
//! that outlived its element, a group that was never created). Runtime
//! conditions such as stale timers or degenerate geometry never surface here.

use thiserror::Error;

use crate::types::{FloatingId, GroupId};

/// Errors returned by [`Engine`](crate::Engine) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingError {
    /// The handle refers to an element that was removed, or never existed.
    #[error("unknown floating element {0:?}")]
    UnknownElement(FloatingId),
    /// The element was registered in a delay group this engine does not own.
    #[error("unknown delay group {0:?}")]
    UnknownGroup(GroupId),
    /// The element was nested under a parent that is no longer alive.
    #[error("unknown parent element {0:?}")]
    UnknownParent(FloatingId),
}

/// Result type for engine operations.
pub type Result<T> = core::result::Result<T, FloatingError>;
