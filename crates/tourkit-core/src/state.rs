#![forbid(unsafe_code)]

//! Tour state snapshots and the events derived from them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{Action, EventType, Lifecycle, Status};
use crate::error::TourError;
use crate::step::ResolvedStep;

/// Canonical tour state.
///
/// # Invariants
///
/// 1. `index < size` whenever `status == Running`.
/// 2. `lifecycle` is `Beacon` or `Tooltip` only while `status == Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourState {
    pub action: Action,
    /// The host drives `index` through its own configuration.
    pub controlled: bool,
    pub index: usize,
    pub lifecycle: Lifecycle,
    /// Number of steps in the current list.
    pub size: usize,
    pub status: Status,
}

impl TourState {
    /// State of a tour that has not started yet.
    #[must_use]
    pub const fn initial(size: usize, controlled: bool, index: usize) -> Self {
        Self {
            action: Action::Init,
            controlled,
            index,
            lifecycle: Lifecycle::Init,
            size,
            status: if size > 0 { Status::Ready } else { Status::Idle },
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.status, Status::Running)
    }

    /// Whether the current index is the last step.
    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        self.index + 1 >= self.size
    }

    /// Check the snapshot invariants.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        let index_ok = !self.is_running() || self.index < self.size;
        let lifecycle_ok = self.is_running() || !self.lifecycle.is_presenting();
        index_ok && lifecycle_ok
    }
}

/// Partial state applied through `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatePatch {
    pub action: Option<Action>,
    pub index: Option<usize>,
    pub lifecycle: Option<Lifecycle>,
    pub status: Option<Status>,
}

impl StatePatch {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            action: None,
            index: None,
            lifecycle: None,
            status: None,
        }
    }

    #[must_use]
    pub const fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub const fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    #[must_use]
    pub const fn lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.action.is_none()
            && self.index.is_none()
            && self.lifecycle.is_none()
            && self.status.is_none()
    }
}

/// Event delivered to the host callback.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TourEvent {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: EventType,
    pub action: Action,
    pub controlled: bool,
    pub index: usize,
    pub lifecycle: Lifecycle,
    pub size: usize,
    pub status: Status,
    pub step: Option<ResolvedStep>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub error: Option<TourError>,
}

impl TourEvent {
    /// Build an event mirroring `state`.
    #[must_use]
    pub fn new(kind: EventType, state: &TourState, step: Option<ResolvedStep>) -> Self {
        Self {
            kind,
            action: state.action,
            controlled: state.controlled,
            index: state.index,
            lifecycle: state.lifecycle,
            size: state.size,
            status: state.status,
            step,
            error: None,
        }
    }

    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: TourError) -> Self {
        self.error = Some(error);
        self
    }
}
