#![forbid(unsafe_code)]

//! Enumerations describing tour progress.
//!
//! Three independent dimensions make up the tour state:
//!
//! - [`Action`]: the operation that produced the current state.
//! - [`Lifecycle`]: the phase of the current step.
//! - [`Status`]: the overall tour phase.
//!
//! [`EventType`] labels the events emitted to the host callback.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operation that most recently produced the tour state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    #[default]
    Init,
    Start,
    Stop,
    Prev,
    Next,
    Go,
    Close,
    Skip,
    Reset,
    Update,
    Resize,
}

impl Action {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Go => "go",
            Self::Close => "close",
            Self::Skip => "skip",
            Self::Reset => "reset",
            Self::Update => "update",
            Self::Resize => "resize",
        }
    }

    /// Actions that move the tour away from the current step.
    #[must_use]
    pub const fn leaves_step(self) -> bool {
        matches!(self, Self::Next | Self::Prev | Self::Skip | Self::Close)
    }
}

/// Phase within the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Lifecycle {
    #[default]
    Init,
    Ready,
    Beacon,
    Tooltip,
    Complete,
}

impl Lifecycle {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Ready => "ready",
            Self::Beacon => "beacon",
            Self::Tooltip => "tooltip",
            Self::Complete => "complete",
        }
    }

    /// Whether a beacon or tooltip is on screen in this phase.
    #[must_use]
    pub const fn is_presenting(self) -> bool {
        matches!(self, Self::Beacon | Self::Tooltip)
    }
}

/// Overall tour phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    #[default]
    Idle,
    Ready,
    Running,
    Paused,
    Skipped,
    Finished,
    Error,
}

impl Status {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Skipped => "skipped",
            Self::Finished => "finished",
            Self::Error => "error",
        }
    }

    /// `Finished` and `Skipped` can only be left through `start` or `reset`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Skipped)
    }
}

/// Kind of event delivered to the host callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventType {
    #[cfg_attr(feature = "serde", serde(rename = "tour:start"))]
    TourStart,
    #[cfg_attr(feature = "serde", serde(rename = "step:before"))]
    StepBefore,
    #[cfg_attr(feature = "serde", serde(rename = "beacon"))]
    Beacon,
    #[cfg_attr(feature = "serde", serde(rename = "tooltip"))]
    Tooltip,
    #[cfg_attr(feature = "serde", serde(rename = "step:after"))]
    StepAfter,
    #[cfg_attr(feature = "serde", serde(rename = "tour:end"))]
    TourEnd,
    #[cfg_attr(feature = "serde", serde(rename = "tour:status"))]
    TourStatus,
    #[cfg_attr(feature = "serde", serde(rename = "error"))]
    Error,
    #[cfg_attr(feature = "serde", serde(rename = "error:target_not_found"))]
    TargetNotFound,
}

impl EventType {
    /// Wire label used by hosts that dispatch on strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TourStart => "tour:start",
            Self::StepBefore => "step:before",
            Self::Beacon => "beacon",
            Self::Tooltip => "tooltip",
            Self::StepAfter => "step:after",
            Self::TourEnd => "tour:end",
            Self::TourStatus => "tour:status",
            Self::Error => "error",
            Self::TargetNotFound => "error:target_not_found",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
