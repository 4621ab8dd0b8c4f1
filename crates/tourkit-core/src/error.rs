#![forbid(unsafe_code)]

//! Tour error model and local recovery.
//!
//! Every error in this crate is recoverable: the engine downgrades to a
//! safe state and reports through the event channel. [`TourError::recovery`]
//! names the downgrade for each variant.

use thiserror::Error;

/// Errors produced by tour commands and target lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The step list is empty or a step is malformed. The tour does not
    /// start and an existing run keeps its previous steps.
    #[error("invalid steps: {reason}")]
    InvalidSteps { reason: String },

    /// The active step's element could not be located or is not visible.
    #[error("target not found for step {index}: {target}")]
    TargetNotFound { index: usize, target: String },

    /// A `go` or controlled index outside `[0, size)`.
    #[error("step index {index} out of range for {size} steps")]
    InvalidIndex { index: usize, size: usize },

    /// `start` was requested without a usable step list.
    #[error("cannot start tour: {reason}")]
    CannotStart { reason: String },
}

/// What the engine does after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Reject the command; state is unchanged.
    Ignore,
    /// Move past the current step in the direction of travel.
    SkipStep,
    /// Leave the tour stopped.
    Halt,
}

impl TourError {
    #[must_use]
    pub fn invalid_steps(reason: impl Into<String>) -> Self {
        Self::InvalidSteps {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn cannot_start(reason: impl Into<String>) -> Self {
        Self::CannotStart {
            reason: reason.into(),
        }
    }

    /// Recovery applied by the controller.
    #[must_use]
    pub const fn recovery(&self) -> Recovery {
        match self {
            Self::InvalidSteps { .. } | Self::InvalidIndex { .. } => Recovery::Ignore,
            Self::TargetNotFound { .. } => Recovery::SkipStep,
            Self::CannotStart { .. } => Recovery::Halt,
        }
    }

    /// Error type label for logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidSteps { .. } => "invalid_steps",
            Self::TargetNotFound { .. } => "target_not_found",
            Self::InvalidIndex { .. } => "invalid_index",
            Self::CannotStart { .. } => "cannot_start",
        }
    }
}

/// Errors loading or validating a [`TourConfig`](crate::TourConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}
