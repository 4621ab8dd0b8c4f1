#![forbid(unsafe_code)]

//! tourkit public facade crate.
//!
//! Re-exports the stable surface of `tourkit-core` and `tourkit-runtime`
//! and offers a small prelude for hosts embedding a guided tour.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tourkit_core::{
    Action, Document, EventType, KeyCode, KeyEvent, KeyEventKind, Lifecycle, Locale,
    LocaleOverrides, Modifiers, Placement, PlacementResult, Recovery, ResolvedStep, StatePatch,
    Status, Step, StyleOverrides, Styles, Target, TourConfig, TourEvent, TourState, TriggerEvent,
    WidgetKind, resolve_step, validate_steps,
};
pub use tourkit_core::{ConfigError, TourError};

#[cfg(feature = "tracing-json")]
pub use tourkit_core::logging::init_logging;

// --- Runtime re-exports ----------------------------------------------------

pub use tourkit_runtime::{
    ConfigChange, Helpers, ScrollConfig, ScrollPlan, SkipReason, StepPosition, Store,
    Subscription, TargetGeometry, TourCommand, TourController, plan_scroll,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tourkit hosts.
#[derive(Debug)]
pub enum Error {
    /// A tour command was rejected.
    Tour(TourError),
    /// Configuration could not be loaded or failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tour(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tour(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<TourError> for Error {
    fn from(err: TourError) -> Self {
        Self::Tour(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for tourkit APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load a tour configuration from a `.json` or `.toml` file and validate it.
///
/// The format is chosen by extension; anything other than `.json` is read
/// as TOML.
#[cfg(feature = "serde")]
pub fn load_config(path: impl AsRef<std::path::Path>) -> Result<TourConfig> {
    let path = path.as_ref();
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => TourConfig::from_json_file(path)?,
        _ => TourConfig::from_toml_file(path)?,
    };
    Ok(config.validated()?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Action, Document, Error, EventType, KeyCode, KeyEvent, Lifecycle, Placement,
        PlacementResult, Result, Status, Step, Target, TourConfig, TourController, TourEvent,
        TourState, WidgetKind,
    };

    pub use crate::{core, runtime};
}

pub use tourkit_core as core;
pub use tourkit_runtime as runtime;
