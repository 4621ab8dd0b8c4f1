#![forbid(unsafe_code)]

//! Core: tour vocabulary, step model, resolution, and host interfaces.
//!
//! # Role in tourkit
//! `tourkit-core` is the pure layer. It owns the enums that describe tour
//! progress, the raw and resolved step records, the typed tour
//! configuration, and the traits through which the engine talks to the
//! host document. Nothing in here mutates tour state.
//!
//! # Primary responsibilities
//! - **Constants**: [`Action`], [`Lifecycle`], [`Status`], [`EventType`].
//! - **Step Resolver**: [`resolve_step`] and [`validate_steps`].
//! - **Configuration**: [`TourConfig`] with explicit defaults.
//! - **Host interfaces**: [`Document`] for element lookup, geometry,
//!   scrolling, and keyboard binding.
//!
//! # How it fits in the system
//! The runtime (`tourkit-runtime`) owns the state machine and consumes these
//! types. Test doubles in `tourkit-harness` implement [`Document`].

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod state;
pub mod step;

pub use config::{Locale, LocaleOverrides, StyleOverrides, Styles, TourConfig};
pub use constants::{Action, EventType, Lifecycle, Status};
pub use error::{ConfigError, Recovery, TourError};
pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use geometry::{ParsePlacementError, Placement, PlacementResult, WidgetKind};
pub use host::Document;
pub use state::{StatePatch, TourEvent, TourState};
pub use step::{ResolvedStep, Step, Target, TriggerEvent, resolve_step, validate_steps};
