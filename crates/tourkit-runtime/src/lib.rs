#![forbid(unsafe_code)]

//! tourkit runtime
//!
//! The moving parts of a guided tour, built on the vocabulary in
//! `tourkit-core`.
//!
//! # Key Components
//!
//! - [`Store`] - Tour state machine owning the canonical [`TourState`]
//! - [`TourCommand`] - Store commands as data
//! - [`plan_scroll`] - Decides whether and where to scroll for a step
//! - [`TourController`] - Wires host input to the store and store changes
//!   to tour events, scrolling, and the keyboard scope
//! - [`Helpers`] - Host control handle (`next`, `prev`, `go`, ...)
//!
//! # How it fits in the system
//! The host owns a [`Document`](tourkit_core::Document) implementation and
//! feeds configuration, key presses, and widget reports into a
//! [`TourController`]. Rendering stays with the host: the controller only
//! emits [`TourEvent`]s and scroll requests.
//!
//! [`TourState`]: tourkit_core::TourState
//! [`TourEvent`]: tourkit_core::TourEvent

pub mod controller;
pub mod scroll;
pub mod store;

pub use controller::{ConfigChange, Helpers, TourController};
pub use scroll::{ScrollConfig, ScrollPlan, SkipReason, StepPosition, TargetGeometry, plan_scroll};
pub use store::{Store, Subscription, TourCommand};
