#![forbid(unsafe_code)]

//! Test doubles for driving a tour without a real UI.
//!
//! - [`FakeDocument`] implements [`tourkit_core::Document`] over an
//!   in-memory element table and records every scroll and keyboard-scope
//!   change.
//! - [`EventLog`] collects the events a controller emits and can dump them
//!   as JSONL for golden comparisons.

pub mod document;
pub mod events;

pub use document::{FakeDocument, FakeElement, ScrollCall, ScrollTarget};
pub use events::EventLog;
