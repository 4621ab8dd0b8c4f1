#![forbid(unsafe_code)]

//! Step model and the Step Resolver.
//!
//! A raw [`Step`] is host-owned and sparse: every presentation flag is
//! optional. [`resolve_step`] folds it over the tour-wide [`TourConfig`] and
//! the built-in defaults into a fully specified [`ResolvedStep`].
//!
//! # Precedence
//!
//! Highest first: step field, tour config field, built-in default.
//!
//! # Invariants
//!
//! 1. Resolution is pure: identical inputs give identical output.
//! 2. A resolved step always has a concrete placement (`Bottom` when unset).
//! 3. `Center` steps never need a target.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{Locale, LocaleOverrides, StyleOverrides, Styles, TourConfig};
use crate::error::TourError;
use crate::geometry::Placement;

/// Built-in distance between a floating widget and its target.
pub const DEFAULT_STEP_OFFSET: f64 = 10.0;

/// Reference to the element a step is anchored to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Target {
    /// A selector resolved by the host document.
    Selector(String),
    /// An opaque node handle issued by the host.
    Node(u64),
}

impl Target {
    /// True for a blank selector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Selector(selector) => selector.trim().is_empty(),
            Self::Node(_) => false,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::Selector(String::new())
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => f.write_str(selector),
            Self::Node(id) => write!(f, "node#{id}"),
        }
    }
}

/// Interaction that opens a beacon into its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TriggerEvent {
    #[default]
    Click,
    Hover,
}

/// A step as supplied by the host.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Step {
    pub target: Target,
    pub title: Option<String>,
    pub content: Option<String>,
    pub placement: Option<Placement>,
    /// Beacon placement; falls back to `placement`.
    pub placement_beacon: Option<Placement>,
    pub event: Option<TriggerEvent>,
    /// Open the tooltip directly, without a beacon.
    pub disable_beacon: Option<bool>,
    pub disable_close_on_esc: Option<bool>,
    pub disable_overlay: Option<bool>,
    pub disable_overlay_close: Option<bool>,
    pub disable_scrolling: Option<bool>,
    pub hide_back_button: Option<bool>,
    /// The target lives in a fixed-position container.
    pub is_fixed: Option<bool>,
    pub offset: Option<f64>,
    pub scroll_offset: Option<f64>,
    pub show_progress: Option<bool>,
    pub show_skip_button: Option<bool>,
    pub spotlight_clicks: Option<bool>,
    pub spotlight_padding: Option<f64>,
    pub locale: LocaleOverrides,
    pub styles: StyleOverrides,
    /// Free-form presentation data passed through to the renderer.
    pub data: BTreeMap<String, String>,
}

impl Step {
    /// Create a step anchored to `target`.
    #[must_use]
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Create an unanchored step shown in the middle of the viewport.
    #[must_use]
    pub fn centered() -> Self {
        Self {
            placement: Some(Placement::Center),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    #[must_use]
    pub fn placement_beacon(mut self, placement: Placement) -> Self {
        self.placement_beacon = Some(placement);
        self
    }

    #[must_use]
    pub fn disable_beacon(mut self, disable: bool) -> Self {
        self.disable_beacon = Some(disable);
        self
    }

    #[must_use]
    pub fn disable_close_on_esc(mut self, disable: bool) -> Self {
        self.disable_close_on_esc = Some(disable);
        self
    }

    #[must_use]
    pub fn disable_scrolling(mut self, disable: bool) -> Self {
        self.disable_scrolling = Some(disable);
        self
    }

    #[must_use]
    pub fn is_fixed(mut self, fixed: bool) -> Self {
        self.is_fixed = Some(fixed);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn scroll_offset(mut self, offset: f64) -> Self {
        self.scroll_offset = Some(offset);
        self
    }

    #[must_use]
    pub fn spotlight_padding(mut self, padding: f64) -> Self {
        self.spotlight_padding = Some(padding);
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: LocaleOverrides) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Whether this step needs an anchor element.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        !matches!(self.placement, Some(Placement::Center))
    }
}

/// A step with every field decided.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedStep {
    pub target: Target,
    pub title: Option<String>,
    pub content: Option<String>,
    pub placement: Placement,
    pub placement_beacon: Placement,
    pub event: TriggerEvent,
    pub disable_beacon: bool,
    pub disable_close_on_esc: bool,
    pub disable_overlay: bool,
    pub disable_overlay_close: bool,
    pub disable_scrolling: bool,
    pub hide_back_button: bool,
    pub is_fixed: bool,
    pub offset: f64,
    /// Offset handed to the positioning widget: `offset` plus the spotlight
    /// padding unless scrolling is disabled.
    pub floater_offset: f64,
    pub scroll_offset: f64,
    pub show_progress: bool,
    pub show_skip_button: bool,
    pub spotlight_clicks: bool,
    pub spotlight_padding: f64,
    pub locale: Locale,
    pub styles: Styles,
    pub data: BTreeMap<String, String>,
}

impl ResolvedStep {
    #[must_use]
    pub fn is_center(&self) -> bool {
        self.placement.is_center()
    }
}

/// Merge a raw step with the tour configuration and built-in defaults.
#[must_use]
pub fn resolve_step(step: &Step, config: &TourConfig) -> ResolvedStep {
    let placement = step.placement.unwrap_or_default();
    let disable_scrolling = step.disable_scrolling.unwrap_or(config.disable_scrolling);
    let spotlight_padding = step.spotlight_padding.unwrap_or(config.spotlight_padding);
    let offset = step.offset.unwrap_or(DEFAULT_STEP_OFFSET);
    let floater_offset = if disable_scrolling {
        offset
    } else {
        offset + spotlight_padding
    };

    ResolvedStep {
        target: step.target.clone(),
        title: step.title.clone(),
        content: step.content.clone(),
        placement,
        placement_beacon: step.placement_beacon.unwrap_or(placement),
        event: step.event.unwrap_or_default(),
        disable_beacon: step.disable_beacon.unwrap_or(false),
        disable_close_on_esc: step
            .disable_close_on_esc
            .unwrap_or(config.disable_close_on_esc),
        disable_overlay: step.disable_overlay.unwrap_or(config.disable_overlay),
        disable_overlay_close: step
            .disable_overlay_close
            .unwrap_or(config.disable_overlay_close),
        disable_scrolling,
        hide_back_button: step.hide_back_button.unwrap_or(config.hide_back_button),
        is_fixed: step.is_fixed.unwrap_or(false),
        offset,
        floater_offset,
        scroll_offset: step.scroll_offset.unwrap_or(config.scroll_offset),
        show_progress: step.show_progress.unwrap_or(config.show_progress),
        show_skip_button: step.show_skip_button.unwrap_or(config.show_skip_button),
        spotlight_clicks: step.spotlight_clicks.unwrap_or(config.spotlight_clicks),
        spotlight_padding,
        locale: Locale::default()
            .merged(&config.locale)
            .merged(&step.locale),
        styles: Styles::default()
            .merged(&config.styles)
            .merged(&step.styles),
        data: step.data.clone(),
    }
}

/// Resolve the step at `index`, if any.
#[must_use]
pub fn resolve_index(steps: &[Step], index: usize, config: &TourConfig) -> Option<ResolvedStep> {
    steps.get(index).map(|step| resolve_step(step, config))
}

/// Check a step list before it is handed to the state machine.
///
/// The list is rejected as a whole: it must be non-empty and every anchored
/// step needs a non-blank target.
pub fn validate_steps(steps: &[Step]) -> Result<(), TourError> {
    if steps.is_empty() {
        return Err(TourError::invalid_steps("step list is empty"));
    }
    for (index, step) in steps.iter().enumerate() {
        if step.is_anchored() && step.target.is_empty() {
            return Err(TourError::invalid_steps(format!(
                "step {index} is missing a target"
            )));
        }
        if let Some(padding) = step.spotlight_padding
            && !(padding.is_finite() && padding >= 0.0)
        {
            return Err(TourError::invalid_steps(format!(
                "step {index} has an invalid spotlight padding ({padding})"
            )));
        }
    }
    Ok(())
}
