#![forbid(unsafe_code)]

//! Typed tour configuration.
//!
//! [`TourConfig`] enumerates every option the host can set. Each field has an
//! explicit default, so `TourConfig::default()` describes a tour that runs
//! on mount, scrolls 20px above its targets, and pads the spotlight by 10px.
//!
//! # Loading
//!
//! With the `serde` feature the configuration can be read from TOML or JSON:
//!
//! ```toml
//! continuous = true
//! scroll_offset = 64.0
//!
//! [[steps]]
//! target = "#search"
//! content = "Find anything from here."
//!
//! [[steps]]
//! placement = "center"
//! content = "That's it!"
//! ```
//!
//! ```rust,ignore
//! let config = TourConfig::from_toml_file("tour.toml")?.validated()?;
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::step::{Step, validate_steps};

/// Built-in distance kept between the viewport top and a scrolled-to target.
pub const DEFAULT_SCROLL_OFFSET: f64 = 20.0;

/// Built-in spotlight padding around a target.
pub const DEFAULT_SPOTLIGHT_PADDING: f64 = 10.0;

/// Host configuration for a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TourConfig {
    /// Move from tooltip to tooltip without beacons in between.
    pub continuous: bool,
    /// Log every transition, prop diff, and scroll decision.
    pub debug: bool,
    pub disable_close_on_esc: bool,
    pub disable_overlay: bool,
    pub disable_overlay_close: bool,
    pub disable_scrolling: bool,
    pub hide_back_button: bool,
    /// Start (true) or stop (false) the tour.
    pub run: bool,
    pub scroll_offset: f64,
    /// Scroll even when the first step is shown.
    pub scroll_to_first_step: bool,
    pub show_progress: bool,
    pub show_skip_button: bool,
    pub spotlight_clicks: bool,
    pub spotlight_padding: f64,
    /// Host-driven step index. Together with `run` this makes the tour
    /// controlled.
    pub step_index: Option<usize>,
    pub steps: Vec<Step>,
    pub styles: StyleOverrides,
    pub locale: LocaleOverrides,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            debug: false,
            disable_close_on_esc: false,
            disable_overlay: false,
            disable_overlay_close: false,
            disable_scrolling: false,
            hide_back_button: false,
            run: true,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            scroll_to_first_step: false,
            show_progress: false,
            show_skip_button: false,
            spotlight_clicks: false,
            spotlight_padding: DEFAULT_SPOTLIGHT_PADDING,
            step_index: None,
            steps: Vec::new(),
            styles: StyleOverrides::default(),
            locale: LocaleOverrides::default(),
        }
    }
}

impl TourConfig {
    /// Create a configuration for `steps` with all other options defaulted.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    /// Whether the host owns the step index.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.run && self.step_index.is_some()
    }

    #[must_use]
    pub fn steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn run(mut self, run: bool) -> Self {
        self.run = run;
        self
    }

    #[must_use]
    pub fn step_index(mut self, index: usize) -> Self {
        self.step_index = Some(index);
        self
    }

    #[must_use]
    pub fn continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn disable_close_on_esc(mut self, disable: bool) -> Self {
        self.disable_close_on_esc = disable;
        self
    }

    #[must_use]
    pub fn disable_scrolling(mut self, disable: bool) -> Self {
        self.disable_scrolling = disable;
        self
    }

    #[must_use]
    pub fn scroll_offset(mut self, offset: f64) -> Self {
        self.scroll_offset = offset;
        self
    }

    #[must_use]
    pub fn scroll_to_first_step(mut self, enabled: bool) -> Self {
        self.scroll_to_first_step = enabled;
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[must_use]
    pub fn spotlight_padding(mut self, padding: f64) -> Self {
        self.spotlight_padding = padding;
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

    /// Validate ranges and the step list.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid. An empty step list is allowed here; the host may supply
    /// steps later.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.scroll_offset.is_finite() && self.scroll_offset >= 0.0) {
            errors.push(format!(
                "scroll_offset must be a finite value >= 0, got {}",
                self.scroll_offset
            ));
        }
        if !(self.spotlight_padding.is_finite() && self.spotlight_padding >= 0.0) {
            errors.push(format!(
                "spotlight_padding must be a finite value >= 0, got {}",
                self.spotlight_padding
            ));
        }
        if !self.steps.is_empty() {
            if let Err(err) = validate_steps(&self.steps) {
                errors.push(err.to_string());
            }
            if let Some(index) = self.step_index
                && index >= self.steps.len()
            {
                errors.push(format!(
                    "step_index {index} out of range for {} steps",
                    self.steps.len()
                ));
            }
        }

        errors
    }

    /// Return `self` if it passes [`validate`](Self::validate).
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Button labels shown by the tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Locale {
    pub back: String,
    pub close: String,
    pub last: String,
    pub next: String,
    pub skip: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            back: "Back".into(),
            close: "Close".into(),
            last: "Last".into(),
            next: "Next".into(),
            skip: "Skip".into(),
        }
    }
}

impl Locale {
    /// Apply the set fields of `overrides`.
    #[must_use]
    pub fn merged(mut self, overrides: &LocaleOverrides) -> Self {
        let LocaleOverrides {
            back,
            close,
            last,
            next,
            skip,
        } = overrides;
        override_with(&mut self.back, back);
        override_with(&mut self.close, close);
        override_with(&mut self.last, last);
        override_with(&mut self.next, next);
        override_with(&mut self.skip, skip);
        self
    }
}

/// Sparse locale set at tour or step level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocaleOverrides {
    pub back: Option<String>,
    pub close: Option<String>,
    pub last: Option<String>,
    pub next: Option<String>,
    pub skip: Option<String>,
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// Presentation values handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Styles {
    pub arrow_color: String,
    pub background_color: String,
    pub beacon_size: u16,
    pub overlay_color: String,
    pub primary_color: String,
    pub spotlight_shadow: String,
    pub text_color: String,
    pub width: Option<u16>,
    pub z_index: i32,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            arrow_color: "#fff".into(),
            background_color: "#fff".into(),
            beacon_size: 36,
            overlay_color: "rgba(0, 0, 0, 0.5)".into(),
            primary_color: "#f04".into(),
            spotlight_shadow: "0 0 15px rgba(0, 0, 0, 0.5)".into(),
            text_color: "#333".into(),
            width: None,
            z_index: 100,
        }
    }
}

impl Styles {
    /// Apply the set fields of `overrides`.
    #[must_use]
    pub fn merged(mut self, overrides: &StyleOverrides) -> Self {
        override_with(&mut self.arrow_color, &overrides.arrow_color);
        override_with(&mut self.background_color, &overrides.background_color);
        override_with(&mut self.overlay_color, &overrides.overlay_color);
        override_with(&mut self.primary_color, &overrides.primary_color);
        override_with(&mut self.spotlight_shadow, &overrides.spotlight_shadow);
        override_with(&mut self.text_color, &overrides.text_color);
        if let Some(size) = overrides.beacon_size {
            self.beacon_size = size;
        }
        if overrides.width.is_some() {
            self.width = overrides.width;
        }
        if let Some(z_index) = overrides.z_index {
            self.z_index = z_index;
        }
        self
    }
}

/// Sparse styles set at tour or step level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleOverrides {
    pub arrow_color: Option<String>,
    pub background_color: Option<String>,
    pub beacon_size: Option<u16>,
    pub overlay_color: Option<String>,
    pub primary_color: Option<String>,
    pub spotlight_shadow: Option<String>,
    pub text_color: Option<String>,
    pub width: Option<u16>,
    pub z_index: Option<i32>,
}

fn override_with(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "serde")]
    use crate::geometry::Placement;

    #[test]
    fn defaults_match_engine_constants() {
        let config = TourConfig::default();
        assert!(config.run);
        assert!(!config.continuous);
        assert!((config.scroll_offset - 20.0).abs() < f64::EPSILON);
        assert!((config.spotlight_padding - 10.0).abs() < f64::EPSILON);
        assert!(config.step_index.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn controlled_requires_run_and_index() {
        assert!(!TourConfig::default().is_controlled());
        assert!(TourConfig::default().step_index(0).is_controlled());
        assert!(!TourConfig::default().step_index(0).run(false).is_controlled());
    }

    #[test]
    fn validate_reports_every_problem() {
        let config = TourConfig::new(vec![Step::new("")])
            .scroll_offset(f64::NAN)
            .spotlight_padding(-2.0)
            .step_index(4);
        let errors = config.validate();
        assert_eq!(errors.len(), 4, "{errors:?}");
        assert!(errors[0].contains("scroll_offset"));
        assert!(errors[1].contains("spotlight_padding"));
        assert!(errors[2].contains("missing a target"));
        assert!(errors[3].contains("step_index 4"));
    }

    #[test]
    fn validated_passes_good_config_through() {
        let config = TourConfig::new(vec![Step::new("#a"), Step::centered()]);
        let validated = config.clone().validated().expect("valid config");
        assert_eq!(validated, config);
    }

    #[test]
    fn validated_wraps_errors() {
        let err = TourConfig::default().scroll_offset(-1.0).validated().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
    }

    #[test]
    fn styles_merge_field_by_field() {
        let styles = Styles::default()
            .merged(&StyleOverrides {
                primary_color: Some("#0af".into()),
                z_index: Some(1000),
                ..StyleOverrides::default()
            })
            .merged(&StyleOverrides {
                width: Some(320),
                ..StyleOverrides::default()
            });
        assert_eq!(styles.primary_color, "#0af");
        assert_eq!(styles.z_index, 1000);
        assert_eq!(styles.width, Some(320));
        assert_eq!(styles.text_color, "#333");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_round_trip_of_a_small_tour() {
        let config = TourConfig::from_toml_str(
            r##"
            continuous = true
            scroll_offset = 64.0

            [[steps]]
            target = "#search"
            content = "Find anything from here."

            [[steps]]
            placement = "center"
            "##,
        )
        .expect("parse toml");
        assert!(config.continuous);
        assert!(config.run);
        assert_eq!(config.steps.len(), 2);
        assert_eq!(config.steps[1].placement, Some(Placement::Center));
        assert!(config.validate().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_accepts_node_targets() {
        let config = TourConfig::from_json_str(
            r#"{ "steps": [ { "target": 42, "placement": "top-start" } ], "step_index": 0 }"#,
        )
        .expect("parse json");
        assert_eq!(config.steps[0].target, crate::step::Target::Node(42));
        assert_eq!(config.steps[0].placement, Some(Placement::TopStart));
        assert!(config.is_controlled());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn file_loaders_read_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tour.json");
        std::fs::write(&path, r##"{ "debug": true, "steps": [ { "target": "#a" } ] }"##)
            .expect("write config");
        let config = TourConfig::from_json_file(&path).expect("load");
        assert!(config.debug);

        let missing = TourConfig::from_toml_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
