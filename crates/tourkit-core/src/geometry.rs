#![forbid(unsafe_code)]

//! Placement primitives shared by the resolver and the scroll planner.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a beacon or tooltip sits relative to its target.
///
/// `Center` is reserved: the step has no anchor, renders in the middle of
/// the viewport, and never scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
    Auto,
    Center,
}

impl Placement {
    /// Stable kebab-case label, as reported by positioning widgets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
            Self::Auto => "auto",
            Self::Center => "center",
        }
    }

    #[must_use]
    pub const fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a placement label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement: {0:?}")]
pub struct ParsePlacementError(pub String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placement = match s.trim() {
            "top" => Self::Top,
            "top-start" => Self::TopStart,
            "top-end" => Self::TopEnd,
            "bottom" => Self::Bottom,
            "bottom-start" => Self::BottomStart,
            "bottom-end" => Self::BottomEnd,
            "left" => Self::Left,
            "left-start" => Self::LeftStart,
            "left-end" => Self::LeftEnd,
            "right" => Self::Right,
            "right-start" => Self::RightStart,
            "right-end" => Self::RightEnd,
            "auto" => Self::Auto,
            "center" => Self::Center,
            other => return Err(ParsePlacementError(other.to_string())),
        };
        Ok(placement)
    }
}

/// Which floating widget reported a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Beacon,
    Tooltip,
}

/// Geometry reported by the positioning widget for a rendered beacon or
/// tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    /// Placement actually used after collision handling.
    pub placement: Placement,
    /// True when the widget was moved to the opposite side of the target.
    pub flipped: bool,
    /// Top edge of the floating element, in document coordinates.
    pub top_edge: f64,
}

impl PlacementResult {
    #[must_use]
    pub const fn new(placement: Placement, top_edge: f64) -> Self {
        Self {
            placement,
            flipped: false,
            top_edge,
        }
    }

    #[must_use]
    pub const fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_labels() {
        for placement in [
            Placement::Top,
            Placement::TopEnd,
            Placement::BottomStart,
            Placement::LeftEnd,
            Placement::RightStart,
            Placement::Auto,
            Placement::Center,
        ] {
            assert_eq!(placement.as_str().parse::<Placement>(), Ok(placement));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "diagonal".parse::<Placement>().unwrap_err();
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn default_is_bottom() {
        assert_eq!(Placement::default(), Placement::Bottom);
        assert!(!Placement::default().is_center());
    }

    #[test]
    fn placement_result_builder() {
        let result = PlacementResult::new(Placement::Top, 120.5).flipped(true);
        assert!(result.flipped);
        assert_eq!(result.placement, Placement::Top);
        assert!((result.top_edge - 120.5).abs() < f64::EPSILON);
    }
}
