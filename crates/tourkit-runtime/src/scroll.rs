#![forbid(unsafe_code)]

//! Scroll planning for the active step.
//!
//! [`plan_scroll`] is a pure function: it decides whether revealing the
//! current target needs a scroll and, if so, the vertical offset of the
//! scroll container. The controller performs the scroll.
//!
//! # Invariants
//!
//! 1. A centered step never scrolls, whatever the placement result.
//! 2. Scrolling only happens on the transition into `Beacon` or `Tooltip`.
//! 3. The offset is finite and `>= 0`.

use tourkit_core::{Lifecycle, Placement, PlacementResult, ResolvedStep, TourConfig};

/// Scroll options for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub disable_scrolling: bool,
    /// Gap left above the target.
    pub scroll_offset: f64,
    /// Scroll even when the step index did not change (the first step).
    pub scroll_to_first_step: bool,
    pub spotlight_padding: f64,
}

impl ScrollConfig {
    /// Scroll options for `step` under `config`.
    ///
    /// The global switch wins over the step's own flag.
    #[must_use]
    pub fn from_step(config: &TourConfig, step: &ResolvedStep) -> Self {
        Self {
            disable_scrolling: config.disable_scrolling || step.disable_scrolling,
            scroll_offset: step.scroll_offset,
            scroll_to_first_step: config.scroll_to_first_step,
            spotlight_padding: step.spotlight_padding,
        }
    }
}

/// Where the tour was (or is) within the step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPosition {
    pub index: usize,
    pub lifecycle: Lifecycle,
}

impl StepPosition {
    #[must_use]
    pub const fn new(index: usize, lifecycle: Lifecycle) -> Self {
        Self { index, lifecycle }
    }
}

/// Target geometry gathered from the host document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetGeometry {
    /// Top edge relative to the scroll container's content.
    pub top: f64,
    pub is_fixed: bool,
    pub has_custom_scroll_parent: bool,
}

/// Why no scroll was planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    Disabled,
    Centered,
    NoTarget,
    FixedTarget,
    NoLifecycleChange,
    SameStep,
}

/// Scroll Planner output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPlan {
    Skip(SkipReason),
    ScrollTo(u32),
}

impl ScrollPlan {
    #[must_use]
    pub const fn offset(&self) -> Option<u32> {
        match self {
            Self::ScrollTo(y) => Some(*y),
            Self::Skip(_) => None,
        }
    }

    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}

/// Decide whether and where to scroll for `step`.
///
/// `placement` is the latest result reported by the widget matching
/// `current.lifecycle` (beacon or tooltip), if it has rendered yet.
#[must_use]
pub fn plan_scroll(
    step: &ResolvedStep,
    target: Option<&TargetGeometry>,
    placement: Option<&PlacementResult>,
    previous: StepPosition,
    current: StepPosition,
    config: &ScrollConfig,
) -> ScrollPlan {
    if config.disable_scrolling {
        return ScrollPlan::Skip(SkipReason::Disabled);
    }
    if step.is_center() {
        return ScrollPlan::Skip(SkipReason::Centered);
    }
    let Some(target) = target else {
        return ScrollPlan::Skip(SkipReason::NoTarget);
    };
    if step.is_fixed && target.is_fixed {
        return ScrollPlan::Skip(SkipReason::FixedTarget);
    }
    if previous.lifecycle == current.lifecycle || !current.lifecycle.is_presenting() {
        return ScrollPlan::Skip(SkipReason::NoLifecycleChange);
    }
    if previous.index == current.index && !config.scroll_to_first_step {
        return ScrollPlan::Skip(SkipReason::SameStep);
    }

    let mut y = (target.top - config.scroll_offset).floor();

    match (current.lifecycle, placement) {
        (Lifecycle::Beacon, Some(beacon)) => {
            if beacon.placement != Placement::Bottom && !target.has_custom_scroll_parent {
                y = (beacon.top_edge - config.scroll_offset).floor();
            }
        }
        (Lifecycle::Tooltip, Some(tooltip)) => {
            let hugs_target = matches!(
                tooltip.placement,
                Placement::Top | Placement::Right | Placement::Left
            );
            if hugs_target && !tooltip.flipped && !target.has_custom_scroll_parent {
                y = (tooltip.top_edge - config.scroll_offset).floor();
            } else {
                y -= config.spotlight_padding;
            }
        }
        _ => {}
    }

    ScrollPlan::ScrollTo(clamp_offset(y))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_offset(y: f64) -> u32 {
    if !y.is_finite() || y <= 0.0 {
        return 0;
    }
    y.floor().min(f64::from(u32::MAX)) as u32
}
