#![forbid(unsafe_code)]

//! Interfaces the engine calls on the host document.
//!
//! The engine never touches a real viewport. Element lookup, geometry
//! queries, scrolling, and keyboard binding all go through [`Document`],
//! which the host implements over its UI toolkit (and which
//! `tourkit-harness` implements in memory for tests).

use crate::step::Target;

/// Host document seen by the tour engine.
pub trait Document {
    /// Handle to a located element.
    type Element: Clone;
    /// Handle to the container that scrolls an element into view.
    type ScrollContainer;

    /// Find the element a step points at.
    fn resolve_element(&self, target: &Target) -> Option<Self::Element>;

    /// Whether the element is rendered and visible.
    fn is_visible(&self, _element: &Self::Element) -> bool {
        true
    }

    /// Whether the element (or an ancestor) is fixed-positioned.
    fn is_fixed_positioned(&self, element: &Self::Element) -> bool;

    /// Whether a scrollable ancestor other than the document intervenes.
    fn has_custom_scroll_ancestor(&self, element: &Self::Element) -> bool;

    /// The container that scrolls `element`: the nearest scrollable
    /// ancestor, or the document itself.
    fn find_scroll_ancestor(&self, element: &Self::Element) -> Self::ScrollContainer;

    /// Top edge of `element` relative to its scroll container's content.
    fn element_top(&self, element: &Self::Element) -> f64;

    /// Scroll `container` so that `y` is at its top. Fire-and-forget.
    fn scroll_to(&mut self, container: &Self::ScrollContainer, y: u32);

    /// Start delivering key presses to the tour.
    fn bind_keyboard(&mut self);

    /// Stop delivering key presses to the tour.
    fn unbind_keyboard(&mut self);
}
