#![forbid(unsafe_code)]

//! In-memory host document.

use std::collections::BTreeMap;

use tourkit_core::{Document, Target};
use tracing::trace;

/// One element in a [`FakeDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct FakeElement {
    /// Top edge relative to its scroll container's content.
    pub top: f64,
    pub fixed: bool,
    pub visible: bool,
    /// Selector of the scrollable ancestor, if it is not the document.
    pub scroll_parent: Option<String>,
}

impl FakeElement {
    /// A visible, statically positioned element at `top`.
    #[must_use]
    pub fn at(top: f64) -> Self {
        Self {
            top,
            fixed: false,
            visible: true,
            scroll_parent: None,
        }
    }

    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub fn in_scroll_parent(mut self, selector: impl Into<String>) -> Self {
        self.scroll_parent = Some(selector.into());
        self
    }
}

/// Container a scroll was issued against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Document,
    Element(String),
}

/// A recorded `scroll_to` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollCall {
    pub container: ScrollTarget,
    pub y: u32,
}

/// Host document backed by a selector table.
///
/// Elements are looked up by selector; [`Target::Node`] ids are mapped to
/// selectors with [`FakeDocument::with_node`].
#[derive(Debug, Clone, Default)]
pub struct FakeDocument {
    elements: BTreeMap<String, FakeElement>,
    nodes: BTreeMap<u64, String>,
    scrolls: Vec<ScrollCall>,
    keyboard_bound: bool,
    bind_calls: usize,
    unbind_calls: usize,
}

impl FakeDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element(mut self, selector: impl Into<String>, element: FakeElement) -> Self {
        self.insert(selector, element);
        self
    }

    #[must_use]
    pub fn with_node(mut self, id: u64, selector: impl Into<String>) -> Self {
        self.nodes.insert(id, selector.into());
        self
    }

    pub fn insert(&mut self, selector: impl Into<String>, element: FakeElement) {
        self.elements.insert(selector.into(), element);
    }

    pub fn remove(&mut self, selector: &str) -> Option<FakeElement> {
        self.elements.remove(selector)
    }

    pub fn element_mut(&mut self, selector: &str) -> Option<&mut FakeElement> {
        self.elements.get_mut(selector)
    }

    /// Every scroll issued so far, oldest first.
    #[must_use]
    pub fn scrolls(&self) -> &[ScrollCall] {
        &self.scrolls
    }

    #[must_use]
    pub fn last_scroll(&self) -> Option<&ScrollCall> {
        self.scrolls.last()
    }

    pub fn clear_scrolls(&mut self) {
        self.scrolls.clear();
    }

    #[must_use]
    pub fn keyboard_bound(&self) -> bool {
        self.keyboard_bound
    }

    #[must_use]
    pub fn bind_calls(&self) -> usize {
        self.bind_calls
    }

    #[must_use]
    pub fn unbind_calls(&self) -> usize {
        self.unbind_calls
    }

    fn lookup(&self, selector: &str) -> Option<&FakeElement> {
        self.elements.get(selector)
    }
}

impl Document for FakeDocument {
    type Element = String;
    type ScrollContainer = ScrollTarget;

    fn resolve_element(&self, target: &Target) -> Option<String> {
        let selector = match target {
            Target::Selector(selector) => selector.clone(),
            Target::Node(id) => self.nodes.get(id)?.clone(),
        };
        self.elements.contains_key(&selector).then_some(selector)
    }

    fn is_visible(&self, element: &String) -> bool {
        self.lookup(element).is_some_and(|e| e.visible)
    }

    fn is_fixed_positioned(&self, element: &String) -> bool {
        self.lookup(element).is_some_and(|e| e.fixed)
    }

    fn has_custom_scroll_ancestor(&self, element: &String) -> bool {
        self.lookup(element)
            .is_some_and(|e| e.scroll_parent.is_some())
    }

    fn find_scroll_ancestor(&self, element: &String) -> ScrollTarget {
        match self.lookup(element).and_then(|e| e.scroll_parent.clone()) {
            Some(parent) => ScrollTarget::Element(parent),
            None => ScrollTarget::Document,
        }
    }

    fn element_top(&self, element: &String) -> f64 {
        self.lookup(element).map_or(0.0, |e| e.top)
    }

    fn scroll_to(&mut self, container: &ScrollTarget, y: u32) {
        trace!(?container, y, "scroll");
        self.scrolls.push(ScrollCall {
            container: container.clone(),
            y,
        });
    }

    fn bind_keyboard(&mut self) {
        self.bind_calls += 1;
        self.keyboard_bound = true;
    }

    fn unbind_keyboard(&mut self) {
        self.unbind_calls += 1;
        self.keyboard_bound = false;
    }
}
