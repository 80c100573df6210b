//! Overlay widget implementation

use super::Children;
use crate::alignment::Alignment;
use crate::content::{Element, ElementContent};
use crate::policies::OverlayLayout;
use trellis_core::Key;

/// Specification for Overlay layout behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlaySpec {
    pub content_alignment: Alignment,
    pub propagate_min_constraints: bool,
}

impl OverlaySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }

    pub fn propagate_min_constraints(mut self, propagate: bool) -> Self {
        self.propagate_min_constraints = propagate;
        self
    }
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self {
            content_alignment: Alignment::TOP_START,
            propagate_min_constraints: false,
        }
    }
}

/// Draws children on top of each other.
#[derive(Default)]
pub struct Overlay {
    spec: OverlaySpec,
    children: Children<()>,
}

impl Overlay {
    pub fn new(spec: OverlaySpec) -> Self {
        Self {
            spec,
            children: Children::new(),
        }
    }

    pub fn child(mut self, element: impl Element) -> Self {
        self.children.push(element);
        self
    }

    pub fn keyed(mut self, key: impl Into<Key>, element: impl Element) -> Self {
        self.children.push_keyed(key, (), element);
        self
    }
}

impl Element for Overlay {
    fn content(&self) -> ElementContent {
        let layout = OverlayLayout::new(
            self.spec.content_alignment,
            self.spec.propagate_min_constraints,
        );
        ElementContent::build(layout, |content| self.children.populate(content))
    }
}
