//! Row widget implementation

use super::Children;
use crate::alignment::VerticalAlignment;
use crate::arrangement::LinearArrangement;
use crate::content::{Element, ElementContent};
use crate::policies::{FlexLayout, FlexParentData};
use trellis_core::Key;

/// Specification for Row layout behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSpec {
    pub horizontal_arrangement: LinearArrangement,
    pub vertical_alignment: VerticalAlignment,
}

impl RowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.horizontal_arrangement = arrangement;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }
}

impl Default for RowSpec {
    fn default() -> Self {
        Self {
            horizontal_arrangement: LinearArrangement::Start,
            vertical_alignment: VerticalAlignment::CenterVertically,
        }
    }
}

/// Lays children out left to right.
#[derive(Default)]
pub struct Row {
    spec: RowSpec,
    children: Children<FlexParentData>,
}

impl Row {
    pub fn new(spec: RowSpec) -> Self {
        Self {
            spec,
            children: Children::new(),
        }
    }

    pub fn child(mut self, element: impl Element) -> Self {
        self.children.push(element);
        self
    }

    pub fn weighted(mut self, weight: f32, element: impl Element) -> Self {
        self.children
            .push_with(FlexParentData::weighted(weight), element);
        self
    }

    /// Weighted child that may stay narrower than its share.
    pub fn weighted_loose(mut self, weight: f32, element: impl Element) -> Self {
        self.children
            .push_with(FlexParentData::new(weight, false), element);
        self
    }

    pub fn keyed(mut self, key: impl Into<Key>, element: impl Element) -> Self {
        self.children
            .push_keyed(key, FlexParentData::default(), element);
        self
    }
}

impl Element for Row {
    fn content(&self) -> ElementContent {
        let layout = FlexLayout::row(
            self.spec.horizontal_arrangement,
            self.spec.vertical_alignment,
        );
        ElementContent::build(layout, |content| self.children.populate(content))
    }
}
