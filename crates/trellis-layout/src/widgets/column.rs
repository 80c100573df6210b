//! Column widget implementation

use super::Children;
use crate::alignment::HorizontalAlignment;
use crate::arrangement::LinearArrangement;
use crate::content::{Element, ElementContent};
use crate::policies::{FlexLayout, FlexParentData};
use trellis_core::Key;

/// Specification for Column layout behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSpec {
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.vertical_arrangement = arrangement;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            vertical_arrangement: LinearArrangement::Start,
            horizontal_alignment: HorizontalAlignment::Start,
        }
    }
}

/// Stacks children top to bottom.
#[derive(Default)]
pub struct Column {
    spec: ColumnSpec,
    children: Children<FlexParentData>,
}

impl Column {
    pub fn new(spec: ColumnSpec) -> Self {
        Self {
            spec,
            children: Children::new(),
        }
    }

    pub fn child(mut self, element: impl Element) -> Self {
        self.children.push(element);
        self
    }

    /// Adds a child that takes a `weight` share of the leftover height.
    pub fn weighted(mut self, weight: f32, element: impl Element) -> Self {
        self.children
            .push_with(FlexParentData::weighted(weight), element);
        self
    }

    pub fn keyed(mut self, key: impl Into<Key>, element: impl Element) -> Self {
        self.children
            .push_keyed(key, FlexParentData::default(), element);
        self
    }
}

impl Element for Column {
    fn content(&self) -> ElementContent {
        let layout = FlexLayout::column(
            self.spec.vertical_arrangement,
            self.spec.horizontal_alignment,
        );
        ElementContent::build(layout, |content| self.children.populate(content))
    }
}
