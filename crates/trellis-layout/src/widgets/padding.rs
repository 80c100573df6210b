use crate::content::{Element, ElementContent};
use crate::policies::Inset;
use trellis_geometry::EdgeInsets;

/// Surrounds one child with fixed insets.
pub struct Padding {
    insets: EdgeInsets,
    child: Box<dyn Element>,
}

impl Padding {
    pub fn new(insets: EdgeInsets, child: impl Element) -> Self {
        Self {
            insets,
            child: Box::new(child),
        }
    }

    pub fn uniform(all: f32, child: impl Element) -> Self {
        Self::new(EdgeInsets::uniform(all), child)
    }
}

impl Element for Padding {
    fn content(&self) -> ElementContent {
        ElementContent::single(Inset::new(self.insets), self.child.as_ref())
    }
}
