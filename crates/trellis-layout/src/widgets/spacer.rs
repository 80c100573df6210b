//! Spacer widget implementation

use crate::content::{Element, ElementContent};
use trellis_geometry::Size;

/// Empty leaf occupying a fixed size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacer {
    pub size: Size,
}

impl Spacer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl Element for Spacer {
    fn content(&self) -> ElementContent {
        ElementContent::intrinsic(self.size)
    }
}
