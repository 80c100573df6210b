use crate::content::{Element, ElementContent};
use crate::policies::{ConstrainedSize, SizeRule};
use trellis_geometry::Size;

/// Wraps one child and narrows its width and/or height.
pub struct SizedBox {
    rule: ConstrainedSize,
    child: Box<dyn Element>,
}

impl SizedBox {
    pub fn new(width: SizeRule, height: SizeRule, child: impl Element) -> Self {
        Self {
            rule: ConstrainedSize::new(width, height),
            child: Box::new(child),
        }
    }

    /// Pins the child to exactly `size`.
    pub fn exact(size: Size, child: impl Element) -> Self {
        Self {
            rule: ConstrainedSize::absolute(size),
            child: Box::new(child),
        }
    }
}

impl Element for SizedBox {
    fn content(&self) -> ElementContent {
        ElementContent::single(self.rule, self.child.as_ref())
    }
}
