//! Result of evaluating a content tree.

use trellis_core::Identifier;
use trellis_geometry::{Point, Rect, Size};

/// Layout of one content node: its size and its placed children, in child order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutTree {
    size: Size,
    children: Vec<LayoutBox>,
}

impl LayoutTree {
    pub fn new(size: Size, children: Vec<LayoutBox>) -> Self {
        Self { size, children }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn children(&self) -> &[LayoutBox] {
        &self.children
    }

    pub fn into_children(self) -> Vec<LayoutBox> {
        self.children
    }

    /// Number of placed descendants, excluding this node.
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.layout.node_count())
            .sum()
    }

    /// Follows `path` one identifier per level.
    pub fn find(&self, path: &[Identifier]) -> Option<&LayoutBox> {
        let (first, rest) = path.split_first()?;
        let child = self
            .children
            .iter()
            .find(|child| &child.identifier == first)?;
        if rest.is_empty() {
            Some(child)
        } else {
            child.layout.find(rest)
        }
    }

    /// Visits every descendant depth-first with its identifier path and its
    /// rect relative to the root of this tree.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&[Identifier], Rect),
    {
        let mut path = Vec::new();
        self.walk_from(Point::ZERO, &mut path, &mut visit);
    }

    fn walk_from<F>(&self, origin: Point, path: &mut Vec<Identifier>, visit: &mut F)
    where
        F: FnMut(&[Identifier], Rect),
    {
        for child in &self.children {
            let rect = child.rect.translate(origin.x, origin.y);
            path.push(child.identifier.clone());
            visit(path.as_slice(), rect);
            child.layout.walk_from(rect.origin(), path, visit);
            path.pop();
        }
    }

    /// Flattened `(path, absolute rect)` pairs in depth-first order.
    pub fn absolute_frames(&self) -> Vec<(Vec<Identifier>, Rect)> {
        let mut frames = Vec::with_capacity(self.node_count());
        self.walk(|path, rect| frames.push((path.to_vec(), rect)));
        frames
    }
}

/// A placed child: its identifier, its rect relative to the parent, and its own layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBox {
    pub identifier: Identifier,
    pub rect: Rect,
    pub layout: LayoutTree,
}

impl LayoutBox {
    pub fn new(identifier: Identifier, rect: Rect, layout: LayoutTree) -> Self {
        Self {
            identifier,
            rect,
            layout,
        }
    }

    pub fn children(&self) -> &[LayoutBox] {
        self.layout.children()
    }
}
