//! Core layout traits and types shared by every layout strategy.

use crate::constraints::SizeConstraint;
use smallvec::SmallVec;
use trellis_geometry::{Point, Rect, Size};

/// Anything that can report a size for a constraint.
///
/// Measuring is deterministic and free of side effects, so a layout may
/// measure the same child any number of times at different constraints.
pub trait Measurable {
    fn measure(&self, constraint: SizeConstraint) -> Size;
}

impl<M: Measurable + ?Sized> Measurable for &M {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        (**self).measure(constraint)
    }
}

/// One child as seen by a [`Layout`]: its traits and an opaque measurable.
pub struct LayoutItem<'a, T> {
    pub traits: &'a T,
    pub content: &'a dyn Measurable,
}

impl<T> Clone for LayoutItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LayoutItem<'_, T> {}

impl<'a, T> LayoutItem<'a, T> {
    pub fn new(traits: &'a T, content: &'a dyn Measurable) -> Self {
        Self { traits, content }
    }

    /// Pairs per-child traits with measurables, in order.
    ///
    /// # Panics
    ///
    /// Panics if `traits` and `contents` differ in length.
    pub fn zip(
        traits: &'a [T],
        contents: &'a [&'a dyn Measurable],
    ) -> SmallVec<[LayoutItem<'a, T>; 8]> {
        assert_eq!(
            traits.len(),
            contents.len(),
            "layout received {} traits for {} children",
            traits.len(),
            contents.len()
        );
        traits
            .iter()
            .zip(contents.iter())
            .map(|(traits, content)| LayoutItem::new(traits, *content))
            .collect()
    }

    /// Measures the underlying child.
    #[inline]
    pub fn measure(&self, constraint: SizeConstraint) -> Size {
        self.content.measure(constraint)
    }
}

/// Placement of one child relative to its parent's origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub origin: Point,
    pub size: Size,
}

impl Placement {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn at(x: f32, y: f32, size: Size) -> Self {
        Self::new(Point::new(x, y), size)
    }

    /// Zero-origin placement covering `size`.
    pub fn filling(size: Size) -> Self {
        Self::new(Point::ZERO, size)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Size of a node plus one placement per child, in child order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }

    /// Result for a node without children.
    pub fn leaf(size: Size) -> Self {
        Self::new(size, Vec::new())
    }
}

/// Strategy that sizes a node and places its children.
///
/// [`Layout::measure`] must report the same size that [`Layout::layout`]
/// would for the same constraint and children. The provided implementation
/// guarantees this; override it only as a faster path. Content nodes always
/// call [`Layout::layout`] and reuse its result for measurement.
pub trait Layout {
    /// Per-child metadata, e.g. a flex weight. The default value is used for
    /// children added without explicit traits.
    type Traits: Clone + Default + 'static;

    /// Computes the node size and one placement per item.
    fn layout(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, Self::Traits>])
        -> MeasureResult;

    /// Computes only the node size.
    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, Self::Traits>]) -> Size {
        self.layout(constraint, items).size
    }

    fn debug_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Size of a single-child node plus the placement of its child.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SingleChildMeasureResult {
    pub size: Size,
    pub placement: Placement,
}

impl SingleChildMeasureResult {
    pub fn new(size: Size, placement: Placement) -> Self {
        Self { size, placement }
    }
}

/// Layout specialization for exactly one child without traits.
pub trait SingleChildLayout {
    fn layout(&self, constraint: SizeConstraint, child: &dyn Measurable)
        -> SingleChildMeasureResult;

    fn measure(&self, constraint: SizeConstraint, child: &dyn Measurable) -> Size {
        self.layout(constraint, child).size
    }

    fn debug_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Adapts a [`SingleChildLayout`] to the general [`Layout`] contract.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SingleChild<L>(pub L);

impl<L> SingleChild<L> {
    pub fn new(layout: L) -> Self {
        Self(layout)
    }

    pub fn inner(&self) -> &L {
        &self.0
    }
}

/// # Panics
///
/// Panics unless exactly one item is present.
fn sole_child<'a>(name: &str, items: &[LayoutItem<'a, ()>]) -> &'a dyn Measurable {
    assert_eq!(
        items.len(),
        1,
        "single-child layout `{name}` requires exactly one child, got {}",
        items.len()
    );
    items[0].content
}

impl<L: SingleChildLayout> Layout for SingleChild<L> {
    type Traits = ();

    fn layout(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> MeasureResult {
        let child = sole_child(self.0.debug_name(), items);
        let result = self.0.layout(constraint, child);
        MeasureResult::new(result.size, vec![result.placement])
    }

    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> Size {
        let child = sole_child(self.0.debug_name(), items);
        self.0.measure(constraint, child)
    }

    fn debug_name(&self) -> &str {
        self.0.debug_name()
    }
}
