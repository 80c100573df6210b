//! Content nodes: a layout strategy plus its ordered children.
//!
//! [`Content`] is the typed, mutable builder parameterized by its layout.
//! Building it erases the layout type into an immutable [`ElementContent`],
//! which is what parents store for their children and what the evaluator
//! walks.
//!
//! Every top-level [`ElementContent::measure`] or [`ElementContent::evaluate`]
//! call opens a layout pass. Within a pass a node runs its layout at most once
//! per distinct constraint. Nothing is kept once the call returns.

use crate::constraints::{Bound, SizeConstraint};
use crate::core::{Layout, LayoutItem, Measurable, MeasureResult, SingleChild, SingleChildLayout};
use crate::policies::{IntrinsicLayout, Passthrough};
use crate::tree::{LayoutBox, LayoutTree};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use trellis_core::hash::ScratchMap;
use trellis_core::{assign_identifiers, ElementType, Key};
use trellis_geometry::Size;

/// Something that describes its layout as [`ElementContent`].
pub trait Element: 'static {
    fn content(&self) -> ElementContent;

    /// Type tag used for identity assignment among siblings.
    fn element_type(&self) -> ElementType {
        ElementType::of::<Self>()
    }
}

impl Element for Box<dyn Element> {
    fn content(&self) -> ElementContent {
        (**self).content()
    }

    fn element_type(&self) -> ElementType {
        (**self).element_type()
    }
}

struct ContentChild<T> {
    traits: T,
    key: Option<Key>,
    element_type: ElementType,
    content: ElementContent,
}

impl<T: Clone> Clone for ContentChild<T> {
    fn clone(&self) -> Self {
        Self {
            traits: self.traits.clone(),
            key: self.key.clone(),
            element_type: self.element_type,
            content: self.content.clone(),
        }
    }
}

/// Typed content node under construction.
pub struct Content<L: Layout> {
    layout: L,
    children: Vec<ContentChild<L::Traits>>,
}

impl<L> Content<L>
where
    L: Layout + Clone + 'static,
{
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            children: Vec::new(),
        }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child with default traits and no key.
    pub fn add<E: Element + ?Sized>(&mut self, element: &E) -> &mut Self {
        self.add_child(None, L::Traits::default(), element)
    }

    pub fn add_with_traits<E: Element + ?Sized>(
        &mut self,
        traits: L::Traits,
        element: &E,
    ) -> &mut Self {
        self.add_child(None, traits, element)
    }

    pub fn add_keyed<E: Element + ?Sized>(
        &mut self,
        key: impl Into<Key>,
        traits: L::Traits,
        element: &E,
    ) -> &mut Self {
        self.add_child(Some(key.into()), traits, element)
    }

    pub fn add_child<E: Element + ?Sized>(
        &mut self,
        key: Option<Key>,
        traits: L::Traits,
        element: &E,
    ) -> &mut Self {
        self.children.push(ContentChild {
            traits,
            key,
            element_type: element.element_type(),
            content: element.content(),
        });
        self
    }

    /// Freezes the node.
    pub fn build(self) -> ElementContent {
        ElementContent {
            node: Box::new(self),
        }
    }
}

impl<L> Clone for Content<L>
where
    L: Layout + Clone,
{
    fn clone(&self) -> Self {
        Self {
            layout: self.layout.clone(),
            children: self.children.clone(),
        }
    }
}

/// Hashable form of a constraint; `+ 0.0` folds -0.0 into 0.0.
fn constraint_key(constraint: SizeConstraint) -> [u32; 4] {
    let bits = |value: f32| (value + 0.0).to_bits();
    let bound = |bound: Bound| bits(bound.value().unwrap_or(f32::INFINITY));
    [
        bits(constraint.min_width()),
        bound(constraint.max_width()),
        bits(constraint.min_height()),
        bound(constraint.max_height()),
    ]
}

/// Node address plus constraint.
type PassKey = (usize, [u32; 4]);

/// Layout results of one measure or evaluate call.
///
/// Nodes are immutable and borrowed for the whole call, so a node's address
/// identifies it until the pass is dropped.
#[derive(Default)]
struct LayoutPass {
    results: RefCell<ScratchMap<PassKey, Rc<MeasureResult>>>,
    reused: Cell<usize>,
}

impl LayoutPass {
    fn get(&self, key: &PassKey) -> Option<Rc<MeasureResult>> {
        let cached = self.results.borrow().get(key).cloned();
        if cached.is_some() {
            self.reused.set(self.reused.get() + 1);
        }
        cached
    }

    fn store(&self, key: PassKey, result: Rc<MeasureResult>) {
        self.results.borrow_mut().insert(key, result);
    }

    fn finish(self) {
        log::trace!(
            "layout pass ran {} layouts, reused {} results",
            self.results.borrow().len(),
            self.reused.get()
        );
    }
}

/// A child as its parent's layout sees it during a pass.
struct PassChild<'a> {
    content: &'a ElementContent,
    pass: &'a LayoutPass,
}

impl Measurable for PassChild<'_> {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.content.node.resolve(constraint, self.pass).size
    }
}

/// Object-safe view of `Content<L>` for any `L`.
trait AnyContent {
    /// Runs the layout at `constraint`, or reuses the pass's earlier result.
    fn resolve(&self, constraint: SizeConstraint, pass: &LayoutPass) -> Rc<MeasureResult>;
    fn evaluate(&self, constraint: SizeConstraint, pass: &LayoutPass) -> LayoutTree;
    fn child_count(&self) -> usize;
    fn layout_name(&self) -> &str;
    fn clone_box(&self) -> Box<dyn AnyContent>;
}

impl<L> AnyContent for Content<L>
where
    L: Layout + Clone + 'static,
{
    fn resolve(&self, constraint: SizeConstraint, pass: &LayoutPass) -> Rc<MeasureResult> {
        let key = (self as *const Self as usize, constraint_key(constraint));
        if let Some(result) = pass.get(&key) {
            return result;
        }

        let children: SmallVec<[PassChild<'_>; 8]> = self
            .children
            .iter()
            .map(|child| PassChild {
                content: &child.content,
                pass,
            })
            .collect();
        let items: SmallVec<[LayoutItem<'_, L::Traits>; 8]> = self
            .children
            .iter()
            .zip(children.iter())
            .map(|(child, measurable)| LayoutItem::new(&child.traits, measurable))
            .collect();

        let result = self.layout.layout(constraint, &items);
        assert_eq!(
            result.placements.len(),
            self.children.len(),
            "layout `{}` produced {} placements for {} children",
            self.layout.debug_name(),
            result.placements.len(),
            self.children.len()
        );

        let result = Rc::new(result);
        pass.store(key, Rc::clone(&result));
        result
    }

    fn evaluate(&self, constraint: SizeConstraint, pass: &LayoutPass) -> LayoutTree {
        log::trace!(
            "evaluating `{}` with {} children under {:?}",
            self.layout.debug_name(),
            self.children.len(),
            constraint
        );

        let result = self.resolve(constraint, pass);
        let size = result.size;
        if !size.is_finite() {
            log::warn!(
                "layout `{}` returned a non-finite size {:?}",
                self.layout.debug_name(),
                size
            );
        }

        let identifiers = assign_identifiers(
            self.children
                .iter()
                .map(|child| (child.element_type, child.key.clone())),
        );

        let children = self
            .children
            .iter()
            .zip(result.placements.iter())
            .zip(identifiers)
            .map(|((child, placement), identifier)| {
                let subtree = child
                    .content
                    .node
                    .evaluate(SizeConstraint::tight(placement.size), pass);
                if subtree.size() != placement.size {
                    log::debug!(
                        "{} sized itself {:?} inside a {:?} placement",
                        identifier,
                        subtree.size(),
                        placement.size
                    );
                }
                LayoutBox::new(identifier, placement.rect(), subtree)
            })
            .collect();

        LayoutTree::new(size, children)
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn layout_name(&self) -> &str {
        self.layout.debug_name()
    }

    fn clone_box(&self) -> Box<dyn AnyContent> {
        Box::new(self.clone())
    }
}

/// Immutable content node with its layout type erased.
pub struct ElementContent {
    node: Box<dyn AnyContent>,
}

impl ElementContent {
    /// Builds a node from `layout` and the children added by `build`.
    pub fn build<L, F>(layout: L, build: F) -> Self
    where
        L: Layout + Clone + 'static,
        F: FnOnce(&mut Content<L>),
    {
        let mut content = Content::new(layout);
        build(&mut content);
        content.build()
    }

    /// Node with no children.
    pub fn from_layout<L>(layout: L) -> Self
    where
        L: Layout + Clone + 'static,
    {
        Content::new(layout).build()
    }

    /// Node hosting exactly one child through a single-child layout.
    pub fn single<L, E>(layout: L, child: &E) -> Self
    where
        L: SingleChildLayout + Clone + 'static,
        E: Element + ?Sized,
    {
        let mut content = Content::new(SingleChild::new(layout));
        content.add(child);
        content.build()
    }

    /// Node that adopts its child's geometry unchanged.
    pub fn passthrough<E: Element + ?Sized>(child: &E) -> Self {
        Self::single(Passthrough, child)
    }

    /// Leaf with a fixed size, returned regardless of the constraint.
    pub fn intrinsic(size: Size) -> Self {
        Self::from_layout(IntrinsicLayout::fixed(size))
    }

    /// Leaf whose size is computed from the constraint by `measure`.
    pub fn measuring<F>(measure: F) -> Self
    where
        F: Fn(SizeConstraint) -> Size + 'static,
    {
        Self::from_layout(IntrinsicLayout::computed(measure))
    }

    pub fn measure(&self, constraint: SizeConstraint) -> Size {
        let pass = LayoutPass::default();
        let size = self.node.resolve(constraint, &pass).size;
        pass.finish();
        size
    }

    /// Lays out this node and, recursively, every descendant.
    ///
    /// # Panics
    ///
    /// Panics when a layout violates its contract (wrong number of
    /// placements, or a single-child layout hosting another count).
    pub fn evaluate(&self, constraint: SizeConstraint) -> LayoutTree {
        let pass = LayoutPass::default();
        let tree = self.node.evaluate(constraint, &pass);
        pass.finish();
        tree
    }

    pub fn child_count(&self) -> usize {
        self.node.child_count()
    }

    pub fn layout_name(&self) -> &str {
        self.node.layout_name()
    }
}

impl Measurable for ElementContent {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        ElementContent::measure(self, constraint)
    }
}

impl Clone for ElementContent {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone_box(),
        }
    }
}

impl fmt::Debug for ElementContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementContent")
            .field("layout", &self.layout_name())
            .field("children", &self.child_count())
            .finish()
    }
}

impl<L> From<Content<L>> for ElementContent
where
    L: Layout + Clone + 'static,
{
    fn from(content: Content<L>) -> Self {
        content.build()
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
