use crate::content::{Content, Element};
use crate::core::Layout;
use trellis_core::Key;

struct WidgetChild<T> {
    key: Option<Key>,
    traits: T,
    element: Box<dyn Element>,
}

/// Ordered children of a multi-child widget, with per-child traits and keys.
pub struct Children<T> {
    entries: Vec<WidgetChild<T>>,
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Clone + Default + 'static> Children<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, element: impl Element) {
        self.push_child(None, T::default(), element);
    }

    pub fn push_with(&mut self, traits: T, element: impl Element) {
        self.push_child(None, traits, element);
    }

    pub fn push_keyed(&mut self, key: impl Into<Key>, traits: T, element: impl Element) {
        self.push_child(Some(key.into()), traits, element);
    }

    fn push_child(&mut self, key: Option<Key>, traits: T, element: impl Element) {
        self.entries.push(WidgetChild {
            key,
            traits,
            element: Box::new(element),
        });
    }

    /// Adds every child, in order, to `content`.
    pub fn populate<L>(&self, content: &mut Content<L>)
    where
        L: Layout<Traits = T> + Clone + 'static,
    {
        for child in &self.entries {
            content.add_child(child.key.clone(), child.traits.clone(), child.element.as_ref());
        }
    }
}
