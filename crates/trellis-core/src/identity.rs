//! Stable identity for children within one sibling group.

use crate::hash::{hash_value, ScratchMap};
use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime type tag of a child element.
///
/// Equality and hashing only look at the [`TypeId`]; the type name is kept
/// for diagnostics.
#[derive(Clone, Copy)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    /// Returns the tag for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        match base.rfind("::") {
            Some(index) => &self.name[index + 2..],
            None => self.name,
        }
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementType {}

impl Hash for ElementType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Explicit key attached to a child to tell apart siblings of the same type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Name(Cow<'static, str>),
    Index(u64),
    /// Hash of an arbitrary user value, see [`Key::hashed`].
    Hashed(u64),
}

impl Key {
    /// Builds a key from any hashable value.
    ///
    /// Distinct values may collide; use [`Key::Name`] or [`Key::Index`] when
    /// the key space is known.
    pub fn hashed<T: Hash + ?Sized>(value: &T) -> Self {
        Key::Hashed(hash_value(value))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{name:?}"),
            Key::Index(index) => write!(f, "{index}"),
            Key::Hashed(hash) => write!(f, "#{hash:016x}"),
        }
    }
}

impl From<&'static str> for Key {
    fn from(value: &'static str) -> Self {
        Key::Name(Cow::Borrowed(value))
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(Cow::Owned(value))
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Index(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(u64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as u64)
    }
}

/// Identifies one child within its sibling group for one evaluation.
///
/// Two children get equal identifiers iff they share element type, key (both
/// absent counts as equal) and occurrence rank among earlier siblings with
/// the same type and key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    element_type: ElementType,
    key: Option<Key>,
    count: usize,
}

impl Identifier {
    pub fn new(element_type: ElementType, key: Option<Key>, count: usize) -> Self {
        Self {
            element_type,
            key,
            count,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// Number of earlier siblings sharing this type and key.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_type.short_name())?;
        if let Some(key) = &self.key {
            write!(f, "[{key}]")?;
        }
        write!(f, "#{}", self.count)
    }
}

/// Per-group occurrence counter. Lives for exactly one sibling group.
struct IdentifierFactory {
    counts: ScratchMap<(ElementType, Option<Key>), usize>,
}

impl IdentifierFactory {
    fn with_capacity(capacity: usize) -> Self {
        let mut counts = ScratchMap::default();
        counts.reserve(capacity);
        Self { counts }
    }

    fn next(&mut self, element_type: ElementType, key: Option<Key>) -> Identifier {
        let slot = self
            .counts
            .entry((element_type, key.clone()))
            .or_insert(0);
        let count = *slot;
        *slot += 1;
        Identifier::new(element_type, key, count)
    }
}

/// Assigns one identifier per child of a sibling group, in input order.
pub fn assign_identifiers<I>(children: I) -> Vec<Identifier>
where
    I: IntoIterator<Item = (ElementType, Option<Key>)>,
{
    let children = children.into_iter();
    let (lower, _) = children.size_hint();
    let mut factory = IdentifierFactory::with_capacity(lower);
    let identifiers: Vec<Identifier> = children
        .map(|(element_type, key)| factory.next(element_type, key))
        .collect();
    log::trace!(
        "assigned {} identifiers ({} distinct type/key pairs)",
        identifiers.len(),
        factory.counts.len()
    );
    identifiers
}

#[cfg(test)]
#[path = "tests/identity_tests.rs"]
mod tests;
