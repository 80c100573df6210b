//! Hashing backends, switched to std's SipHash by the `std-hash` feature.

use std::hash::{Hash, Hasher};

#[cfg(not(feature = "std-hash"))]
mod backend {
    /// Hasher behind [`Key::hashed`](crate::Key::hashed). Fixed keys, so a
    /// value hashes the same way for the whole process.
    pub type KeyHasher = ahash::AHasher;

    /// Map for bookkeeping that lives for a single call.
    pub type ScratchMap<K, V> = rustc_hash::FxHashMap<K, V>;
}

#[cfg(feature = "std-hash")]
mod backend {
    pub type KeyHasher = std::collections::hash_map::DefaultHasher;

    pub type ScratchMap<K, V> = std::collections::HashMap<K, V>;
}

pub use backend::{KeyHasher, ScratchMap};

/// Hashes `value` with [`KeyHasher`].
#[inline]
pub fn hash_value<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = KeyHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}
