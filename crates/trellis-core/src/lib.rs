//! Identity primitives and hashing backends for Trellis
//!
//! Children of a content node are labelled with an [`Identifier`] so that a
//! caller can correlate placements for the same child across two evaluations.

pub mod hash;
mod identity;

pub use identity::*;

pub mod prelude {
    pub use crate::identity::{assign_identifiers, ElementType, Identifier, Key};
}
