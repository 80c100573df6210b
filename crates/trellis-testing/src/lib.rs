//! Testing utilities for Trellis
//!
//! Mock measurables with known sizes, a standard grid of constraints, and
//! assertions for the invariants every layout must uphold.

pub mod assertions;
pub mod mock;

pub use assertions::*;
pub use mock::*;
