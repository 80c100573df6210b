//! Layout contracts, content nodes and recursive evaluation for Trellis
//!
//! A [`ElementContent`] owns a layout strategy and its ordered children.
//! Evaluating it against a [`SizeConstraint`] produces a [`LayoutTree`]: the
//! node's size plus an identifier-tagged placement for every descendant.

mod alignment;
mod arrangement;
mod axis;
mod constraints;
mod content;
mod core;
mod error;
mod policies;
mod tree;
pub mod widgets;

pub use alignment::*;
pub use arrangement::*;
pub use axis::*;
pub use constraints::*;
pub use content::*;
pub use core::*;
pub use error::*;
pub use policies::*;
pub use tree::*;

pub use trellis_core::{ElementType, Identifier, Key};
pub use trellis_geometry::{EdgeInsets, Point, Rect, Size};

pub mod prelude {
    pub use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
    pub use crate::arrangement::LinearArrangement;
    pub use crate::constraints::{AxisConstraint, Bound, SizeConstraint};
    pub use crate::content::{Content, Element, ElementContent};
    pub use crate::core::{Layout, LayoutItem, Measurable, MeasureResult, Placement, SingleChildLayout};
    pub use crate::tree::{LayoutBox, LayoutTree};
    pub use crate::widgets::{Column, ColumnSpec, Overlay, Padding, Row, RowSpec, SizedBox, Spacer};
    pub use trellis_geometry::{Point, Rect, Size};
}
