//! Pure geometry data for Trellis
//!
//! Points, sizes, rectangles and edge insets used by the layout engine. The
//! engine treats these as an opaque algebra: it never interprets them beyond
//! the arithmetic exposed here.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
