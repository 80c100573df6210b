use trellis_geometry::{Point, Size};

/// Primary axis of a linear layout.
///
/// `FlexLayout` lays children out along the main axis and aligns them on the
/// cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right; cross axis runs top to bottom.
    Horizontal,
    /// Top to bottom; cross axis runs left to right.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub fn cross(self, size: Size) -> f32 {
        self.cross_axis().main(size)
    }

    /// Builds a size from main/cross extents.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Builds a point from main/cross offsets.
    #[inline]
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }
}
