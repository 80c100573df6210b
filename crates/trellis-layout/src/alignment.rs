//! Alignment utilities for positioning content

use trellis_geometry::{Point, Size};

/// Alignment across both axes used for positioning content within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);

    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );

    pub const BOTTOM_END: Self = Self::new(HorizontalAlignment::End, VerticalAlignment::Bottom);

    /// Offset of a `child` of the given size inside `container`.
    pub fn position(&self, container: Size, child: Size) -> Point {
        Point::new(
            self.horizontal.align(container.width, child.width),
            self.vertical.align(container.height, child.height),
        )
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TOP_START
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Start,
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    pub fn align(&self, available: f32, child: f32) -> f32 {
        CrossAxisAlignment::from(*self).align(available, child)
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    pub fn align(&self, available: f32, child: f32) -> f32 {
        CrossAxisAlignment::from(*self).align(available, child)
    }
}

/// Axis-agnostic alignment, interpreted against the cross axis of a linear layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    /// Child is measured tight to the container's cross extent.
    Stretch,
}

impl CrossAxisAlignment {
    /// Offset on the cross axis. Never negative, so oversized children stick to the start.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0.0,
            CrossAxisAlignment::Center => ((available - child) / 2.0).max(0.0),
            CrossAxisAlignment::End => (available - child).max(0.0),
        }
    }
}

impl From<HorizontalAlignment> for CrossAxisAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Start => CrossAxisAlignment::Start,
            HorizontalAlignment::CenterHorizontally => CrossAxisAlignment::Center,
            HorizontalAlignment::End => CrossAxisAlignment::End,
        }
    }
}

impl From<VerticalAlignment> for CrossAxisAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Top => CrossAxisAlignment::Start,
            VerticalAlignment::CenterVertically => CrossAxisAlignment::Center,
            VerticalAlignment::Bottom => CrossAxisAlignment::End,
        }
    }
}
