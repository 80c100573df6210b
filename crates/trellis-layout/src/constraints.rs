//! Layout constraints system

use crate::axis::Axis;
use crate::error::ConstraintError;
use trellis_geometry::{EdgeInsets, Size};

/// Finite stand-in for an unbounded axis when a concrete size is required.
pub const UNBOUNDED_EXTENT: f32 = 1.0e9;

/// Upper bound of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    AtMost(f32),
    Unbounded,
}

impl Bound {
    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, Bound::AtMost(_))
    }

    /// Returns the finite limit, or `None` when unbounded.
    #[inline]
    pub fn value(self) -> Option<f32> {
        match self {
            Bound::AtMost(max) => Some(max),
            Bound::Unbounded => None,
        }
    }

    /// Returns the finite limit, substituting [`UNBOUNDED_EXTENT`] when unbounded.
    #[inline]
    pub fn or_extent(self) -> f32 {
        self.value().unwrap_or(UNBOUNDED_EXTENT)
    }

    /// Caps `value` at this bound.
    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        match self {
            Bound::AtMost(max) => value.min(max),
            Bound::Unbounded => value,
        }
    }

    /// Shrinks a finite bound by `amount`, never below zero.
    pub fn saturating_sub(self, amount: f32) -> Self {
        match self {
            Bound::AtMost(max) => Bound::AtMost((max - amount).max(0.0)),
            Bound::Unbounded => Bound::Unbounded,
        }
    }

    /// The tighter of two bounds.
    pub fn min(self, other: Bound) -> Self {
        match (self, other) {
            (Bound::AtMost(a), Bound::AtMost(b)) => Bound::AtMost(a.min(b)),
            (Bound::AtMost(a), Bound::Unbounded) | (Bound::Unbounded, Bound::AtMost(a)) => {
                Bound::AtMost(a)
            }
            (Bound::Unbounded, Bound::Unbounded) => Bound::Unbounded,
        }
    }
}

impl From<f32> for Bound {
    fn from(value: f32) -> Self {
        if value == f32::INFINITY {
            Bound::Unbounded
        } else {
            Bound::AtMost(value)
        }
    }
}

/// Range of acceptable extents on a single axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConstraint {
    min: f32,
    max: Bound,
}

impl AxisConstraint {
    pub const UNBOUNDED: AxisConstraint = AxisConstraint {
        min: 0.0,
        max: Bound::Unbounded,
    };

    /// Creates a validated axis range.
    ///
    /// Fails when `min` is negative or not finite, or when a finite `max` is
    /// below `min` (NaN and negative maxima included).
    pub fn new(min: f32, max: impl Into<Bound>) -> Result<Self, ConstraintError> {
        if !min.is_finite() || min < 0.0 {
            return Err(ConstraintError::InvalidMinimum { min });
        }
        let max = max.into();
        if let Bound::AtMost(limit) = max {
            // written so that NaN fails as well
            if !(limit >= min) {
                return Err(ConstraintError::InvalidConstraint { min, max: limit });
            }
        }
        Ok(Self { min, max })
    }

    pub const fn unbounded() -> Self {
        Self::UNBOUNDED
    }

    /// Range `0..=max`. Negative or NaN input collapses to zero.
    pub fn at_most(max: f32) -> Self {
        Self {
            min: 0.0,
            max: match Bound::from(max) {
                Bound::AtMost(limit) => Bound::AtMost(limit.max(0.0)),
                Bound::Unbounded => Bound::Unbounded,
            },
        }
    }

    /// Range `0..=max` for an already validated bound.
    pub fn up_to(max: Bound) -> Self {
        match max {
            Bound::AtMost(limit) => Self::at_most(limit),
            Bound::Unbounded => Self::UNBOUNDED,
        }
    }

    /// Tight range admitting only `value`. Negative or non-finite input collapses to zero.
    pub fn exactly(value: f32) -> Self {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        Self {
            min: value,
            max: Bound::AtMost(value),
        }
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Bound {
        self.max
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.max.is_bounded()
    }

    #[inline]
    pub fn is_tight(&self) -> bool {
        self.max == Bound::AtMost(self.min)
    }

    /// Upper limit with [`UNBOUNDED_EXTENT`] substituted for an unbounded axis.
    #[inline]
    pub fn maximum(&self) -> f32 {
        self.max.or_extent()
    }

    /// Clamps `value` into this range.
    pub fn constrain(&self, value: f32) -> f32 {
        self.max.clamp(value.max(self.min))
    }

    /// Lowers the upper bound to `max`, never below the current minimum.
    pub fn cap(self, max: f32) -> Self {
        Self {
            max: self.max.min(Bound::AtMost(max.max(self.min))),
            ..self
        }
    }

    /// Same upper bound, lower bound reset to zero.
    pub fn loosen(self) -> Self {
        Self { min: 0.0, ..self }
    }

    /// Shrinks both bounds by `amount`, never below zero.
    pub fn deflate(self, amount: f32) -> Self {
        Self {
            min: (self.min - amount).max(0.0),
            max: self.max.saturating_sub(amount),
        }
    }
}

impl Default for AxisConstraint {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Width and height ranges used to bound measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeConstraint {
    width: AxisConstraint,
    height: AxisConstraint,
}

impl SizeConstraint {
    pub const UNCONSTRAINED: SizeConstraint = SizeConstraint {
        width: AxisConstraint::UNBOUNDED,
        height: AxisConstraint::UNBOUNDED,
    };

    pub const fn new(width: AxisConstraint, height: AxisConstraint) -> Self {
        Self { width, height }
    }

    pub const fn unconstrained() -> Self {
        Self::UNCONSTRAINED
    }

    /// Loose constraint bounded by `size` on both axes.
    pub fn at_most(size: Size) -> Self {
        Self::new(
            AxisConstraint::at_most(size.width),
            AxisConstraint::at_most(size.height),
        )
    }

    /// Loose constraint with explicit upper bounds.
    pub fn loose(width: Bound, height: Bound) -> Self {
        Self::new(AxisConstraint::up_to(width), AxisConstraint::up_to(height))
    }

    /// Constraint admitting exactly `size`.
    pub fn tight(size: Size) -> Self {
        Self::new(
            AxisConstraint::exactly(size.width),
            AxisConstraint::exactly(size.height),
        )
    }

    #[inline]
    pub fn width(&self) -> AxisConstraint {
        self.width
    }

    #[inline]
    pub fn height(&self) -> AxisConstraint {
        self.height
    }

    #[inline]
    pub fn min_width(&self) -> f32 {
        self.width.min
    }

    #[inline]
    pub fn min_height(&self) -> f32 {
        self.height.min
    }

    #[inline]
    pub fn max_width(&self) -> Bound {
        self.width.max
    }

    #[inline]
    pub fn max_height(&self) -> Bound {
        self.height.max
    }

    /// Lower bound of both axes.
    pub fn minimum(&self) -> Size {
        Size::new(self.width.min, self.height.min)
    }

    /// Upper bound of both axes, with [`UNBOUNDED_EXTENT`] standing in for
    /// unbounded ones.
    pub fn maximum(&self) -> Size {
        Size::new(self.width.maximum(), self.height.maximum())
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.width.is_tight() && self.height.is_tight()
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.width.is_bounded()
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.height.is_bounded()
    }

    /// Clamps `size` into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            self.width.constrain(size.width),
            self.height.constrain(size.height),
        )
    }

    pub fn with_width(self, width: AxisConstraint) -> Self {
        Self { width, ..self }
    }

    pub fn with_height(self, height: AxisConstraint) -> Self {
        Self { height, ..self }
    }

    /// Constraint along `axis`.
    pub fn axis(&self, axis: Axis) -> AxisConstraint {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Replaces the constraint along `axis`.
    pub fn with_axis(self, axis: Axis, constraint: AxisConstraint) -> Self {
        match axis {
            Axis::Horizontal => self.with_width(constraint),
            Axis::Vertical => self.with_height(constraint),
        }
    }

    /// Same upper bounds, lower bounds reset to zero.
    pub fn loosen(self) -> Self {
        Self::new(self.width.loosen(), self.height.loosen())
    }

    /// Shrinks the constraints by `insets`, as needed before measuring padded content.
    pub fn deflate(self, insets: EdgeInsets) -> Self {
        Self::new(
            self.width.deflate(insets.horizontal_sum()),
            self.height.deflate(insets.vertical_sum()),
        )
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
