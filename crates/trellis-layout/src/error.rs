use std::fmt;

/// Error returned when an axis constraint cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstraintError {
    /// The upper bound is below the lower bound, negative, or NaN.
    InvalidConstraint { min: f32, max: f32 },
    /// The lower bound is negative, NaN, or infinite.
    InvalidMinimum { min: f32 },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::InvalidConstraint { min, max } => {
                write!(f, "invalid constraint: minimum {min} exceeds maximum {max}")
            }
            ConstraintError::InvalidMinimum { min } => {
                write!(f, "invalid constraint: minimum {min} must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for ConstraintError {}
