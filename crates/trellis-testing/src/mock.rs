//! Measurables with scripted behavior.

use std::cell::RefCell;
use trellis_geometry::Size;
use trellis_layout::{Measurable, SizeConstraint};

/// Reports the same size for every constraint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMeasurable {
    pub size: Size,
}

impl FixedMeasurable {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl Measurable for FixedMeasurable {
    fn measure(&self, _constraint: SizeConstraint) -> Size {
        self.size
    }
}

/// Clamps a preferred size into each constraint and records every call.
#[derive(Debug, Default)]
pub struct RecordingMeasurable {
    pub preferred: Size,
    calls: RefCell<Vec<SizeConstraint>>,
}

impl RecordingMeasurable {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Constraints this measurable was measured with, in call order.
    pub fn calls(&self) -> Vec<SizeConstraint> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Measurable for RecordingMeasurable {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.calls.borrow_mut().push(constraint);
        constraint.constrain(self.preferred)
    }
}
