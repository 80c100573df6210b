//! Assertion utilities for layout tests

use trellis_geometry::{Rect, Size};
use trellis_layout::{
    AxisConstraint, Bound, ElementContent, Layout, LayoutItem, SizeConstraint,
};

/// Constraints covering tight, loose, partially and fully unbounded cases.
pub fn sample_constraints() -> Vec<SizeConstraint> {
    vec![
        SizeConstraint::UNCONSTRAINED,
        SizeConstraint::at_most(Size::new(10.0, 10.0)),
        SizeConstraint::at_most(Size::new(200.0, 100.0)),
        SizeConstraint::tight(Size::new(50.0, 20.0)),
        SizeConstraint::tight(Size::ZERO),
        SizeConstraint::loose(Bound::AtMost(100.0), Bound::Unbounded),
        SizeConstraint::loose(Bound::Unbounded, Bound::AtMost(40.0)),
        SizeConstraint::new(
            AxisConstraint::new(30.0, 120.0).expect("valid width range"),
            AxisConstraint::new(5.0, Bound::Unbounded).expect("valid height range"),
        ),
    ]
}

/// Assert that measuring a node agrees with the size reported by evaluating it.
pub fn assert_measure_consistent(content: &ElementContent, constraints: &[SizeConstraint]) {
    for &constraint in constraints {
        let measured = content.measure(constraint);
        let evaluated = content.evaluate(constraint).size();
        assert_eq!(
            measured,
            evaluated,
            "`{}` measured {:?} but evaluated {:?} under {:?}",
            content.layout_name(),
            measured,
            evaluated,
            constraint
        );
    }
}

/// Assert that a layout's measure-only path agrees with its full path and
/// that it places every item.
pub fn assert_layout_consistent<L: Layout>(
    layout: &L,
    items: &[LayoutItem<'_, L::Traits>],
    constraints: &[SizeConstraint],
) {
    for &constraint in constraints {
        let result = layout.layout(constraint, items);
        assert_eq!(
            layout.measure(constraint, items),
            result.size,
            "`{}` measure/layout disagree under {:?}",
            layout.debug_name(),
            constraint
        );
        assert_eq!(
            result.placements.len(),
            items.len(),
            "`{}` placed {} of {} items under {:?}",
            layout.debug_name(),
            result.placements.len(),
            items.len(),
            constraint
        );
    }
}

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_size_approx_eq(actual: Size, expected: Size, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.width, expected.width, tolerance, &format!("{msg} - width"));
    assert_approx_eq(actual.height, expected.height, tolerance, &format!("{msg} - height"));
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{msg} - x"));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{msg} - y"));
    assert_size_approx_eq(actual.size(), expected.size(), tolerance, msg);
}
