use super::*;

#[test]
fn rejects_minimum_above_maximum() {
    assert_eq!(
        AxisConstraint::new(20.0, 10.0),
        Err(ConstraintError::InvalidConstraint {
            min: 20.0,
            max: 10.0
        })
    );
}

#[test]
fn rejects_nan_and_negative_bounds() {
    assert!(matches!(
        AxisConstraint::new(0.0, f32::NAN),
        Err(ConstraintError::InvalidConstraint { .. })
    ));
    assert!(matches!(
        AxisConstraint::new(-1.0, 10.0),
        Err(ConstraintError::InvalidMinimum { .. })
    ));
    assert!(matches!(
        AxisConstraint::new(f32::INFINITY, Bound::Unbounded),
        Err(ConstraintError::InvalidMinimum { .. })
    ));
}

#[test]
fn accepts_equal_bounds_and_unbounded_maximum() {
    let tight = AxisConstraint::new(10.0, 10.0).expect("tight range");
    assert!(tight.is_tight());

    let open = AxisConstraint::new(5.0, f32::INFINITY).expect("open range");
    assert_eq!(open.max(), Bound::Unbounded);
    assert_eq!(open.min(), 5.0);
}

#[test]
fn maximum_substitutes_sentinel_for_unbounded_axes() {
    let constraint = SizeConstraint::new(AxisConstraint::at_most(100.0), AxisConstraint::UNBOUNDED);

    assert_eq!(constraint.maximum(), Size::new(100.0, UNBOUNDED_EXTENT));
    assert_eq!(constraint.max_height(), Bound::Unbounded);
    assert_eq!(constraint.max_height().value(), None);
    assert!(constraint.has_bounded_width());
    assert!(!constraint.has_bounded_height());
}

#[test]
fn constrain_clamps_into_range_and_leaves_unbounded_axes_alone() {
    let constraint = SizeConstraint::new(
        AxisConstraint::new(10.0, 50.0).unwrap(),
        AxisConstraint::UNBOUNDED,
    );

    assert_eq!(
        constraint.constrain(Size::new(5.0, 5000.0)),
        Size::new(10.0, 5000.0)
    );
    assert_eq!(
        constraint.constrain(Size::new(80.0, 0.0)),
        Size::new(50.0, 0.0)
    );
}

#[test]
fn tight_constraints_pin_both_axes() {
    let constraint = SizeConstraint::tight(Size::new(30.0, 40.0));
    assert!(constraint.is_tight());
    assert_eq!(constraint.minimum(), Size::new(30.0, 40.0));
    assert_eq!(constraint.maximum(), Size::new(30.0, 40.0));
    assert!(!constraint.loosen().is_tight());
}

#[test]
fn at_most_sanitizes_negative_and_infinite_input() {
    assert_eq!(AxisConstraint::at_most(-4.0).max(), Bound::AtMost(0.0));
    assert_eq!(AxisConstraint::at_most(f32::INFINITY).max(), Bound::Unbounded);
    assert_eq!(AxisConstraint::exactly(f32::NAN).min(), 0.0);
}

#[test]
fn deflate_never_goes_negative_and_keeps_unbounded() {
    let constraint = SizeConstraint::new(
        AxisConstraint::new(4.0, 10.0).unwrap(),
        AxisConstraint::UNBOUNDED,
    )
    .deflate(EdgeInsets::symmetric(3.0, 8.0));

    assert_eq!(constraint.min_width(), 0.0);
    assert_eq!(constraint.max_width(), Bound::AtMost(4.0));
    assert_eq!(constraint.max_height(), Bound::Unbounded);
}

#[test]
fn axis_accessors_follow_orientation() {
    let constraint = SizeConstraint::loose(Bound::AtMost(10.0), Bound::Unbounded);
    assert_eq!(constraint.axis(Axis::Horizontal).max(), Bound::AtMost(10.0));
    assert_eq!(constraint.axis(Axis::Vertical).max(), Bound::Unbounded);

    let swapped = constraint.with_axis(Axis::Vertical, AxisConstraint::exactly(7.0));
    assert!(swapped.height().is_tight());
    assert_eq!(swapped.width(), constraint.width());
}

#[test]
fn bound_min_prefers_the_finite_side() {
    assert_eq!(Bound::Unbounded.min(Bound::AtMost(3.0)), Bound::AtMost(3.0));
    assert_eq!(Bound::AtMost(5.0).min(Bound::AtMost(3.0)), Bound::AtMost(3.0));
    assert_eq!(Bound::Unbounded.min(Bound::Unbounded), Bound::Unbounded);
}

#[test]
fn error_messages_name_the_bounds() {
    let err = AxisConstraint::new(3.0, 1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid constraint: minimum 3 exceeds maximum 1"
    );
}

#[test]
fn cap_lowers_the_maximum_but_keeps_the_minimum() {
    let tight = AxisConstraint::exactly(50.0);
    assert_eq!(tight.cap(100.0), tight);
    assert_eq!(tight.cap(10.0), tight);

    let loose = AxisConstraint::new(5.0, Bound::Unbounded).unwrap();
    let capped = loose.cap(30.0);
    assert_eq!(capped.min(), 5.0);
    assert_eq!(capped.max(), Bound::AtMost(30.0));
    assert_eq!(AxisConstraint::at_most(20.0).cap(-1.0).max(), Bound::AtMost(0.0));
}
