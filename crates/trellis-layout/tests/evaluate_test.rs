use trellis_layout::prelude::*;
use trellis_layout::{
    Axis, CrossAxisAlignment, ElementType, FlexLayout, FlexParentData, Identifier, Inset, Key,
    OverlayLayout, Passthrough, SingleChild,
};
use trellis_testing::{
    assert_layout_consistent, assert_measure_consistent, assert_rect_approx_eq,
    sample_constraints, FixedMeasurable, RecordingMeasurable,
};

struct Label {
    width: f32,
}

impl Element for Label {
    fn content(&self) -> ElementContent {
        ElementContent::intrinsic(Size::new(self.width, 5.0))
    }
}

struct Icon;

impl Element for Icon {
    fn content(&self) -> ElementContent {
        ElementContent::intrinsic(Size::new(8.0, 8.0))
    }
}

fn label(width: f32) -> Label {
    Label { width }
}

#[test]
fn column_of_intrinsic_children_end_to_end() {
    let content = ElementContent::build(
        FlexLayout::column(LinearArrangement::Start, HorizontalAlignment::Start),
        |content| {
            content.add(&label(10.0)).add(&label(20.0)).add(&label(10.0));
        },
    );
    let constraint = SizeConstraint::loose(Bound::AtMost(100.0), Bound::Unbounded);

    let tree = content.evaluate(constraint);

    assert_eq!(tree.size(), Size::new(20.0, 15.0));
    let rects: Vec<Rect> = tree.children().iter().map(|child| child.rect).collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(0.0, 0.0, 10.0, 5.0),
            Rect::new(0.0, 5.0, 20.0, 5.0),
            Rect::new(0.0, 10.0, 10.0, 5.0),
        ]
    );
    for child in tree.children() {
        assert_eq!(child.layout.size(), child.rect.size());
        assert!(child.layout.children().is_empty());
    }
}

#[test]
fn every_stock_layout_measures_what_it_evaluates() {
    let constraints = sample_constraints();
    let contents = [
        ElementContent::intrinsic(Size::new(40.0, 20.0)),
        ElementContent::passthrough(&label(30.0)),
        ElementContent::single(Inset::uniform(3.0), &Icon),
        ElementContent::build(OverlayLayout::new(Alignment::CENTER, true), |content| {
            content.add(&Icon).add(&label(50.0));
        }),
        ElementContent::build(
            FlexLayout::row(LinearArrangement::SpaceBetween, VerticalAlignment::Bottom),
            |content| {
                content
                    .add(&Icon)
                    .add_with_traits(FlexParentData::weighted(2.0), &label(4.0))
                    .add(&label(12.0));
            },
        ),
        Column::new(ColumnSpec::new())
            .child(Padding::uniform(2.0, Icon))
            .child(Row::new(RowSpec::new()).child(Icon).child(Spacer::new(3.0, 1.0)))
            .content(),
    ];

    for content in &contents {
        assert_measure_consistent(content, &constraints);
    }
}

#[test]
fn raw_layouts_place_every_item() {
    let constraints = sample_constraints();
    let a = RecordingMeasurable::new(30.0, 12.0);
    let b = FixedMeasurable::new(15.0, 40.0);
    let c = RecordingMeasurable::new(500.0, 2.0);
    let contents: [&dyn Measurable; 3] = [&a, &b, &c];

    let flex_traits = [
        FlexParentData::default(),
        FlexParentData::weighted(1.0),
        FlexParentData::new(2.0, false),
    ];
    let flex_items = LayoutItem::zip(&flex_traits, &contents);
    for cross in [
        CrossAxisAlignment::Start,
        CrossAxisAlignment::Center,
        CrossAxisAlignment::End,
        CrossAxisAlignment::Stretch,
    ] {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let layout = FlexLayout::new(axis, LinearArrangement::SpaceEvenly, cross);
            assert_layout_consistent(&layout, &flex_items[..], &constraints);
        }
    }

    let unit_traits = [(), (), ()];
    let overlay_items = LayoutItem::zip(&unit_traits, &contents);
    assert_layout_consistent(&OverlayLayout::default(), &overlay_items[..], &constraints);

    let single_traits = [()];
    let single_contents: [&dyn Measurable; 1] = [&a];
    let single_items = LayoutItem::zip(&single_traits, &single_contents);
    assert_layout_consistent(&SingleChild::new(Passthrough), &single_items[..], &constraints);
    assert_layout_consistent(&SingleChild::new(Inset::uniform(4.0)), &single_items[..], &constraints);
}

#[test]
fn children_are_evaluated_at_their_placement_size() {
    let content = ElementContent::build(
        FlexLayout::new(
            Axis::Vertical,
            LinearArrangement::Start,
            CrossAxisAlignment::Stretch,
        ),
        |content| {
            content.add(&Row::new(RowSpec::new()).child(Icon));
        },
    );

    let tree = content.evaluate(SizeConstraint::at_most(Size::new(64.0, 64.0)));

    let row = &tree.children()[0];
    assert_eq!(row.rect, Rect::new(0.0, 0.0, 64.0, 8.0));
    assert_eq!(row.layout.size(), Size::new(64.0, 8.0));
}

#[test]
fn evaluation_is_deterministic() {
    let content = Column::new(ColumnSpec::new().vertical_arrangement(LinearArrangement::Center))
        .child(label(12.0))
        .weighted(1.0, Padding::uniform(1.0, Icon))
        .keyed("footer", label(7.0))
        .content();
    let constraint = SizeConstraint::at_most(Size::new(90.0, 70.0));

    let first = content.evaluate(constraint);
    let second = content.evaluate(constraint);

    assert_eq!(first, second);
    assert_eq!(first.absolute_frames(), second.absolute_frames());
}

#[test]
fn sibling_identity_follows_type_key_and_occurrence() {
    let content = ElementContent::build(
        FlexLayout::row(LinearArrangement::Start, VerticalAlignment::Top),
        |content| {
            content
                .add(&label(1.0))
                .add(&label(2.0))
                .add_keyed("x", FlexParentData::default(), &label(3.0))
                .add(&Icon)
                .add_keyed("x", FlexParentData::default(), &Icon);
        },
    );

    let tree = content.evaluate(SizeConstraint::UNCONSTRAINED);
    let ids: Vec<Identifier> = tree
        .children()
        .iter()
        .map(|child| child.identifier.clone())
        .collect();

    let label_type = ElementType::of::<Label>();
    let icon_type = ElementType::of::<Icon>();
    assert_eq!(
        ids,
        vec![
            Identifier::new(label_type, None, 0),
            Identifier::new(label_type, None, 1),
            Identifier::new(label_type, Some(Key::from("x")), 0),
            Identifier::new(icon_type, None, 0),
            Identifier::new(icon_type, Some(Key::from("x")), 0),
        ]
    );
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn inserting_a_sibling_of_another_type_keeps_identities() {
    let before = Row::new(RowSpec::new()).child(label(1.0)).child(label(2.0));
    let after = Row::new(RowSpec::new())
        .child(Icon)
        .child(label(1.0))
        .child(label(2.0));

    let ids = |tree: &LayoutTree| -> Vec<Identifier> {
        tree.children()
            .iter()
            .filter(|child| child.identifier.element_type() == ElementType::of::<Label>())
            .map(|child| child.identifier.clone())
            .collect()
    };
    let before = before.content().evaluate(SizeConstraint::UNCONSTRAINED);
    let after = after.content().evaluate(SizeConstraint::UNCONSTRAINED);

    assert_eq!(ids(&before), ids(&after));
}

#[test]
fn nested_identifiers_address_deep_nodes() {
    let content = Column::new(ColumnSpec::new())
        .child(Icon)
        .keyed(
            "body",
            Padding::uniform(
                5.0,
                Row::new(RowSpec::new()).child(label(6.0)).child(label(9.0)),
            ),
        )
        .content();

    let tree = content.evaluate(SizeConstraint::UNCONSTRAINED);

    let path = [
        Identifier::new(ElementType::of::<Padding>(), Some(Key::from("body")), 0),
        Identifier::new(ElementType::of::<Row>(), None, 0),
        Identifier::new(ElementType::of::<Label>(), None, 1),
    ];
    let frames = tree.absolute_frames();
    let (_, rect) = frames
        .iter()
        .find(|(p, _)| p.as_slice() == path)
        .expect("label reachable by path");

    // icon 8 tall, then 5 of padding; second label follows the 6 wide one
    assert_rect_approx_eq(*rect, Rect::new(11.0, 13.0, 9.0, 5.0), 1e-4, "second label");
    assert_eq!(tree.find(&path).map(|node| node.rect.origin()), Some(Point::new(6.0, 0.0)));
}

#[test]
fn recording_measurable_sees_deflated_constraint() {
    let child = RecordingMeasurable::new(100.0, 100.0);
    let result = trellis_layout::SingleChildLayout::layout(
        &Inset::uniform(10.0),
        SizeConstraint::at_most(Size::new(50.0, 40.0)),
        &child,
    );

    assert_eq!(child.call_count(), 1);
    assert_eq!(child.calls()[0].max_width(), Bound::AtMost(30.0));
    assert_eq!(child.calls()[0].max_height(), Bound::AtMost(20.0));
    assert_eq!(result.size, Size::new(50.0, 40.0));
}
