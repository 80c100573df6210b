use crate::alignment::{Alignment, CrossAxisAlignment, HorizontalAlignment, VerticalAlignment};
use crate::arrangement::{Arrangement, LinearArrangement};
use crate::axis::Axis;
use crate::constraints::{AxisConstraint, Bound, SizeConstraint};
use crate::core::{
    Layout, LayoutItem, Measurable, MeasureResult, Placement, SingleChildLayout,
    SingleChildMeasureResult,
};
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;
use trellis_geometry::{EdgeInsets, Size};

/// Single-child layout that adopts the child's size and covers it exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Passthrough;

impl SingleChildLayout for Passthrough {
    fn layout(
        &self,
        constraint: SizeConstraint,
        child: &dyn Measurable,
    ) -> SingleChildMeasureResult {
        let size = child.measure(constraint);
        SingleChildMeasureResult::new(size, Placement::filling(size))
    }

    fn measure(&self, constraint: SizeConstraint, child: &dyn Measurable) -> Size {
        child.measure(constraint)
    }

    fn debug_name(&self) -> &str {
        "Passthrough"
    }
}

/// Leaf layout reporting a caller-supplied size.
///
/// The size is returned verbatim; the incoming constraint never clamps it.
#[derive(Clone)]
pub enum IntrinsicLayout {
    Fixed(Size),
    Computed(Rc<dyn Fn(SizeConstraint) -> Size>),
}

impl IntrinsicLayout {
    pub fn fixed(size: Size) -> Self {
        IntrinsicLayout::Fixed(size)
    }

    pub fn computed<F>(measure: F) -> Self
    where
        F: Fn(SizeConstraint) -> Size + 'static,
    {
        IntrinsicLayout::Computed(Rc::new(measure))
    }

    fn size_for(&self, constraint: SizeConstraint) -> Size {
        match self {
            IntrinsicLayout::Fixed(size) => *size,
            IntrinsicLayout::Computed(measure) => measure(constraint),
        }
    }
}

impl fmt::Debug for IntrinsicLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntrinsicLayout::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            IntrinsicLayout::Computed(_) => f.write_str("Computed"),
        }
    }
}

impl Layout for IntrinsicLayout {
    type Traits = ();

    fn layout(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> MeasureResult {
        assert!(
            items.is_empty(),
            "intrinsic layout hosts no children, got {}",
            items.len()
        );
        MeasureResult::leaf(self.size_for(constraint))
    }

    fn debug_name(&self) -> &str {
        "IntrinsicLayout"
    }
}

/// Per-child traits for [`FlexLayout`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlexParentData {
    /// Share of the remaining main-axis space. Zero means the child wraps its content.
    pub weight: f32,

    /// Tight main-axis constraint for weighted children when true, loose otherwise.
    pub fill: bool,
}

impl FlexParentData {
    pub fn new(weight: f32, fill: bool) -> Self {
        Self { weight, fill }
    }

    pub fn weighted(weight: f32) -> Self {
        Self::new(weight, true)
    }

    pub fn has_weight(&self) -> bool {
        self.weight > 0.0
    }
}

/// Linear layout along one axis with optional weighted distribution.
///
/// - Unweighted children are measured first with loose constraints.
/// - With a bounded main axis, the space they leave is split between weighted
///   children in proportion to their weights.
/// - With an unbounded main axis, weights are ignored.
/// - When children overflow the container, arrangement falls back to `Start`.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLayout {
    pub axis: Axis,
    pub main_axis_arrangement: LinearArrangement,
    pub cross_axis_alignment: CrossAxisAlignment,
}

impl FlexLayout {
    pub fn new(
        axis: Axis,
        main_axis_arrangement: LinearArrangement,
        cross_axis_alignment: CrossAxisAlignment,
    ) -> Self {
        Self {
            axis,
            main_axis_arrangement,
            cross_axis_alignment,
        }
    }

    pub fn row(
        horizontal_arrangement: LinearArrangement,
        vertical_alignment: VerticalAlignment,
    ) -> Self {
        Self::new(
            Axis::Horizontal,
            horizontal_arrangement,
            vertical_alignment.into(),
        )
    }

    pub fn column(
        vertical_arrangement: LinearArrangement,
        horizontal_alignment: HorizontalAlignment,
    ) -> Self {
        Self::new(
            Axis::Vertical,
            vertical_arrangement,
            horizontal_alignment.into(),
        )
    }

    fn child_constraint(&self, main: AxisConstraint, cross: AxisConstraint) -> SizeConstraint {
        SizeConstraint::UNCONSTRAINED
            .with_axis(self.axis, main)
            .with_axis(self.axis.cross_axis(), cross)
    }

    fn cross_child_constraint(&self, cross: AxisConstraint) -> AxisConstraint {
        match (self.cross_axis_alignment, cross.max()) {
            (CrossAxisAlignment::Stretch, Bound::AtMost(max)) => AxisConstraint::exactly(max),
            _ => cross.loosen(),
        }
    }
}

impl Layout for FlexLayout {
    type Traits = FlexParentData;

    fn layout(
        &self,
        constraint: SizeConstraint,
        items: &[LayoutItem<'_, FlexParentData>],
    ) -> MeasureResult {
        if items.is_empty() {
            return MeasureResult::leaf(constraint.constrain(Size::ZERO));
        }

        let axis = self.axis;
        let main = constraint.axis(axis);
        let cross = constraint.axis(axis.cross_axis());
        let cross_child = self.cross_child_constraint(cross);
        let total_spacing = self.main_axis_arrangement.total_spacing(items.len());
        let loose = self.child_constraint(main.loosen(), cross_child);

        let mut sizes: SmallVec<[Size; 8]> = SmallVec::from_elem(Size::ZERO, items.len());
        let mut fixed_main = 0.0_f32;
        let mut weighted: SmallVec<[usize; 8]> = SmallVec::new();

        for (index, item) in items.iter().enumerate() {
            if item.traits.has_weight() && main.is_bounded() {
                weighted.push(index);
                continue;
            }
            let size = item.measure(loose);
            fixed_main += axis.main(size);
            sizes[index] = size;
        }

        if let Some(max_main) = main.max().value() {
            let remaining = (max_main - fixed_main - total_spacing).max(0.0);
            let total_weight: f32 = weighted.iter().map(|&i| items[i].traits.weight).sum();

            for &index in &weighted {
                let data = items[index].traits;
                let allocated = if total_weight > 0.0 {
                    remaining * (data.weight / total_weight)
                } else {
                    0.0
                };
                let main_constraint = if data.fill {
                    AxisConstraint::exactly(allocated)
                } else {
                    AxisConstraint::at_most(allocated)
                };
                let child_constraint = self.child_constraint(main_constraint, cross_child);
                sizes[index] = items[index].measure(child_constraint);
            }
        }

        let main_sizes: SmallVec<[f32; 8]> = sizes.iter().map(|&size| axis.main(size)).collect();
        let total_main = main_sizes.iter().sum::<f32>() + total_spacing;
        let max_cross = sizes
            .iter()
            .map(|&size| axis.cross(size))
            .fold(0.0, f32::max);

        let container_main = main.constrain(total_main);
        let container_cross = cross.constrain(max_cross);

        let arrangement = if total_main > container_main {
            LinearArrangement::Start
        } else {
            self.main_axis_arrangement
        };
        let mut positions: SmallVec<[f32; 8]> = SmallVec::from_elem(0.0, items.len());
        arrangement.arrange(container_main, &main_sizes, &mut positions);

        let placements = sizes
            .iter()
            .zip(positions.iter())
            .map(|(&size, &main_pos)| {
                let cross_pos = self
                    .cross_axis_alignment
                    .align(container_cross, axis.cross(size));
                Placement::new(axis.point(main_pos, cross_pos), size)
            })
            .collect();

        MeasureResult::new(axis.size(container_main, container_cross), placements)
    }

    fn debug_name(&self) -> &str {
        match self.axis {
            Axis::Horizontal => "Row (Flex)",
            Axis::Vertical => "Column (Flex)",
        }
    }
}

/// Overlays children on top of each other, sized to the largest one.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    pub content_alignment: Alignment,
    pub propagate_min_constraints: bool,
}

impl OverlayLayout {
    pub fn new(content_alignment: Alignment, propagate_min_constraints: bool) -> Self {
        Self {
            content_alignment,
            propagate_min_constraints,
        }
    }
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self::new(Alignment::TOP_START, false)
    }
}

impl Layout for OverlayLayout {
    type Traits = ();

    fn layout(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> MeasureResult {
        let child_constraint = if self.propagate_min_constraints {
            constraint
        } else {
            constraint.loosen()
        };

        let sizes: SmallVec<[Size; 8]> = items
            .iter()
            .map(|item| item.measure(child_constraint))
            .collect();
        let largest = sizes.iter().fold(Size::ZERO, |acc, size| {
            Size::new(acc.width.max(size.width), acc.height.max(size.height))
        });
        let size = constraint.constrain(largest);

        let placements = sizes
            .iter()
            .map(|&child| Placement::new(self.content_alignment.position(size, child), child))
            .collect();

        MeasureResult::new(size, placements)
    }

    fn debug_name(&self) -> &str {
        "OverlayLayout"
    }
}

/// Rule narrowing one axis of a [`ConstrainedSize`] wrapper.
///
/// Every rule but `Absolute` keeps the result inside the incoming constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SizeRule {
    /// Keep the incoming constraint and the child's size.
    #[default]
    Unconstrained,
    AtMost(f32),
    AtLeast(f32),
    Within(f32, f32),
    /// Exactly this extent, whatever the child or the incoming constraint says.
    Absolute(f32),
}

impl SizeRule {
    fn narrow(&self, axis: AxisConstraint) -> AxisConstraint {
        match *self {
            SizeRule::Unconstrained | SizeRule::AtLeast(_) => axis,
            SizeRule::AtMost(max) | SizeRule::Within(_, max) => axis.cap(max),
            SizeRule::Absolute(value) => AxisConstraint::exactly(value),
        }
    }

    /// Final extent for a child that measured `child` under `axis`.
    fn resolve(&self, axis: AxisConstraint, child: f32) -> f32 {
        let preferred = match *self {
            SizeRule::Unconstrained => child,
            SizeRule::AtMost(max) => child.min(max),
            SizeRule::AtLeast(min) => child.max(min),
            SizeRule::Within(min, max) => child.max(min).min(max),
            SizeRule::Absolute(value) => return value,
        };
        axis.constrain(preferred)
    }
}

/// Single-child wrapper that narrows the constraint on either axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstrainedSize {
    pub width: SizeRule,
    pub height: SizeRule,
}

impl ConstrainedSize {
    pub fn new(width: SizeRule, height: SizeRule) -> Self {
        Self { width, height }
    }

    pub fn absolute(size: Size) -> Self {
        Self::new(SizeRule::Absolute(size.width), SizeRule::Absolute(size.height))
    }
}

impl SingleChildLayout for ConstrainedSize {
    fn layout(
        &self,
        constraint: SizeConstraint,
        child: &dyn Measurable,
    ) -> SingleChildMeasureResult {
        let narrowed = SizeConstraint::new(
            self.width.narrow(constraint.width()),
            self.height.narrow(constraint.height()),
        );
        let measured = child.measure(narrowed);
        let size = Size::new(
            self.width.resolve(constraint.width(), measured.width),
            self.height.resolve(constraint.height(), measured.height),
        );
        SingleChildMeasureResult::new(size, Placement::filling(size))
    }

    fn debug_name(&self) -> &str {
        "ConstrainedSize"
    }
}

/// Single-child wrapper that pads its child by fixed insets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Inset {
    pub insets: EdgeInsets,
}

impl Inset {
    pub fn new(insets: EdgeInsets) -> Self {
        Self { insets }
    }

    pub fn uniform(all: f32) -> Self {
        Self::new(EdgeInsets::uniform(all))
    }
}

impl SingleChildLayout for Inset {
    fn layout(
        &self,
        constraint: SizeConstraint,
        child: &dyn Measurable,
    ) -> SingleChildMeasureResult {
        let child_size = child.measure(constraint.deflate(self.insets));
        let size = Size::new(
            child_size.width + self.insets.horizontal_sum(),
            child_size.height + self.insets.vertical_sum(),
        );
        SingleChildMeasureResult::new(
            size,
            Placement::at(self.insets.left, self.insets.top, child_size),
        )
    }

    fn debug_name(&self) -> &str {
        "Inset"
    }
}

#[cfg(test)]
#[path = "tests/policies_tests.rs"]
mod tests;
