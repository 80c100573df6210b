//! Arrangement strategies for distributing children along an axis

/// Distributes children along one axis.
pub trait Arrangement {
    /// Writes the leading offset of each child into `out_positions`.
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]);

    /// Fixed gap inserted between children regardless of available space.
    fn spacing(&self) -> f32 {
        0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LinearArrangement {
    /// Pack children at the leading edge.
    #[default]
    Start,
    /// Pack children so the last one touches the trailing edge.
    End,
    Center,
    /// Remaining space goes between children only.
    SpaceBetween,
    /// Remaining space goes around each child; edges get half a gap.
    SpaceAround,
    /// Remaining space is split into equal gaps, edges included.
    SpaceEvenly,
    /// Fixed gap between children, packed at the leading edge.
    SpacedBy(f32),
}

impl LinearArrangement {
    pub fn spaced_by(spacing: f32) -> Self {
        Self::SpacedBy(spacing)
    }

    /// Main-axis extent consumed by fixed spacing between `count` children.
    pub fn total_spacing(&self, count: usize) -> f32 {
        if count > 1 {
            self.spacing() * (count - 1) as f32
        } else {
            0.0
        }
    }

    fn fill_positions(start: f32, gap: f32, sizes: &[f32], out_positions: &mut [f32]) {
        let mut cursor = start;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + gap;
        }
    }
}

impl Arrangement for LinearArrangement {
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        if sizes.is_empty() {
            return;
        }

        let count = sizes.len() as f32;
        let remaining = total_size - sizes.iter().sum::<f32>();

        match *self {
            LinearArrangement::Start => Self::fill_positions(0.0, 0.0, sizes, out_positions),
            LinearArrangement::End => Self::fill_positions(remaining, 0.0, sizes, out_positions),
            LinearArrangement::Center => {
                Self::fill_positions(remaining / 2.0, 0.0, sizes, out_positions)
            }
            LinearArrangement::SpaceBetween => {
                let gap = if sizes.len() <= 1 {
                    0.0
                } else {
                    remaining / (count - 1.0)
                };
                Self::fill_positions(0.0, gap, sizes, out_positions);
            }
            LinearArrangement::SpaceAround => {
                let gap = remaining / count;
                Self::fill_positions(gap / 2.0, gap, sizes, out_positions);
            }
            LinearArrangement::SpaceEvenly => {
                let gap = remaining / (count + 1.0);
                Self::fill_positions(gap, gap, sizes, out_positions);
            }
            LinearArrangement::SpacedBy(spacing) => {
                Self::fill_positions(0.0, spacing.max(0.0), sizes, out_positions)
            }
        }
    }

    fn spacing(&self) -> f32 {
        match *self {
            LinearArrangement::SpacedBy(value) => value.max(0.0),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
