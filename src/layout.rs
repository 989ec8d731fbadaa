//! Masonry placement - column resolution and greedy shortest-column packing
//!
//! The layout engine is a pure function from (ordered item heights, column
//! count, item width, gap) to per-item offsets plus the container height.
//! Column running heights exist only for the duration of a placement pass.

use std::collections::HashMap;

use crate::geometry::{column_x, Point};
use crate::store::ItemId;

/// Result of one placement pass
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Offset of each item relative to the container origin
    pub offsets: HashMap<ItemId, Point>,
    /// Height the container must take to enclose every column
    pub container_height: f32,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self {
            offsets: HashMap::new(),
            container_height: 0.0,
        }
    }
}

/// Number of columns that fit the container.
///
/// `floor((container_width + gap) / (item_width + gap))`, clamped to a
/// minimum of one: a container narrower than a single item still lays out
/// one column.
pub fn resolve_column_count(container_width: f32, item_width: f32, gap: f32) -> usize {
    let raw = ((container_width + gap) / (item_width + gap)).floor();
    if raw < 1.0 {
        tracing::trace!(
            "degenerate container width {}, clamping to one column",
            container_width
        );
        return 1;
    }
    raw as usize
}

/// Index and height of the shortest column. Ties go to the lowest index.
///
/// The first-occurrence tie-break is load-bearing: it makes layouts
/// reproducible and the drag preview must agree with it exactly.
pub(crate) fn min_column(heights: &[f32]) -> (usize, f32) {
    debug_assert!(!heights.is_empty());
    let mut col = 0;
    let mut min = heights[0];
    for (i, &h) in heights.iter().enumerate().skip(1) {
        if h < min {
            col = i;
            min = h;
        }
    }
    (col, min)
}

/// Place `items` (id, height) in order and return their offsets.
///
/// The first `column_count` items seed the top row, one per column, at
/// y = 0. Every later item goes to the currently shortest column at
/// y = running height + gap. With fewer items than columns the trailing
/// columns stay empty and do not affect the container height.
pub fn compute_layout(
    items: &[(ItemId, f32)],
    column_count: usize,
    item_width: f32,
    gap: f32,
) -> LayoutResult {
    let column_count = column_count.max(1);
    let mut heights: Vec<f32> = Vec::with_capacity(column_count);
    let mut offsets = HashMap::with_capacity(items.len());

    for &(id, height) in items {
        if heights.len() < column_count {
            // Top row: this item starts a new column
            let col = heights.len();
            offsets.insert(id, Point::new(column_x(col, item_width, gap), 0.0));
            heights.push(height);
        } else {
            let (col, min_height) = min_column(&heights);
            offsets.insert(
                id,
                Point::new(column_x(col, item_width, gap), min_height + gap),
            );
            heights[col] += height + gap;
        }
    }

    let container_height = heights.iter().copied().fold(0.0, f32::max);
    LayoutResult {
        offsets,
        container_height,
    }
}
