//! What-if reorder preview - layout with the dragged item removed and
//! reinserted at the pointer
//!
//! During a drag, every pointer move replays the greedy packing over the
//! base sequence (all items except the one being dragged). Before placing
//! each item the pointer is tested against the slot that item would occupy
//! next; the first match reserves that slot for the dragged item (a
//! placeholder of its height is spliced into the column totals) and records
//! the insertion index. A pointer that matches no slot inserts at the end
//! of the sequence.
//!
//! The slot hit-test has two geometries: a still-open top-row slot spans a
//! single column's horizontal band and a vertical band from the container
//! top bounded by the candidate item's height; a filled-column slot starts
//! at the shortest column's current running height and extends one item
//! height plus a gap below it. Both use the same horizontal band, which
//! reaches a full gap past the column's left edge and not at all past its
//! right edge. That asymmetry is inherited behavior and is pinned by tests;
//! do not even it out.

use std::collections::HashMap;

use crate::geometry::{column_x, Point};
use crate::layout::min_column;
use crate::store::ItemId;

/// Inputs for one preview pass
#[derive(Debug, Clone)]
pub struct PreviewParams<'a> {
    /// Ordered (id, height) sequence with the dragged item already removed
    pub base: &'a [(ItemId, f32)],
    /// Height of the dragged item, reserved as the insertion placeholder
    pub dragged_height: f32,
    /// Current pointer position in window coordinates
    pub pointer: Point,
    /// Container origin captured at press time
    pub origin: Point,
    pub column_count: usize,
    pub item_width: f32,
    pub gap: f32,
}

/// Result of one preview pass
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewResult {
    /// Provisional offsets for every base item
    pub offsets: HashMap<ItemId, Point>,
    /// Container height including the placeholder column
    pub container_height: f32,
    /// Where the dragged item lands in the base sequence on release
    pub insertion_index: usize,
    /// False when the pointer matched no slot and the index fell back to
    /// the end of the sequence
    pub pointer_in_slot: bool,
}

/// Pointer-in-column-band test shared by both slot geometries.
///
/// The band starts a full gap left of the column edge and ends flush with
/// its right edge, so a pointer in the gap between two columns always
/// resolves to the column on its right.
fn in_column_band(params: &PreviewParams, col: usize, px: f32) -> bool {
    let left_edge = params.origin.x + column_x(col, params.item_width, params.gap);
    left_edge - params.gap <= px && px <= left_edge + params.item_width
}

/// Hit-test an open top-row slot: column `col`, vertical band from the
/// container top to the candidate item's height.
fn hits_open_slot(params: &PreviewParams, col: usize, item_height: f32) -> bool {
    in_column_band(params, col, params.pointer.x)
        && params.origin.y <= params.pointer.y
        && params.pointer.y <= params.origin.y + item_height
}

/// Hit-test a filled-column slot: shortest column `col`, vertical band
/// starting at its running height and extending one item height plus a gap.
fn hits_filled_slot(params: &PreviewParams, col: usize, running: f32, item_height: f32) -> bool {
    in_column_band(params, col, params.pointer.x)
        && params.origin.y + running <= params.pointer.y
        && params.pointer.y <= params.origin.y + running + item_height + params.gap
}

/// Replay the packing over the base sequence, testing the pointer against
/// each upcoming slot. See the module docs for the walk's structure.
pub fn preview_layout(params: &PreviewParams) -> PreviewResult {
    let column_count = params.column_count.max(1);
    let mut heights: Vec<f32> = Vec::with_capacity(column_count);
    let mut offsets = HashMap::with_capacity(params.base.len());
    let mut inserted = false;
    let mut insertion_index = params.base.len();

    for (index, &(id, height)) in params.base.iter().enumerate() {
        if index + usize::from(inserted) < column_count {
            // This item still fits in the top row. Its open slot is the
            // next unseeded column, which equals its base index while no
            // placeholder has been spliced in.
            if !inserted && hits_open_slot(params, index, height) {
                heights.push(params.dragged_height);
                inserted = true;
                insertion_index = index;

                // Re-place the displaced item: one column to the right if
                // the top row still has room, otherwise into the shortest
                // column like any overflow item.
                if index + 1 < column_count {
                    let col = heights.len();
                    offsets.insert(
                        id,
                        Point::new(column_x(col, params.item_width, params.gap), 0.0),
                    );
                    heights.push(height);
                } else {
                    let (col, min_height) = min_column(&heights);
                    offsets.insert(
                        id,
                        Point::new(
                            column_x(col, params.item_width, params.gap),
                            min_height + params.gap,
                        ),
                    );
                    heights[col] += height + params.gap;
                }
            } else {
                let col = heights.len();
                offsets.insert(
                    id,
                    Point::new(column_x(col, params.item_width, params.gap), 0.0),
                );
                heights.push(height);
            }
        } else {
            // Top row is full; this item targets the shortest column
            let (col, min_height) = min_column(&heights);
            if !inserted && hits_filled_slot(params, col, min_height, height) {
                inserted = true;
                insertion_index = index;
                heights[col] += params.dragged_height + params.gap;

                let (col, min_height) = min_column(&heights);
                offsets.insert(
                    id,
                    Point::new(
                        column_x(col, params.item_width, params.gap),
                        min_height + params.gap,
                    ),
                );
                heights[col] += height + params.gap;
            } else {
                offsets.insert(
                    id,
                    Point::new(
                        column_x(col, params.item_width, params.gap),
                        min_height + params.gap,
                    ),
                );
                heights[col] += height + params.gap;
            }
        }
    }

    let container_height = heights.iter().copied().fold(0.0, f32::max);
    PreviewResult {
        offsets,
        container_height,
        insertion_index,
        pointer_in_slot: inserted,
    }
}
