//! Drag session state
//!
//! A session exists only between pointer-down and pointer-up (or cancel).
//! It starts below the drag threshold so that a plain click never disturbs
//! the layout, and is promoted to a real drag once the pointer has moved
//! more than [`DRAG_THRESHOLD`] on either axis.

use crate::geometry::Point;
use crate::store::ItemId;

/// Minimum pointer displacement (px, either axis) separating a drag from a
/// click. Consumers bind click handlers to the same items, so staying inert
/// below this threshold is a correctness requirement.
pub const DRAG_THRESHOLD: f32 = 6.0;

/// Everything captured at pointer-down that the drag needs later
#[derive(Debug, Clone)]
pub struct DragSession {
    /// The item under the pointer at press time
    pub item: ItemId,
    /// Pointer position at press time, for the threshold test
    pub start: Point,
    /// Offset from the pointer to the item's top-left corner
    pub grab_offset: Point,
    /// Container origin captured at press time
    pub origin: Point,
    /// Column count in effect for the whole session
    pub column_count: usize,
    /// Last known provisional insertion index
    pub insertion_index: usize,
}

/// The drag controller's state machine
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No pointer is down
    #[default]
    Idle,
    /// Pointer is down but has not crossed the drag threshold
    Pressed(DragSession),
    /// Threshold crossed; every move reflows the preview
    Dragging(DragSession),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// The active session, in either pressed or dragging state
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Pressed(session) | DragState::Dragging(session) => Some(session),
        }
    }
}

/// True once the pointer has moved far enough from `start` to count as a
/// drag rather than a click. Strictly greater on either axis.
pub fn threshold_crossed(start: Point, current: Point) -> bool {
    (current.x - start.x).abs() > DRAG_THRESHOLD || (current.y - start.y).abs() > DRAG_THRESHOLD
}
