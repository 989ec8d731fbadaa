//! Pointer input events and dispatch results
//!
//! Mouse and touch input map onto the same small event vocabulary; the
//! `winit` feature ships an adapter that does this for winit window events.
//! Hosts with other input sources construct [`PointerEvent`]s directly.

use crate::geometry::Point;

/// Which pointer button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, or any touch contact
    Primary,
    /// Right mouse button
    Secondary,
    Middle,
}

/// A pointer event in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button press or touch start
    Down { pos: Point, button: PointerButton },
    /// Pointer motion, with or without a button held
    Move { pos: Point },
    /// Button release or touch end
    Up { pos: Point },
    /// The session was abandoned without a matching release (e.g. touch
    /// cancellation or the host detaching mid-drag)
    Cancel,
}

/// What a dispatched pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not for us (wrong button, no item under the pointer,
    /// dragging disabled)
    Ignored,
    /// Press captured over an item; waiting for the drag threshold
    Pressed,
    /// Drag in progress; provisional offsets were applied
    Previewed,
    /// Released below the threshold - a click, nothing moved
    Clicked,
    /// Released after dragging - the order was committed
    Committed,
    /// Session cancelled without a commit
    Cancelled,
}
