//! Centralized geometry helpers for layout and hit-testing
//!
//! This module provides a single source of truth for coordinate math shared
//! between the layout engine (placement) and the drag controller
//! (hit-testing). All functions here are pure and can be tested without a
//! rendering surface.

/// A point in window coordinates (device-independent pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rendered item
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rectangle for layout calculations and pointer hit-testing
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Horizontal offset of a column's left edge within the container.
///
/// Column `col` starts at `col * (item_width + gap)`; the container's own
/// origin is not included.
#[inline]
pub fn column_x(col: usize, item_width: f32, gap: f32) -> f32 {
    col as f32 * (item_width + gap)
}
