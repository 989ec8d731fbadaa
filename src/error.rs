//! Error types for layout and reorder operations

use thiserror::Error;

use crate::store::ItemId;

/// Errors surfaced to the host application.
///
/// A failed layout pass never applies partial positions: all measurements
/// are collected before any offset is written, so the previous valid layout
/// stays on screen when an error is returned.
#[derive(Debug, Error)]
pub enum MasonryError {
    /// Invalid or missing layout parameters. Fatal at initialization; the
    /// engine is never constructed with a bad configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The surface reported the same item identifier more than once.
    /// Identifier uniqueness is a configuration requirement.
    #[error("duplicate item identifier {0:?} reported by the surface")]
    DuplicateItem(ItemId),

    /// The position order references an item the surface can no longer
    /// measure (e.g., removed from the surface without updating the order).
    /// The current pass is abandoned.
    #[error("item {0:?} is in the position order but cannot be measured")]
    MissingItem(ItemId),
}
