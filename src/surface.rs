//! The surface collaborator - measurement in, paint commands out
//!
//! The engine never owns a rendering surface. The host implements
//! [`Surface`] over whatever it draws with (a DOM-like scene graph, a
//! retained widget tree, a test double) and the engine talks to it in both
//! directions: reading current geometry, and writing computed offsets.

use crate::geometry::{Point, Size};
use crate::store::ItemId;

/// Container geometry as currently rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    /// Inner width available for columns
    pub width: f32,
    /// Top-left corner of the container in window coordinates
    pub origin: Point,
}

/// Host-implemented view of the layout surface.
///
/// `apply_*` calls are side-effecting but order-insensitive within one
/// pass; the engine collects every measurement it needs before issuing any
/// of them, so a failed pass writes nothing.
pub trait Surface {
    /// The items to lay out, in document order, keyed by their stable
    /// caller-assigned identifiers. Duplicates are a configuration error.
    fn items(&self) -> Vec<ItemId>;

    /// Current rendered size of an item, or `None` if it has disappeared
    /// from the surface.
    fn measure(&self, item: ItemId) -> Option<Size>;

    fn measure_container(&self) -> ContainerMetrics;

    /// Position an item at `offset` relative to the container origin
    fn apply_offset(&mut self, item: ItemId, offset: Point);

    /// Resize the container to enclose all columns
    fn apply_container_height(&mut self, height: f32);

    /// Toggle the dragged item's elevated visual state: raised z-order and
    /// suspended position transition while lifted, restored (with the fixed
    /// linear transition) when dropped. Default is a no-op for surfaces
    /// without such a notion.
    fn set_lifted(&mut self, _item: ItemId, _lifted: bool) {}
}
