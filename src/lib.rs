//! Mason - absolute-positioned masonry layout with drag-to-reorder
//!
//! This crate arranges fixed-width, variable-height items into equal-width
//! columns by computing per-item (x, y) offsets, and optionally lets the
//! user drag an item to a new slot with a live preview of the reflow.
//!
//! The crate never touches a rendering surface directly. Measurement and
//! paint realization go through the [`Surface`] trait implemented by the
//! host; the `winit` feature (on by default) adds an adapter that maps
//! winit window events onto the crate's pointer events.

pub mod config;
pub mod debounce;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod masonry;
pub mod reorder;
pub mod store;
pub mod surface;
#[cfg(feature = "winit")]
pub mod winit_adapter;

// Re-export commonly used types
pub use config::MasonryConfig;
pub use error::MasonryError;
pub use geometry::{Point, Rect, Size};
pub use input::{EventResult, PointerButton, PointerEvent};
pub use masonry::Masonry;
pub use store::{ItemId, PositionStore};
pub use surface::{ContainerMetrics, Surface};
