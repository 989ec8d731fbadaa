//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::HashMap;

use mason::{ContainerMetrics, ItemId, Masonry, MasonryConfig, Point, Size, Surface};

pub const ITEM_WIDTH: f32 = 100.0;
pub const GAP: f32 = 10.0;

/// In-memory surface double: items with fixed sizes, plus a record of every
/// offset, height, and lift toggle the engine applied.
#[derive(Debug, Clone)]
pub struct TestSurface {
    pub items: Vec<(ItemId, Size)>,
    pub container_width: f32,
    pub origin: Point,
    pub offsets: HashMap<ItemId, Point>,
    pub container_height: Option<f32>,
    pub lift_log: Vec<(ItemId, bool)>,
}

impl TestSurface {
    pub fn new(container_width: f32, origin: Point, heights: &[f32]) -> Self {
        let items = heights
            .iter()
            .enumerate()
            .map(|(i, &h)| (ItemId(i as u64 + 1), Size::new(ITEM_WIDTH, h)))
            .collect();
        Self {
            items,
            container_width,
            origin,
            offsets: HashMap::new(),
            container_height: None,
            lift_log: Vec::new(),
        }
    }

    /// Simulate an item disappearing from the surface without the order
    /// being told about it
    pub fn remove_item(&mut self, id: ItemId) {
        self.items.retain(|&(item, _)| item != id);
    }

    /// Inject a duplicate identifier (a host configuration mistake)
    pub fn duplicate_first_item(&mut self) {
        let first = self.items[0];
        self.items.push(first);
    }

    pub fn set_height(&mut self, id: ItemId, height: f32) {
        for (item, size) in &mut self.items {
            if *item == id {
                size.height = height;
            }
        }
    }
}

impl Surface for TestSurface {
    fn items(&self) -> Vec<ItemId> {
        self.items.iter().map(|&(id, _)| id).collect()
    }

    fn measure(&self, item: ItemId) -> Option<Size> {
        self.items
            .iter()
            .find(|&&(id, _)| id == item)
            .map(|&(_, size)| size)
    }

    fn measure_container(&self) -> ContainerMetrics {
        ContainerMetrics {
            width: self.container_width,
            origin: self.origin,
        }
    }

    fn apply_offset(&mut self, item: ItemId, offset: Point) {
        self.offsets.insert(item, offset);
    }

    fn apply_container_height(&mut self, height: f32) {
        self.container_height = Some(height);
    }

    fn set_lifted(&mut self, item: ItemId, lifted: bool) {
        self.lift_log.push((item, lifted));
    }
}

/// Engine over a test surface with the given container width and heights
pub fn test_masonry(container_width: f32, heights: &[f32]) -> Masonry<TestSurface> {
    let surface = TestSurface::new(container_width, Point::new(0.0, 0.0), heights);
    Masonry::new(MasonryConfig::new(ITEM_WIDTH), surface).expect("test surface should lay out")
}

/// Same, but draggable and with a non-zero container origin to exercise
/// coordinate translation
pub fn test_masonry_draggable(
    container_width: f32,
    origin: Point,
    heights: &[f32],
) -> Masonry<TestSurface> {
    let surface = TestSurface::new(container_width, origin, heights);
    let mut config = MasonryConfig::new(ITEM_WIDTH);
    config.draggable = true;
    Masonry::new(config, surface).expect("test surface should lay out")
}
