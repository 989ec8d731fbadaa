//! The engine instance - layout, drag dispatch, resize debouncing
//!
//! One `Masonry` value owns one layout surface: its configuration, position
//! order, memoized column count, and (while a pointer is down) the drag
//! session. Several instances can coexist in a process; there is no global
//! state.

use std::time::Instant;

use crate::config::MasonryConfig;
use crate::debounce::ResizeDebouncer;
use crate::drag::{threshold_crossed, DragSession, DragState};
use crate::error::MasonryError;
use crate::geometry::{Point, Rect};
use crate::input::{EventResult, PointerButton, PointerEvent};
use crate::layout::{compute_layout, resolve_column_count, LayoutResult};
use crate::reorder::{preview_layout, PreviewParams};
use crate::store::{ItemId, PositionStore};
use crate::surface::Surface;

/// Callback invoked with the full new order after a drag commit
pub type OrderChangedHandler = Box<dyn FnMut(&[ItemId])>;

/// A masonry layout engine bound to one surface
pub struct Masonry<S: Surface> {
    config: MasonryConfig,
    surface: S,
    store: PositionStore,
    /// Memoized column count; `relayout(false)` short-circuits when the
    /// resolved count has not changed
    column_count: Option<usize>,
    /// Last applied layout, kept for pointer-down hit-testing
    last_layout: Option<LayoutResult>,
    drag: DragState,
    debouncer: ResizeDebouncer,
    on_order_changed: Option<OrderChangedHandler>,
}

impl<S: Surface> std::fmt::Debug for Masonry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Masonry")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("column_count", &self.column_count)
            .field("last_layout", &self.last_layout)
            .field("drag", &self.drag)
            .field("debouncer", &self.debouncer)
            .field(
                "on_order_changed",
                &self.on_order_changed.as_ref().map(|_| "<handler>"),
            )
            .finish()
    }
}

impl<S: Surface> Masonry<S> {
    /// Validate the configuration, collect the surface's items, and run the
    /// initial layout pass.
    pub fn new(config: MasonryConfig, surface: S) -> Result<Self, MasonryError> {
        config.validate()?;
        let store = PositionStore::new(surface.items())?;
        tracing::debug!(
            "initializing masonry surface: {} items, item_width {}, gap {}, draggable {}",
            store.len(),
            config.item_width,
            config.gap_size,
            config.draggable
        );

        let mut engine = Self {
            config,
            surface,
            store,
            column_count: None,
            last_layout: None,
            drag: DragState::Idle,
            debouncer: ResizeDebouncer::default(),
            on_order_changed: None,
        };
        engine.relayout(true)?;
        Ok(engine)
    }

    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The current authoritative order
    pub fn order(&self) -> &[ItemId] {
        self.store.order()
    }

    /// The memoized column count from the last layout pass
    pub fn column_count(&self) -> Option<usize> {
        self.column_count
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The provisional insertion index of the active drag, for hosts that
    /// draw drop indicators
    pub fn preview_insertion_index(&self) -> Option<usize> {
        match &self.drag {
            DragState::Dragging(session) => Some(session.insertion_index),
            _ => None,
        }
    }

    /// Register the commit callback. It fires at most once per drag
    /// session, synchronously, with the full new order.
    pub fn set_order_changed_handler(&mut self, handler: impl FnMut(&[ItemId]) + 'static) {
        self.on_order_changed = Some(Box::new(handler));
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Re-run column resolution and placement.
    ///
    /// With `force = false` the pass short-circuits when the resolved
    /// column count equals the memoized one - an optimization only; a
    /// forced pass over unchanged state produces identical offsets. Returns
    /// whether placement ran.
    pub fn relayout(&mut self, force: bool) -> Result<bool, MasonryError> {
        let container = self.surface.measure_container();
        let count =
            resolve_column_count(container.width, self.config.item_width, self.config.gap_size);

        if !force && self.column_count == Some(count) {
            tracing::trace!("column count {} unchanged, skipping relayout", count);
            return Ok(false);
        }

        let items = self.measured_items()?;
        let result = compute_layout(&items, count, self.config.item_width, self.config.gap_size);

        for (&id, &offset) in &result.offsets {
            self.surface.apply_offset(id, offset);
        }
        self.surface.apply_container_height(result.container_height);

        tracing::debug!(
            "applied layout: {} items in {} columns, container height {}",
            items.len(),
            count,
            result.container_height
        );
        self.column_count = Some(count);
        self.last_layout = Some(result);
        Ok(true)
    }

    /// Measure every item in store order. Collecting up front means a
    /// missing item aborts the pass before any offset is written.
    fn measured_items(&self) -> Result<Vec<(ItemId, f32)>, MasonryError> {
        self.store
            .order()
            .iter()
            .map(|&id| match self.surface.measure(id) {
                Some(size) => Ok((id, size.height)),
                None => {
                    tracing::warn!("layout pass abandoned: item {:?} cannot be measured", id);
                    Err(MasonryError::MissingItem(id))
                }
            })
            .collect()
    }

    /// Like `measured_items`, but with the dragged item removed - the base
    /// sequence of the what-if walk.
    fn measured_base(&self, dragged: ItemId) -> Result<Vec<(ItemId, f32)>, MasonryError> {
        self.store
            .order()
            .iter()
            .filter(|&&id| id != dragged)
            .map(|&id| match self.surface.measure(id) {
                Some(size) => Ok((id, size.height)),
                None => {
                    tracing::warn!("preview pass abandoned: item {:?} cannot be measured", id);
                    Err(MasonryError::MissingItem(id))
                }
            })
            .collect()
    }

    // ========================================================================
    // Resize debouncing
    // ========================================================================

    /// Record a resize signal. The forced relayout fires from `pump_resize`
    /// once the burst has been quiet for the debounce window.
    pub fn notify_resize(&mut self) {
        self.debouncer.notify();
    }

    pub fn notify_resize_at(&mut self, now: Instant) {
        self.debouncer.notify_at(now);
    }

    /// Deadline the host should wake up at to pump the debouncer
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Fire the debounced relayout if its window has elapsed. While a drag
    /// session is active the deadline is left pending so the relayout runs
    /// after the session ends instead of fighting the preview.
    pub fn pump_resize_at(&mut self, now: Instant) -> Result<bool, MasonryError> {
        if !self.drag.is_idle() {
            return Ok(false);
        }
        if self.debouncer.fire_at(now) {
            self.relayout(true)
        } else {
            Ok(false)
        }
    }

    pub fn pump_resize(&mut self) -> Result<bool, MasonryError> {
        self.pump_resize_at(Instant::now())
    }

    // ========================================================================
    // Pointer dispatch
    // ========================================================================

    /// Feed one pointer event through the drag state machine.
    ///
    /// A no-op unless the surface was configured as draggable.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<EventResult, MasonryError> {
        if !self.config.draggable {
            return Ok(EventResult::Ignored);
        }
        match event {
            PointerEvent::Down { pos, button } => self.on_pointer_down(pos, button),
            PointerEvent::Move { pos } => self.on_pointer_move(pos),
            PointerEvent::Up { pos } => self.on_pointer_up(pos),
            PointerEvent::Cancel => self.cancel_drag(),
        }
    }

    fn on_pointer_down(
        &mut self,
        pos: Point,
        button: PointerButton,
    ) -> Result<EventResult, MasonryError> {
        if button != PointerButton::Primary || !self.drag.is_idle() {
            return Ok(EventResult::Ignored);
        }

        let container = self.surface.measure_container();
        let Some((item, rect)) = self.item_at(pos, container.origin)? else {
            return Ok(EventResult::Ignored);
        };

        let session = DragSession {
            item,
            start: pos,
            grab_offset: Point::new(pos.x - rect.x, pos.y - rect.y),
            origin: container.origin,
            column_count: self.column_count.unwrap_or_else(|| {
                resolve_column_count(container.width, self.config.item_width, self.config.gap_size)
            }),
            insertion_index: self.store.index_of(item).unwrap_or(0),
        };
        tracing::debug!("press captured on {:?} at ({}, {})", item, pos.x, pos.y);

        self.surface.set_lifted(item, true);
        self.drag = DragState::Pressed(session);
        Ok(EventResult::Pressed)
    }

    /// Which item the pointer is over, tested against the last applied
    /// layout and each item's current height.
    fn item_at(&self, pos: Point, origin: Point) -> Result<Option<(ItemId, Rect)>, MasonryError> {
        let Some(layout) = &self.last_layout else {
            return Ok(None);
        };
        for &id in self.store.order() {
            let Some(offset) = layout.offsets.get(&id) else {
                continue;
            };
            let size = self
                .surface
                .measure(id)
                .ok_or(MasonryError::MissingItem(id))?;
            let rect = Rect::new(
                origin.x + offset.x,
                origin.y + offset.y,
                self.config.item_width,
                size.height,
            );
            if rect.contains(pos.x, pos.y) {
                return Ok(Some((id, rect)));
            }
        }
        Ok(None)
    }

    fn on_pointer_move(&mut self, pos: Point) -> Result<EventResult, MasonryError> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => Ok(EventResult::Ignored),
            DragState::Pressed(session) => {
                // Below the threshold a move is a strict no-op, so a click
                // never perturbs the layout
                if !threshold_crossed(session.start, pos) {
                    self.drag = DragState::Pressed(session);
                    return Ok(EventResult::Ignored);
                }
                tracing::debug!("drag threshold crossed for {:?}", session.item);
                self.drag = DragState::Dragging(session);
                self.preview_at(pos)
            }
            DragState::Dragging(session) => {
                self.drag = DragState::Dragging(session);
                self.preview_at(pos)
            }
        }
    }

    /// One preview step: dragged item follows the pointer, every other item
    /// gets its what-if offset, and the session records the provisional
    /// insertion index.
    fn preview_at(&mut self, pos: Point) -> Result<EventResult, MasonryError> {
        let DragState::Dragging(session) = &self.drag else {
            return Ok(EventResult::Ignored);
        };
        let session = session.clone();

        let dragged_height = self
            .surface
            .measure(session.item)
            .ok_or(MasonryError::MissingItem(session.item))?
            .height;
        let base = self.measured_base(session.item)?;
        let preview = preview_layout(&PreviewParams {
            base: &base,
            dragged_height,
            pointer: pos,
            origin: session.origin,
            column_count: session.column_count,
            item_width: self.config.item_width,
            gap: self.config.gap_size,
        });

        let follow = Point::new(
            pos.x - session.grab_offset.x - session.origin.x,
            pos.y - session.grab_offset.y - session.origin.y,
        );
        self.surface.apply_offset(session.item, follow);
        for (&id, &offset) in &preview.offsets {
            self.surface.apply_offset(id, offset);
        }
        self.surface.apply_container_height(preview.container_height);

        tracing::trace!(
            "preview step for {:?}: insertion index {}, in slot {}",
            session.item,
            preview.insertion_index,
            preview.pointer_in_slot
        );
        if let DragState::Dragging(session) = &mut self.drag {
            session.insertion_index = preview.insertion_index;
        }
        Ok(EventResult::Previewed)
    }

    fn on_pointer_up(&mut self, pos: Point) -> Result<EventResult, MasonryError> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => Ok(EventResult::Ignored),
            DragState::Pressed(session) => {
                // Threshold never crossed: a click. No reorder, no callback.
                self.surface.set_lifted(session.item, false);
                Ok(EventResult::Clicked)
            }
            DragState::Dragging(session) => {
                let outcome = self.commit(&session, pos);
                self.surface.set_lifted(session.item, false);
                outcome
            }
        }
    }

    /// Commit procedure: definitive what-if at the release position, pure
    /// permutation of the store, one-shot host notification, then a forced
    /// relayout so final positions reconcile exactly with the preview.
    fn commit(&mut self, session: &DragSession, pos: Point) -> Result<EventResult, MasonryError> {
        let dragged_height = self
            .surface
            .measure(session.item)
            .ok_or(MasonryError::MissingItem(session.item))?
            .height;
        let base = self.measured_base(session.item)?;
        let preview = preview_layout(&PreviewParams {
            base: &base,
            dragged_height,
            pointer: pos,
            origin: session.origin,
            column_count: session.column_count,
            item_width: self.config.item_width,
            gap: self.config.gap_size,
        });
        for (&id, &offset) in &preview.offsets {
            self.surface.apply_offset(id, offset);
        }
        self.surface.apply_container_height(preview.container_height);

        self.store.move_item(session.item, preview.insertion_index);
        tracing::debug!(
            "drag committed: {:?} moved to index {} (in slot: {})",
            session.item,
            preview.insertion_index,
            preview.pointer_in_slot
        );

        if let Some(handler) = self.on_order_changed.as_mut() {
            handler(self.store.order());
        }

        self.relayout(true)?;
        Ok(EventResult::Committed)
    }

    /// Terminate the session without committing. The authoritative order is
    /// untouched; a forced relayout snaps every item back.
    fn cancel_drag(&mut self) -> Result<EventResult, MasonryError> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => Ok(EventResult::Ignored),
            DragState::Pressed(session) => {
                self.surface.set_lifted(session.item, false);
                Ok(EventResult::Cancelled)
            }
            DragState::Dragging(session) => {
                tracing::debug!("drag cancelled for {:?}", session.item);
                self.surface.set_lifted(session.item, false);
                self.relayout(true)?;
                Ok(EventResult::Cancelled)
            }
        }
    }
}
