//! End-to-end tests for the drag state machine
//!
//! Each test feeds pointer events through the engine the way a host event
//! loop would, then inspects the store, the surface, and the callback.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{test_masonry_draggable, TestSurface, GAP, ITEM_WIDTH};
use mason::layout::compute_layout;
use mason::{EventResult, ItemId, Masonry, MasonryError, Point, PointerButton, PointerEvent};

const ORIGIN: Point = Point { x: 20.0, y: 30.0 };

/// Five 50px items in three columns (container width 340):
/// 1 2 3 in the top row, 4 5 below
fn five_item_grid() -> Masonry<TestSurface> {
    test_masonry_draggable(340.0, ORIGIN, &[50.0, 50.0, 50.0, 50.0, 50.0])
}

fn at(x: f32, y: f32) -> Point {
    Point::new(ORIGIN.x + x, ORIGIN.y + y)
}

fn down(engine: &mut Masonry<TestSurface>, pos: Point) -> EventResult {
    engine
        .handle_pointer(PointerEvent::Down {
            pos,
            button: PointerButton::Primary,
        })
        .unwrap()
}

fn move_to(engine: &mut Masonry<TestSurface>, pos: Point) -> EventResult {
    engine.handle_pointer(PointerEvent::Move { pos }).unwrap()
}

fn up(engine: &mut Masonry<TestSurface>, pos: Point) -> EventResult {
    engine.handle_pointer(PointerEvent::Up { pos }).unwrap()
}

// ============================================================================
// Threshold behavior
// ============================================================================

#[test]
fn test_sub_threshold_press_is_a_click() {
    let mut engine = five_item_grid();
    let order_before: Vec<ItemId> = engine.order().to_vec();
    let offsets_before = engine.surface().offsets.clone();

    let calls = Rc::new(RefCell::new(0));
    let calls_in_handler = Rc::clone(&calls);
    engine.set_order_changed_handler(move |_| *calls_in_handler.borrow_mut() += 1);

    assert_eq!(down(&mut engine, at(10.0, 10.0)), EventResult::Pressed);
    // 6px on either axis is still below the threshold
    assert_eq!(move_to(&mut engine, at(16.0, 16.0)), EventResult::Ignored);
    assert_eq!(move_to(&mut engine, at(4.0, 12.0)), EventResult::Ignored);
    assert_eq!(up(&mut engine, at(16.0, 16.0)), EventResult::Clicked);

    assert_eq!(engine.order(), order_before.as_slice());
    assert_eq!(engine.surface().offsets, offsets_before);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_threshold_crossing_promotes_to_drag() {
    let mut engine = five_item_grid();
    down(&mut engine, at(10.0, 10.0));
    assert!(!engine.is_dragging());
    assert_eq!(move_to(&mut engine, at(30.0, 10.0)), EventResult::Previewed);
    assert!(engine.is_dragging());
}

#[test]
fn test_once_dragging_small_moves_still_preview() {
    let mut engine = five_item_grid();
    down(&mut engine, at(10.0, 10.0));
    move_to(&mut engine, at(30.0, 10.0));
    // Back within the threshold radius of the start: still dragging
    assert_eq!(move_to(&mut engine, at(12.0, 10.0)), EventResult::Previewed);
    assert!(engine.is_dragging());
}

// ============================================================================
// Button and target filtering
// ============================================================================

#[test]
fn test_secondary_button_is_ignored() {
    let mut engine = five_item_grid();
    let result = engine
        .handle_pointer(PointerEvent::Down {
            pos: at(10.0, 10.0),
            button: PointerButton::Secondary,
        })
        .unwrap();
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(move_to(&mut engine, at(100.0, 100.0)), EventResult::Ignored);
}

#[test]
fn test_press_outside_every_item_is_ignored() {
    let mut engine = five_item_grid();
    // Between the rows, inside the container
    assert_eq!(down(&mut engine, at(10.0, 55.0)), EventResult::Ignored);
    // Outside the container entirely
    assert_eq!(down(&mut engine, at(-50.0, -50.0)), EventResult::Ignored);
}

#[test]
fn test_non_draggable_surface_ignores_pointers() {
    let mut engine = common::test_masonry(340.0, &[50.0, 50.0, 50.0]);
    let result = engine
        .handle_pointer(PointerEvent::Down {
            pos: Point::new(10.0, 10.0),
            button: PointerButton::Primary,
        })
        .unwrap();
    assert_eq!(result, EventResult::Ignored);
}

// ============================================================================
// Scenario C: drop onto a later slot
// ============================================================================

#[test]
fn test_drag_first_item_to_fourth_slot() {
    let mut engine = five_item_grid();

    let observed: Rc<RefCell<Vec<Vec<ItemId>>>> = Rc::new(RefCell::new(Vec::new()));
    let observed_in_handler = Rc::clone(&observed);
    engine.set_order_changed_handler(move |order| {
        observed_in_handler.borrow_mut().push(order.to_vec());
    });

    // Grab item1 and drop it over the slot the fourth base item (item5)
    // would occupy: column 0, second row
    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(50.0, 80.0));
    assert_eq!(engine.preview_insertion_index(), Some(3));
    assert_eq!(up(&mut engine, at(50.0, 80.0)), EventResult::Committed);

    assert_eq!(
        engine.order(),
        &[ItemId(2), ItemId(3), ItemId(4), ItemId(1), ItemId(5)]
    );
    // One-shot callback with the committed order
    assert_eq!(observed.borrow().len(), 1);
    assert_eq!(observed.borrow()[0][3], ItemId(1));
}

#[test]
fn test_commit_reconciles_with_a_fresh_layout() {
    let mut engine = five_item_grid();
    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(50.0, 80.0));
    up(&mut engine, at(50.0, 80.0));

    let items: Vec<(ItemId, f32)> = engine.order().iter().map(|&id| (id, 50.0)).collect();
    let fresh = compute_layout(&items, 3, ITEM_WIDTH, GAP);
    assert_eq!(engine.surface().offsets, fresh.offsets);
    assert_eq!(
        engine.surface().container_height,
        Some(fresh.container_height)
    );
}

// ============================================================================
// Scenario D: drop outside the container
// ============================================================================

#[test]
fn test_drop_outside_container_appends_to_end() {
    let mut engine = five_item_grid();
    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(1000.0, 1000.0));
    assert_eq!(engine.preview_insertion_index(), Some(4));
    assert_eq!(up(&mut engine, at(1000.0, 1000.0)), EventResult::Committed);
    assert_eq!(
        engine.order(),
        &[ItemId(2), ItemId(3), ItemId(4), ItemId(5), ItemId(1)]
    );
}

// ============================================================================
// Preview behavior
// ============================================================================

#[test]
fn test_dragged_item_follows_the_pointer() {
    let mut engine = five_item_grid();
    // Grab item1 at (5, 5) from its corner
    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(150.0, 90.0));
    // Offset is container-relative: pointer - grab offset - origin
    assert_eq!(
        engine.surface().offsets[&ItemId(1)],
        Point::new(145.0, 85.0)
    );
}

#[test]
fn test_preview_does_not_mutate_the_store() {
    let mut engine = five_item_grid();
    let order_before: Vec<ItemId> = engine.order().to_vec();
    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(50.0, 80.0));
    move_to(&mut engine, at(150.0, 80.0));
    assert_eq!(engine.order(), order_before.as_slice());
}

#[test]
fn test_lift_applied_on_press_and_released_on_drop() {
    let mut engine = five_item_grid();
    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(50.0, 80.0));
    up(&mut engine, at(50.0, 80.0));
    assert_eq!(
        engine.surface().lift_log,
        vec![(ItemId(1), true), (ItemId(1), false)]
    );
}

#[test]
fn test_lift_released_after_a_plain_click_too() {
    let mut engine = five_item_grid();
    down(&mut engine, at(5.0, 5.0));
    up(&mut engine, at(5.0, 5.0));
    assert_eq!(
        engine.surface().lift_log,
        vec![(ItemId(1), true), (ItemId(1), false)]
    );
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_cancel_restores_layout_without_committing() {
    let mut engine = five_item_grid();
    let order_before: Vec<ItemId> = engine.order().to_vec();
    let offsets_before = engine.surface().offsets.clone();

    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(150.0, 90.0));
    let result = engine.handle_pointer(PointerEvent::Cancel).unwrap();
    assert_eq!(result, EventResult::Cancelled);

    assert_eq!(engine.order(), order_before.as_slice());
    assert_eq!(engine.surface().offsets, offsets_before);
    assert!(!engine.is_dragging());
}

#[test]
fn test_cancel_while_idle_is_ignored() {
    let mut engine = five_item_grid();
    assert_eq!(
        engine.handle_pointer(PointerEvent::Cancel).unwrap(),
        EventResult::Ignored
    );
}

// ============================================================================
// Mid-drag errors
// ============================================================================

#[test]
fn test_item_vanishing_mid_drag_aborts_without_committing() {
    let mut engine = five_item_grid();
    let order_before: Vec<ItemId> = engine.order().to_vec();

    down(&mut engine, at(5.0, 5.0));
    move_to(&mut engine, at(50.0, 80.0));
    engine.surface_mut().remove_item(ItemId(3));

    let err = engine
        .handle_pointer(PointerEvent::Move {
            pos: at(60.0, 80.0),
        })
        .unwrap_err();
    assert!(matches!(err, MasonryError::MissingItem(ItemId(3))));
    assert_eq!(engine.order(), order_before.as_slice());
}
