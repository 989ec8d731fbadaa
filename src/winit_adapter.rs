//! Adapter to convert winit window events to masonry pointer events
//!
//! winit reports button presses without a position, so the adapter tracks
//! the last cursor position and stamps it onto each pointer event. Touch
//! contacts map to the primary button.

use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

use crate::geometry::Point;
use crate::input::{PointerButton, PointerEvent};

/// A window event translated into engine terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// Feed to [`Masonry::handle_pointer`]
    ///
    /// [`Masonry::handle_pointer`]: crate::masonry::Masonry::handle_pointer
    Pointer(PointerEvent),
    /// Feed to [`Masonry::notify_resize`]
    ///
    /// [`Masonry::notify_resize`]: crate::masonry::Masonry::notify_resize
    Resized,
}

/// Stateful translator from winit window events
#[derive(Debug, Default)]
pub struct WinitAdapter {
    cursor: Point,
}

impl WinitAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event.
    ///
    /// Returns `None` for events the engine has no interest in (keyboard,
    /// focus, redraw requests, unmapped mouse buttons).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<SurfaceEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                Some(SurfaceEvent::Pointer(PointerEvent::Move {
                    pos: self.cursor,
                }))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Primary,
                    MouseButton::Right => PointerButton::Secondary,
                    MouseButton::Middle => PointerButton::Middle,
                    _ => return None,
                };
                let event = match state {
                    ElementState::Pressed => PointerEvent::Down {
                        pos: self.cursor,
                        button,
                    },
                    ElementState::Released => PointerEvent::Up { pos: self.cursor },
                };
                Some(SurfaceEvent::Pointer(event))
            }
            WindowEvent::Touch(Touch {
                phase, location, ..
            }) => {
                let pos = Point::new(location.x as f32, location.y as f32);
                self.cursor = pos;
                let event = match phase {
                    TouchPhase::Started => PointerEvent::Down {
                        pos,
                        button: PointerButton::Primary,
                    },
                    TouchPhase::Moved => PointerEvent::Move { pos },
                    TouchPhase::Ended => PointerEvent::Up { pos },
                    TouchPhase::Cancelled => PointerEvent::Cancel,
                };
                Some(SurfaceEvent::Pointer(event))
            }
            WindowEvent::Resized(_) => Some(SurfaceEvent::Resized),
            _ => None,
        }
    }
}
