//! Resize debouncing
//!
//! Resize events arrive in rapid bursts; re-running the full placement pass
//! for each one is wasted work. The debouncer coalesces a burst into a
//! single trailing deadline 100ms after the last notification. It owns no
//! timer thread: the host (or the winit event loop, via
//! `ControlFlow::WaitUntil`) polls the deadline cooperatively.

use std::time::{Duration, Instant};

/// Quiet window after the last resize notification before relayout fires
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Trailing-edge debouncer for resize notifications.
///
/// Every notification cancels and restarts the window; `fire_at` reports
/// true exactly once per burst, after the window has fully elapsed.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}

impl ResizeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a resize notification at `now`, restarting the quiet window
    pub fn notify_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Record a resize notification at the current time
    pub fn notify(&mut self) {
        self.notify_at(Instant::now());
    }

    /// The pending deadline, if a burst is waiting to fire
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True if the quiet window has elapsed. Consumes the deadline, so a
    /// burst fires exactly once.
    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
