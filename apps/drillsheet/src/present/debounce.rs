//! Debounced viewport-resize handling.
//!
//! Cancel-and-restart semantics, not a rate limiter: each new resize event
//! cancels the pending recomputation and re-arms the quiescence window from
//! scratch, so the layout recomputes once per burst. Time is passed in as an
//! `Instant`, never read from a hidden clock, so tests drive it
//! synthetically.

#![allow(dead_code)]

use std::time::{Duration, Instant};

/// Quiescence window measured from the last resize event.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    viewport_height: f32,
    armed_at: Instant,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        ResizeDebouncer {
            delay,
            pending: None,
        }
    }

    /// Records a resize event: cancels any pending update and re-arms the
    /// window from `now` with the latest height.
    pub fn schedule(&mut self, viewport_height: f32, now: Instant) {
        self.pending = Some(Pending {
            viewport_height,
            armed_at: now,
        });
    }

    /// Returns the settled viewport height once the window has elapsed with
    /// no further events, consuming the pending update. Returns `None` while
    /// the window is still open or nothing is pending.
    pub fn fire(&mut self, now: Instant) -> Option<f32> {
        match self.pending {
            Some(p) if now.duration_since(p.armed_at) >= self.delay => {
                self.pending = None;
                Some(p.viewport_height)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        ResizeDebouncer::new(RESIZE_DEBOUNCE)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
