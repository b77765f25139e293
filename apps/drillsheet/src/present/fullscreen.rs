//! Fullscreen presentation control.
//!
//! The platform fullscreen facility is an external collaborator, modelled as
//! a trait so the degrade path stays testable. A rejected request is
//! non-fatal: the controller hides the toggle control and the session carries
//! on windowed. The failure never reaches layout or generation.

#![allow(dead_code)]

use tracing::warn;

/// Raised by a driver when the platform refuses the transition.
#[derive(Debug, thiserror::Error)]
#[error("fullscreen request rejected: {0}")]
pub struct FullscreenRejected(pub String);

/// Request/exit fullscreen. Both directions may fail.
pub trait FullscreenDriver {
    fn enter(&mut self) -> Result<(), FullscreenRejected>;
    fn exit(&mut self) -> Result<(), FullscreenRejected>;
}

/// Tracks fullscreen state and whether the toggle control is still offered.
#[derive(Debug, Default)]
pub struct PresentationController {
    pub is_fullscreen: bool,
    /// Cleared after a rejection; the UI hides the toggle.
    pub fullscreen_hidden: bool,
}

impl PresentationController {
    pub fn new() -> Self {
        PresentationController::default()
    }

    /// Attempts the fullscreen transition. On rejection the control is hidden
    /// and the current state is kept.
    pub fn toggle(&mut self, driver: &mut dyn FullscreenDriver) {
        if self.fullscreen_hidden {
            return;
        }

        let result = if self.is_fullscreen {
            driver.exit()
        } else {
            driver.enter()
        };

        match result {
            Ok(()) => self.is_fullscreen = !self.is_fullscreen,
            Err(e) => {
                warn!("fullscreen unavailable, hiding control: {e}");
                self.fullscreen_hidden = true;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
