// SPDX-License-Identifier: MPL-2.0
//! Double-tap recognition over the raw tap stream.
//!
//! Promotes a tap-down arriving shortly after the previous tap-up into the
//! beginning of a double tap. Only consulted while no gesture session is
//! armed; once armed, every tap feeds the session directly.

use crate::config::DOUBLE_TAP_WINDOW_MS;
use std::time::{Duration, Instant};

/// Stateful two-tap recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapRecognizer {
    last_up: Option<Instant>,
    window: Duration,
}

impl DoubleTapRecognizer {
    /// Creates a recognizer with the default double-tap window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_up: None,
            window: Duration::from_millis(DOUBLE_TAP_WINDOW_MS),
        }
    }

    /// Records a tap-down. Returns true if this down begins a double tap,
    /// i.e. it arrived within the window of the previous tap-up.
    pub fn on_tap_down(&mut self, now: Instant) -> bool {
        let is_double = self
            .last_up
            .is_some_and(|up| now.saturating_duration_since(up) <= self.window);
        if is_double {
            // Consume the pending tap so a triple tap does not fire twice.
            self.last_up = None;
        }
        is_double
    }

    /// Records a tap-up, making the next prompt tap-down a double tap.
    pub fn on_tap_up(&mut self, now: Instant) {
        self.last_up = Some(now);
    }

    /// Forgets any pending tap.
    pub fn reset(&mut self) {
        self.last_up = None;
    }
}

impl Default for DoubleTapRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
