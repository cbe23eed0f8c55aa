// SPDX-License-Identifier: MPL-2.0
//! Gesture-session state machine for double-tap seeking.
//!
//! Turns a raw tap stream into session-scoped gesture events with clear
//! state transitions:
//! - Idle: No session, taps pass through as ordinary taps
//! - Armed: A double tap opened a session; every further tap slides the
//!   deadline forward, so rapid taps keep the session (and the overlay)
//!   alive without re-double-tapping

pub mod recognizer;

pub use recognizer::DoubleTapRecognizer;

use crate::domain::DoubleTapDelay;
use iced::Point;
use std::time::{Duration, Instant};

/// Session-scoped gesture event emitted by [`GestureSession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A double tap opened a session at the given position.
    Started(Point),
    /// A finger went down inside an armed session.
    ProgressDown(Point),
    /// A finger came up inside an armed session. The only event with
    /// decision authority: callers run the seek policy on it.
    ProgressUp(Point),
    /// The session ended, either by deadline expiry or cancellation.
    Finished,
}

/// Session state. The deadline only exists while armed, so an idle session
/// structurally cannot hold a stale timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Armed { deadline: Instant },
}

/// Finite-state timer machine over the raw tap stream.
///
/// Deadlines are plain instants polled by the host event loop (the Iced
/// equivalent of a cancellable scheduled callback): re-arming overwrites
/// the deadline, so no two timers for the same session can be outstanding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    state: SessionState,
    delay: Duration,
}

impl GestureSession {
    /// Creates an idle session with the given sliding-window delay.
    #[must_use]
    pub fn new(delay: DoubleTapDelay) -> Self {
        Self {
            state: SessionState::Idle,
            delay: delay.as_duration(),
        }
    }

    /// Returns true while a session is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, SessionState::Armed { .. })
    }

    /// Returns the instant the armed session expires, if any.
    ///
    /// Hosts use this to schedule their next deadline poll.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Armed { deadline } => Some(deadline),
        }
    }

    /// Opens a session on a recognized double tap.
    ///
    /// Idle → Armed, emitting `Started`. A double tap reported while
    /// already armed only refreshes the deadline; the taps themselves
    /// arrive separately as progress events.
    pub fn on_double_tap(&mut self, position: Point, now: Instant) -> Option<SessionEvent> {
        if let Some(finished) = self.poll(now) {
            // Deadline passed before this tap; the old session closes and
            // the tap itself is swallowed as an ordinary tap.
            return Some(finished);
        }
        match self.state {
            SessionState::Idle => {
                self.arm(now);
                log::debug!("gesture session armed at ({}, {})", position.x, position.y);
                Some(SessionEvent::Started(position))
            }
            SessionState::Armed { .. } => {
                self.arm(now);
                None
            }
        }
    }

    /// Feeds a tap-down into an armed session.
    ///
    /// Armed → Armed, refreshing the deadline and emitting `ProgressDown`.
    /// Idle sessions ignore the tap (it belongs to the recognizer).
    pub fn on_tap_down(&mut self, position: Point, now: Instant) -> Option<SessionEvent> {
        if let Some(finished) = self.poll(now) {
            return Some(finished);
        }
        if !self.is_armed() {
            return None;
        }
        self.arm(now);
        Some(SessionEvent::ProgressDown(position))
    }

    /// Feeds a tap-up into an armed session.
    ///
    /// Armed → Armed, refreshing the deadline and emitting `ProgressUp`.
    pub fn on_tap_up(&mut self, position: Point, now: Instant) -> Option<SessionEvent> {
        if let Some(finished) = self.poll(now) {
            return Some(finished);
        }
        if !self.is_armed() {
            return None;
        }
        self.arm(now);
        Some(SessionEvent::ProgressUp(position))
    }

    /// Expires the session if its deadline has passed without a refresh.
    ///
    /// Armed → Idle at the deadline, emitting `Finished`. Hosts call this
    /// from their tick handler; the tap entry points also call it so a tap
    /// arriving after the deadline cannot revive a dead session.
    pub fn poll(&mut self, now: Instant) -> Option<SessionEvent> {
        match self.state {
            SessionState::Armed { deadline } if now >= deadline => {
                self.state = SessionState::Idle;
                log::debug!("gesture session expired");
                Some(SessionEvent::Finished)
            }
            _ => None,
        }
    }

    /// Slides the deadline forward without emitting an event.
    ///
    /// Called by the seek coordinator after a successful mid-range seek so
    /// rapid taps compound. Has no effect on an idle session.
    pub fn refresh(&mut self, now: Instant) {
        if self.is_armed() {
            self.arm(now);
        }
    }

    /// Ends the session immediately, regardless of remaining time.
    ///
    /// Armed → Idle, synchronously emitting `Finished` and dropping the
    /// deadline. Idle sessions stay idle and emit nothing.
    pub fn cancel(&mut self) -> Option<SessionEvent> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Armed { .. } => {
                self.state = SessionState::Idle;
                log::debug!("gesture session cancelled");
                Some(SessionEvent::Finished)
            }
        }
    }

    fn arm(&mut self, now: Instant) {
        self.state = SessionState::Armed {
            deadline: now + self.delay,
        };
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(DoubleTapDelay::default())
    }
}
