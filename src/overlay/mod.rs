// SPDX-License-Identifier: MPL-2.0
//! Overlay lifecycle for the seek feedback.
//!
//! Owns the visible/hidden state of the overlay, the accumulating seconds
//! counter, and the expanding-circle reveal. Rapid re-taps reset the reveal
//! in place: the animation restarts without passing through the hidden
//! state, so the overlay never flickers; a direction flip additionally
//! discards the accumulated count and flips the label anchor.

pub mod animation;

pub use animation::{IconPulse, RevealAnimation};

use crate::config::{MAX_REVEAL_RADIUS, MIN_REVEAL_RADIUS};
use crate::domain::{AnchorSide, Direction, SeekIncrement};
use crate::seek::SeekOutcome;
use iced::Point;
use std::time::Instant;

/// Overlay visibility transition raised towards the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The overlay became visible; the host may want to hide its own
    /// playback controls while the gesture feedback is up.
    Shown,
    /// The overlay finished and hid itself (or was torn down).
    Hidden,
}

/// Everything a renderer needs to draw one frame of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Whether anything should be drawn at all.
    pub visible: bool,
    /// Center of the expanding tap circle.
    pub circle_center: Point,
    /// Current radius of the tap circle.
    pub circle_radius: f32,
    /// Side of the surface the seconds label anchors to.
    pub anchor: AnchorSide,
    /// Accumulated seconds of this overlay session.
    pub seconds: u32,
    /// Current alpha of the direction icon.
    pub icon_alpha: f32,
}

impl RenderState {
    /// The seconds label text.
    #[must_use]
    pub fn seconds_text(&self) -> String {
        format!("{} seconds", self.seconds)
    }
}

/// Overlay animation controller.
///
/// `force_reset` is what lets the controller tell "I am restarting the
/// animation myself" apart from "the animation ran its natural course":
/// every path that ends the reveal funnels through [`Self::animation_ended`],
/// and the flag suppresses the hide-and-zero step while a reset is in
/// flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayController {
    visible: bool,
    direction: Direction,
    accumulated_seconds: u32,
    center: Point,
    force_reset: bool,
    reveal: RevealAnimation,
    icon: IconPulse,
}

impl OverlayController {
    /// Creates a hidden controller with the given animations.
    #[must_use]
    pub fn new(reveal: RevealAnimation, icon: IconPulse) -> Self {
        Self {
            visible: false,
            direction: Direction::Forward,
            accumulated_seconds: 0,
            center: Point::ORIGIN,
            force_reset: false,
            reveal,
            icon,
        }
    }

    /// True while the overlay session is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Accumulated seconds of the visible session (0 when hidden).
    #[must_use]
    pub fn accumulated_seconds(&self) -> u32 {
        self.accumulated_seconds
    }

    /// Direction of the visible session.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Consumes an accepted verdict outcome at the given tap position.
    ///
    /// - Hidden: the overlay becomes visible with one increment on the
    ///   counter and a fresh reveal centered at the tap.
    /// - Visible, same direction: reset-in-place plus one more increment.
    /// - Visible, flipped direction: reset-in-place with the counter set
    ///   back to exactly one increment and the anchor side flipped.
    pub fn on_outcome(
        &mut self,
        outcome: &SeekOutcome,
        tap: Point,
        increment: SeekIncrement,
        now: Instant,
    ) -> Option<OverlayEvent> {
        if !self.visible {
            self.visible = true;
            self.direction = outcome.direction;
            self.accumulated_seconds = increment.seconds();
            self.center = tap;
            self.reveal.start(now);
            self.icon.start(now);
            log::debug!("seek overlay shown ({:?})", outcome.direction);
            return Some(OverlayEvent::Shown);
        }

        if self.direction == outcome.direction {
            self.accumulated_seconds += increment.seconds();
        } else {
            // A flip starts a fresh count and a fresh icon cycle.
            self.direction = outcome.direction;
            self.accumulated_seconds = increment.seconds();
            self.icon.start(now);
        }
        self.reset_in_place(tap, now);
        None
    }

    /// Advances the reveal; on natural completion the overlay hides and
    /// the counter zeroes.
    pub fn tick(&mut self, now: Instant) -> Option<OverlayEvent> {
        if self.visible && self.reveal.is_complete(now) {
            self.reveal.end();
            return self.animation_ended();
        }
        None
    }

    /// Tears the visible session down immediately (session cancellation).
    pub fn cancel(&mut self) -> Option<OverlayEvent> {
        if !self.visible {
            return None;
        }
        self.reveal.end();
        self.animation_ended()
    }

    /// Snapshot of the overlay for the renderer.
    #[must_use]
    pub fn render_state(&self, now: Instant) -> RenderState {
        RenderState {
            visible: self.visible,
            circle_center: self.center,
            circle_radius: MIN_REVEAL_RADIUS
                + (MAX_REVEAL_RADIUS - MIN_REVEAL_RADIUS) * self.reveal.progress(now),
            anchor: self.direction.anchor(),
            seconds: self.accumulated_seconds,
            icon_alpha: self.icon.alpha(now),
        }
    }

    /// Cancels the in-flight reveal and restarts it from the minimum
    /// radius at a new center, without passing through the hidden state.
    fn reset_in_place(&mut self, tap: Point, now: Instant) {
        self.force_reset = true;
        self.reveal.end();
        // Ending the reveal funnels through the completion path; the flag
        // keeps it from hiding the overlay mid-reset.
        self.animation_ended();
        self.center = tap;
        self.force_reset = false;
        self.reveal.start(now);
    }

    /// The single completion path for the reveal animation.
    fn animation_ended(&mut self) -> Option<OverlayEvent> {
        if self.force_reset {
            return None;
        }
        self.visible = false;
        self.accumulated_seconds = 0;
        self.icon.stop();
        log::debug!("seek overlay hidden");
        Some(OverlayEvent::Hidden)
    }
}
