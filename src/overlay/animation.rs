// SPDX-License-Identifier: MPL-2.0
//! Poll-driven animation primitives for the seek overlay.
//!
//! Both animations are plain instants sampled by the host event loop; no
//! thread or timer is spawned, matching the single-threaded cooperative
//! model of the rest of the layer.

use crate::domain::{AnimationDuration, IconCycleDuration};
use std::time::{Duration, Instant};

/// Expanding-circle reveal: a single linear run from the minimum to the
/// maximum radius over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealAnimation {
    started_at: Option<Instant>,
    duration: Duration,
}

impl RevealAnimation {
    /// Creates a stopped reveal with the given duration.
    #[must_use]
    pub fn new(duration: AnimationDuration) -> Self {
        Self {
            started_at: None,
            duration: duration.as_duration(),
        }
    }

    /// Starts (or restarts) the interpolation from the minimum radius.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Ends the in-flight run. Completion handling is the caller's.
    pub fn end(&mut self) {
        self.started_at = None;
    }

    /// True while a run is in flight (including a finished, un-ended one).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Interpolation factor in `[0, 1]`. Zero when stopped.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started_at {
            None => 0.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
        }
    }

    /// True once a running interpolation has reached its end.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        match self.started_at {
            None => false,
            Some(started) => now.saturating_duration_since(started) >= self.duration,
        }
    }
}

/// Repeating fade cycle (in, then out) of the direction icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPulse {
    started_at: Option<Instant>,
    cycle: Duration,
}

impl IconPulse {
    /// Creates a stopped pulse with the given full-cycle duration.
    #[must_use]
    pub fn new(cycle: IconCycleDuration) -> Self {
        Self {
            started_at: None,
            cycle: cycle.as_duration(),
        }
    }

    /// Starts (or restarts) the fade cycle.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stops the cycle; alpha drops to zero.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// True while the cycle is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Icon alpha in `[0, 1]`: a triangle wave rising to full opacity at
    /// mid-cycle and back. Zero when stopped.
    #[must_use]
    pub fn alpha(&self, now: Instant) -> f32 {
        match self.started_at {
            None => 0.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                let phase = (elapsed / self.cycle.as_secs_f32()).fract();
                1.0 - (2.0 * phase - 1.0).abs()
            }
        }
    }
}
