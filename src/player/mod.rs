// SPDX-License-Identifier: MPL-2.0
//! Media-engine port definition.
//!
//! This module defines the [`MediaPlayer`] trait the interaction layer calls
//! into, plus the read-only [`PlayerSnapshot`] it queries at decision time.
//! The engine is externally owned: the layer borrows it per call, never
//! constructs it, and never caches a snapshot across calls.
//!
//! # Design Notes
//!
//! - `seek_to` is fire-and-forget: the engine reports the updated position
//!   asynchronously through the next snapshot, not through a return value.
//! - The `{start, pause, stop}` lifecycle belongs to the host; the layer
//!   only issues seeks, but the trait carries the full surface so a host
//!   can hand the same object to its own lifecycle wiring.

/// Coarse playback state reported by the media engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No media prepared.
    Idle,
    /// Media is loading or stalled on data.
    Buffering,
    /// Media is playable (playing or paused).
    Ready,
    /// Playback ran to the end of the media.
    Ended,
    /// Playback failed.
    Error,
}

impl PlaybackState {
    /// Returns true if taps can act on the media in this state.
    ///
    /// Idle, Ended, and Error media cannot be seeked; a tap against them
    /// tears the gesture session down instead.
    #[must_use]
    pub fn is_seekable(self) -> bool {
        matches!(self, Self::Buffering | Self::Ready)
    }
}

/// Read-only view of the engine's playback state, queried fresh per decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Current playback position in milliseconds.
    pub position_ms: u64,
    /// Total media duration in milliseconds.
    pub duration_ms: u64,
    /// Coarse playback state.
    pub playback_state: PlaybackState,
}

impl PlayerSnapshot {
    /// Convenience constructor for a seekable snapshot.
    #[must_use]
    pub fn ready(position_ms: u64, duration_ms: u64) -> Self {
        Self {
            position_ms,
            duration_ms,
            playback_state: PlaybackState::Ready,
        }
    }
}

/// Port for the external media engine.
///
/// Implementations are host-owned. All methods are infallible from the
/// layer's perspective; an engine that cannot honor a seek simply keeps
/// reporting its actual position through [`MediaPlayer::snapshot`].
pub trait MediaPlayer {
    /// Returns the current playback snapshot.
    fn snapshot(&self) -> PlayerSnapshot;

    /// Seeks to an absolute position in milliseconds. Fire-and-forget.
    fn seek_to(&mut self, position_ms: u64);

    /// Starts or resumes playback.
    fn start(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Stops playback and releases the current media.
    fn stop(&mut self);
}
