// SPDX-License-Identifier: MPL-2.0
//! Seek execution with boundary clamping.
//!
//! Converts an accepted direction into a clamped absolute seek target,
//! issues the seek against the media engine, and raises edge-triggered
//! start/end-of-media signals.

use crate::domain::{Boundary, Direction, SeekIncrement};
use crate::player::{MediaPlayer, PlayerSnapshot};

/// Result of applying one accepted verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekOutcome {
    /// Direction the tap seeked in.
    pub direction: Direction,
    /// Boundary the target was clamped to, if any.
    pub boundary: Boundary,
    /// Absolute seek target in milliseconds.
    pub target_ms: u64,
}

impl SeekOutcome {
    /// True when the seek landed mid-range and the gesture session should
    /// keep its double-tap window alive so rapid taps compound.
    #[must_use]
    pub fn keeps_session_alive(&self) -> bool {
        self.boundary == Boundary::None
    }
}

/// Edge-triggered boundary crossing raised towards the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundarySignal {
    /// The seek target arrived at position 0.
    StartReached,
    /// The seek target arrived at the media duration.
    EndReached,
}

/// Applies verdicts against the media engine.
///
/// The coordinator latches the last boundary it landed on so that repeated
/// taps pinned against the same media edge raise the crossing signal only
/// once; any mid-range outcome re-arms the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeekCoordinator {
    last_boundary: Boundary,
}

impl SeekCoordinator {
    /// Creates a coordinator with a clear boundary latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the clamped seek target for `direction`, issues the seek,
    /// and returns the outcome plus the boundary signal, if one fired.
    ///
    /// With no engine attached the seek itself is a no-op, but the outcome
    /// is still produced so the overlay and session advance normally.
    pub fn apply(
        &mut self,
        direction: Direction,
        snapshot: &PlayerSnapshot,
        increment: SeekIncrement,
        player: Option<&mut dyn MediaPlayer>,
    ) -> (SeekOutcome, Option<BoundarySignal>) {
        let step = increment.millis() as i64;
        let position = snapshot.position_ms as i64;
        let duration = snapshot.duration_ms as i64;

        let raw = match direction {
            Direction::Rewind => position - step,
            Direction::Forward => position + step,
        };

        let (target_ms, boundary) = if raw <= 0 {
            (0, Boundary::Start)
        } else if raw >= duration {
            (snapshot.duration_ms, Boundary::End)
        } else {
            (raw as u64, Boundary::None)
        };

        let signal = match boundary {
            Boundary::Start if self.last_boundary != Boundary::Start => {
                Some(BoundarySignal::StartReached)
            }
            Boundary::End if self.last_boundary != Boundary::End => {
                Some(BoundarySignal::EndReached)
            }
            _ => None,
        };
        self.last_boundary = boundary;

        if let Some(player) = player {
            log::debug!("seeking to {target_ms} ms ({direction:?}, {boundary:?})");
            player.seek_to(target_ms);
        }

        (
            SeekOutcome {
                direction,
                boundary,
                target_ms,
            },
            signal,
        )
    }

    /// Clears the boundary latch. Called when a gesture session ends so a
    /// later session's arrival at an edge fires its signal again.
    pub fn reset(&mut self) {
        self.last_boundary = Boundary::None;
    }
}
