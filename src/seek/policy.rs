// SPDX-License-Identifier: MPL-2.0
//! Seek decision policy.
//!
//! A pure function from tap position, surface width, and a fresh player
//! snapshot to a verdict. No side effects; callers re-invoke it on every
//! progress-up event, so the direction may change tap to tap.
//!
//! | Action  | Current position         | Screen width portion |
//! |---------|--------------------------|----------------------|
//! | rewind  | greater than 500 ms      | 0% to 35%            |
//! | forward | less than total duration | 65% to 100%          |
//! | ignore  | ------------             | between 35% and 65%  |

use crate::config::{FORWARD_ZONE_FRACTION, MIN_REWIND_POSITION_MS, REWIND_ZONE_FRACTION};
use crate::domain::Direction;
use crate::player::PlayerSnapshot;

/// Verdict for a single tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekVerdict {
    /// Seek backwards by one increment.
    Rewind,
    /// Seek forwards by one increment.
    Forward,
    /// Do nothing; the tap falls through as an ordinary tap.
    Ignore,
}

impl SeekVerdict {
    /// Returns the seek direction of an accepted verdict.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Rewind => Some(Direction::Rewind),
            Self::Forward => Some(Direction::Forward),
            Self::Ignore => None,
        }
    }
}

/// Result of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// What the tap means.
    pub verdict: SeekVerdict,
    /// True when the media is unusable (Idle, Ended, or Error) and the
    /// caller must tear the gesture session down rather than leave it
    /// armed against media that cannot be seeked.
    pub cancel_session: bool,
}

impl Decision {
    const fn ignore(cancel_session: bool) -> Self {
        Self {
            verdict: SeekVerdict::Ignore,
            cancel_session,
        }
    }

    const fn accept(verdict: SeekVerdict) -> Self {
        Self {
            verdict,
            cancel_session: false,
        }
    }
}

/// Decides what a tap at `pos_x` on a surface of `surface_width` means
/// given the engine snapshot. Rules are evaluated in order:
///
/// 1. Unusable media → ignore and instruct session cancellation.
/// 2. Left zone with enough playback behind → rewind.
/// 3. Right zone with media remaining → forward.
/// 4. Anything else (middle band, rewind floor, forward ceiling) → ignore.
#[must_use]
pub fn decide(pos_x: f32, surface_width: f32, snapshot: &PlayerSnapshot) -> Decision {
    if !snapshot.playback_state.is_seekable() {
        return Decision::ignore(true);
    }

    if snapshot.position_ms > MIN_REWIND_POSITION_MS
        && pos_x < surface_width * REWIND_ZONE_FRACTION
    {
        return Decision::accept(SeekVerdict::Rewind);
    }

    if snapshot.position_ms < snapshot.duration_ms && pos_x > surface_width * FORWARD_ZONE_FRACTION
    {
        return Decision::accept(SeekVerdict::Forward);
    }

    Decision::ignore(false)
}
