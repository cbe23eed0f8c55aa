// SPDX-License-Identifier: MPL-2.0
//! Double-tap seek component orchestrating the gesture session, the seek
//! decision policy, the seek coordinator, and the overlay controller.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── gesture    - double-tap recognition + session state machine
//!     ├── seek       - per-tap verdict + clamped seek execution
//!     └── overlay    - reveal animation + seconds counter lifecycle
//! ```
//!
//! Raw taps flow in as messages; on each progress-up inside an armed
//! session the policy is consulted against a fresh engine snapshot, the
//! coordinator seeks, and the overlay updates. Everything runs on the
//! host's event thread; `now` is passed in explicitly so the timers are
//! deterministic under test.

use crate::config::TapSeekConfig;
use crate::gesture::{DoubleTapRecognizer, GestureSession, SessionEvent};
use crate::overlay::{
    IconPulse, OverlayController, OverlayEvent, RenderState, RevealAnimation,
};
use crate::player::MediaPlayer;
use crate::seek::{decide, BoundarySignal, SeekCoordinator};
use iced::{Point, Size};
use std::time::Instant;

/// Double-tap seek component state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    config: TapSeekConfig,
    recognizer: DoubleTapRecognizer,
    session: GestureSession,
    coordinator: SeekCoordinator,
    overlay: OverlayController,
}

/// Messages for the double-tap seek component.
///
/// Tap messages carry the surface size captured at event time so the
/// decision policy always sees the width the tap was measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A finger/button went down on the media surface.
    TapDown { position: Point, surface: Size },
    /// A finger/button came up on the media surface.
    TapUp { position: Point, surface: Size },
    /// A double tap recognized by a host-owned detector. Arms the session
    /// directly, bypassing the built-in recognizer.
    DoubleTap { position: Point, surface: Size },
    /// Periodic poll driving deadline expiry and the reveal animation.
    Tick,
    /// Host-requested cancellation (e.g. the media surface went away).
    Cancel,
}

/// Effects produced for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The overlay became visible; hosts typically hide their own
    /// playback controls for the duration.
    AnimationStarted,
    /// The overlay hid itself (naturally or through cancellation).
    AnimationEnded,
    /// A seek arrived at the start of the media. Edge-triggered.
    StartReached,
    /// A seek arrived at the end of the media. Edge-triggered.
    EndReached,
}

impl State {
    /// Creates an idle component with the given configuration.
    #[must_use]
    pub fn new(config: TapSeekConfig) -> Self {
        Self {
            config,
            recognizer: DoubleTapRecognizer::new(),
            session: GestureSession::new(config.double_tap_delay),
            coordinator: SeekCoordinator::new(),
            overlay: OverlayController::new(
                RevealAnimation::new(config.animation_duration),
                IconPulse::new(config.icon_cycle),
            ),
        }
    }

    /// The configuration this component was built with.
    #[must_use]
    pub fn config(&self) -> &TapSeekConfig {
        &self.config
    }

    /// True while a gesture session is armed and further taps are
    /// interpreted as seek commands.
    #[must_use]
    pub fn is_in_double_tap_mode(&self) -> bool {
        self.session.is_armed()
    }

    /// True while the overlay is visible and wants animation ticks.
    #[must_use]
    pub fn is_overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Instant the armed session expires, for host tick scheduling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.deadline()
    }

    /// Snapshot of the overlay for the renderer.
    #[must_use]
    pub fn render_state(&self, now: Instant) -> RenderState {
        self.overlay.render_state(now)
    }

    /// Handles a component message against the externally owned media
    /// engine. With no engine attached, taps still advance the gesture
    /// machinery but no decision or seek is made.
    pub fn handle(
        &mut self,
        message: Message,
        now: Instant,
        player: Option<&mut dyn MediaPlayer>,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();

        // Deadline expiry is observed before the message itself so a late
        // tap cannot act on a session that should already be finished.
        if self.session.poll(now) == Some(SessionEvent::Finished) {
            self.session_finished();
        }

        match message {
            Message::TapDown { position, .. } => {
                if self.session.is_armed() {
                    self.session.on_tap_down(position, now);
                } else if self.recognizer.on_tap_down(now) {
                    // Started is notification-only; the authoritative
                    // verdict comes from the progress-up that follows.
                    self.session.on_double_tap(position, now);
                }
            }
            Message::DoubleTap { position, .. } => {
                // Arms when idle, refreshes when already armed. Started is
                // notification-only either way.
                self.session.on_double_tap(position, now);
            }
            Message::TapUp { position, surface } => {
                if self.session.is_armed() {
                    if self.session.on_tap_up(position, now)
                        == Some(SessionEvent::ProgressUp(position))
                    {
                        self.progress_up(position, surface, now, player, &mut effects);
                    }
                } else {
                    self.recognizer.on_tap_up(now);
                }
            }
            Message::Tick => {
                if self.overlay.tick(now) == Some(OverlayEvent::Hidden) {
                    effects.push(Effect::AnimationEnded);
                }
            }
            Message::Cancel => self.cancel(&mut effects),
        }

        effects
    }

    /// Runs the decision pipeline for one progress-up event.
    fn progress_up(
        &mut self,
        position: Point,
        surface: Size,
        now: Instant,
        player: Option<&mut dyn MediaPlayer>,
        effects: &mut Vec<Effect>,
    ) {
        let Some(player) = player else {
            // No engine wired up: the tap already refreshed the session,
            // nothing else to do this frame.
            return;
        };

        // Always a fresh snapshot; decisions never run on cached state.
        let snapshot = player.snapshot();
        let decision = decide(position.x, surface.width, &snapshot);

        if decision.cancel_session {
            self.cancel(effects);
            return;
        }
        let Some(direction) = decision.verdict.direction() else {
            return;
        };

        let (outcome, signal) = self.coordinator.apply(
            direction,
            &snapshot,
            self.config.seek_increment,
            Some(player),
        );
        if outcome.keeps_session_alive() {
            self.session.refresh(now);
        }

        if self
            .overlay
            .on_outcome(&outcome, position, self.config.seek_increment, now)
            == Some(OverlayEvent::Shown)
        {
            effects.push(Effect::AnimationStarted);
        }

        match signal {
            Some(BoundarySignal::StartReached) => effects.push(Effect::StartReached),
            Some(BoundarySignal::EndReached) => effects.push(Effect::EndReached),
            None => {}
        }
    }

    /// Synchronous, total cancellation: the session finishes immediately
    /// and the overlay's visible session is torn down with it.
    fn cancel(&mut self, effects: &mut Vec<Effect>) {
        if self.session.cancel() == Some(SessionEvent::Finished) {
            self.session_finished();
        }
        if self.overlay.cancel() == Some(OverlayEvent::Hidden) {
            effects.push(Effect::AnimationEnded);
        }
    }

    /// Housekeeping shared by expiry and cancellation. The overlay is not
    /// touched here: after a natural expiry the reveal finishes on its own.
    fn session_finished(&mut self) {
        self.coordinator.reset();
        self.recognizer.reset();
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(TapSeekConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlaybackState, PlayerSnapshot};
    use std::time::Duration;

    const SURFACE: Size = Size::new(1_000.0, 600.0);

    /// Engine stub whose position tracks issued seeks, so a later snapshot
    /// reflects the previous tap the way a real engine eventually would.
    struct MockPlayer {
        position_ms: u64,
        duration_ms: u64,
        playback_state: PlaybackState,
        seeks: Vec<u64>,
    }

    impl MockPlayer {
        fn new(position_ms: u64, duration_ms: u64) -> Self {
            Self {
                position_ms,
                duration_ms,
                playback_state: PlaybackState::Ready,
                seeks: Vec::new(),
            }
        }
    }

    impl MediaPlayer for MockPlayer {
        fn snapshot(&self) -> PlayerSnapshot {
            PlayerSnapshot {
                position_ms: self.position_ms,
                duration_ms: self.duration_ms,
                playback_state: self.playback_state,
            }
        }

        fn seek_to(&mut self, position_ms: u64) {
            self.position_ms = position_ms;
            self.seeks.push(position_ms);
        }

        fn start(&mut self) {}
        fn pause(&mut self) {}
        fn stop(&mut self) {}
    }

    /// Performs a full double tap (down, up, down, up) ending at `at`.
    fn double_tap(
        state: &mut State,
        player: &mut MockPlayer,
        position: Point,
        at: Instant,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        let steps = [
            (Message::TapDown { position, surface: SURFACE }, at - Duration::from_millis(150)),
            (Message::TapUp { position, surface: SURFACE }, at - Duration::from_millis(120)),
            (Message::TapDown { position, surface: SURFACE }, at - Duration::from_millis(30)),
            (Message::TapUp { position, surface: SURFACE }, at),
        ];
        for (message, when) in steps {
            effects.extend(state.handle(message, when, Some(&mut *player)));
        }
        effects
    }

    /// A single follow-up tap inside an armed session.
    fn re_tap(
        state: &mut State,
        player: &mut MockPlayer,
        position: Point,
        at: Instant,
    ) -> Vec<Effect> {
        let mut effects = state.handle(
            Message::TapDown { position, surface: SURFACE },
            at - Duration::from_millis(20),
            Some(&mut *player),
        );
        effects.extend(state.handle(
            Message::TapUp { position, surface: SURFACE },
            at,
            Some(&mut *player),
        ));
        effects
    }

    #[test]
    fn single_tap_does_nothing() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let now = Instant::now();

        let position = Point::new(800.0, 300.0);
        state.handle(Message::TapDown { position, surface: SURFACE }, now, Some(&mut player));
        let effects = state.handle(
            Message::TapUp { position, surface: SURFACE },
            now + Duration::from_millis(30),
            Some(&mut player),
        );

        assert!(effects.is_empty());
        assert!(!state.is_in_double_tap_mode());
        assert!(player.seeks.is_empty());
    }

    #[test]
    fn double_tap_in_forward_zone_seeks_and_shows_overlay() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let now = Instant::now();

        let effects = double_tap(&mut state, &mut player, Point::new(800.0, 300.0), now);

        assert_eq!(effects, vec![Effect::AnimationStarted]);
        assert!(state.is_in_double_tap_mode());
        assert_eq!(player.seeks, vec![60_000]);
        let render = state.render_state(now);
        assert!(render.visible);
        assert_eq!(render.seconds, 10);
    }

    #[test]
    fn rapid_retaps_compound_without_reshowing() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);
        let effects = re_tap(
            &mut state,
            &mut player,
            Point::new(900.0, 300.0),
            start + Duration::from_millis(200),
        );

        // No AnimationStarted: the overlay reset in place.
        assert!(effects.is_empty());
        assert_eq!(player.seeks, vec![60_000, 70_000]);
        assert_eq!(
            state.render_state(start + Duration::from_millis(200)).seconds,
            20
        );
    }

    #[test]
    fn direction_flip_mid_session_restarts_the_count() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);
        re_tap(&mut state, &mut player, Point::new(900.0, 300.0), start + Duration::from_millis(200));
        let effects = re_tap(
            &mut state,
            &mut player,
            Point::new(100.0, 300.0),
            start + Duration::from_millis(400),
        );

        assert!(effects.is_empty());
        assert_eq!(player.seeks, vec![60_000, 70_000, 60_000]);
        let render = state.render_state(start + Duration::from_millis(400));
        assert_eq!(render.seconds, 10);
        assert_eq!(render.anchor, crate::domain::AnchorSide::Start);
    }

    #[test]
    fn middle_zone_tap_is_ignored_but_session_stays_armed() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        let effects = double_tap(&mut state, &mut player, Point::new(500.0, 300.0), start);

        assert!(effects.is_empty());
        assert!(state.is_in_double_tap_mode());
        assert!(player.seeks.is_empty());
        assert!(!state.is_overlay_visible());
    }

    #[test]
    fn unusable_media_cancels_the_session() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        player.playback_state = PlaybackState::Error;
        let start = Instant::now();

        let effects = double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);

        assert!(effects.is_empty());
        assert!(!state.is_in_double_tap_mode());
        assert!(player.seeks.is_empty());
    }

    #[test]
    fn unusable_media_mid_session_tears_overlay_down() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);
        assert!(state.is_overlay_visible());

        player.playback_state = PlaybackState::Ended;
        let effects = re_tap(
            &mut state,
            &mut player,
            Point::new(800.0, 300.0),
            start + Duration::from_millis(200),
        );

        assert_eq!(effects, vec![Effect::AnimationEnded]);
        assert!(!state.is_in_double_tap_mode());
        assert!(!state.is_overlay_visible());
    }

    #[test]
    fn rewind_to_start_raises_edge_triggered_signal() {
        let mut state = State::default();
        let mut player = MockPlayer::new(3_000, 100_000);
        let start = Instant::now();

        let effects = double_tap(&mut state, &mut player, Point::new(100.0, 300.0), start);
        assert_eq!(effects, vec![Effect::AnimationStarted, Effect::StartReached]);
        assert_eq!(player.seeks, vec![0]);

        // Position is pinned at 0 now; the policy refuses further rewinds,
        // so no second signal can fire without time elapsing.
        let effects = re_tap(
            &mut state,
            &mut player,
            Point::new(100.0, 300.0),
            start + Duration::from_millis(200),
        );
        assert!(effects.is_empty());
        assert_eq!(player.seeks, vec![0]);
    }

    #[test]
    fn forward_to_end_raises_end_signal_once() {
        let mut state = State::default();
        let mut player = MockPlayer::new(95_000, 100_000);
        let start = Instant::now();

        let effects = double_tap(&mut state, &mut player, Point::new(900.0, 300.0), start);
        assert_eq!(effects, vec![Effect::AnimationStarted, Effect::EndReached]);
        assert_eq!(player.seeks, vec![100_000]);
    }

    #[test]
    fn session_expires_without_taps() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);
        assert!(state.is_in_double_tap_mode());

        let after_deadline = start + Duration::from_millis(651);
        state.handle(Message::Tick, after_deadline, Some(&mut player));
        assert!(!state.is_in_double_tap_mode());
        assert!(state.next_deadline().is_none());
    }

    #[test]
    fn overlay_completes_naturally_after_expiry() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);

        let done = start + Duration::from_millis(651);
        let effects = state.handle(Message::Tick, done, Some(&mut player));
        assert_eq!(effects, vec![Effect::AnimationEnded]);
        assert!(!state.render_state(done).visible);
        assert_eq!(state.render_state(done).seconds, 0);
    }

    #[test]
    fn cancel_is_synchronous_and_total() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);
        let effects = state.handle(Message::Cancel, start + Duration::from_millis(100), Some(&mut player));

        assert_eq!(effects, vec![Effect::AnimationEnded]);
        assert!(!state.is_in_double_tap_mode());
        assert!(!state.is_overlay_visible());
    }

    #[test]
    fn missing_engine_degrades_to_a_no_op() {
        let mut state = State::default();
        let position = Point::new(800.0, 300.0);
        let now = Instant::now();

        let steps = [
            (Message::TapDown { position, surface: SURFACE }, now),
            (Message::TapUp { position, surface: SURFACE }, now + Duration::from_millis(30)),
            (Message::TapDown { position, surface: SURFACE }, now + Duration::from_millis(120)),
            (Message::TapUp { position, surface: SURFACE }, now + Duration::from_millis(150)),
        ];
        for (message, when) in steps {
            assert!(state.handle(message, when, None).is_empty());
        }

        // The session machinery still advanced; it never deadlocks
        // waiting on an absent collaborator.
        assert!(state.is_in_double_tap_mode());
        assert!(!state.is_overlay_visible());
    }

    #[test]
    fn host_detected_double_tap_arms_the_session() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let now = Instant::now();
        let position = Point::new(800.0, 300.0);

        state.handle(
            Message::DoubleTap { position, surface: SURFACE },
            now,
            Some(&mut player),
        );
        assert!(state.is_in_double_tap_mode());

        // The next tap-up inside the window is a seek command.
        let effects = state.handle(
            Message::TapUp { position, surface: SURFACE },
            now + Duration::from_millis(100),
            Some(&mut player),
        );
        assert_eq!(effects, vec![Effect::AnimationStarted]);
        assert_eq!(player.seeks, vec![60_000]);
    }

    #[test]
    fn mid_range_seek_keeps_the_window_alive() {
        let mut state = State::default();
        let mut player = MockPlayer::new(50_000, 100_000);
        let start = Instant::now();

        double_tap(&mut state, &mut player, Point::new(800.0, 300.0), start);
        let deadline = state.next_deadline().expect("session is armed");
        assert!(deadline >= start + Duration::from_millis(650));
    }
}
