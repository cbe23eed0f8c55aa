// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: Double-tap recognition and session deadline timing
//! - **Seek**: Per-tap seek increment and decision-zone geometry
//! - **Overlay**: Reveal animation timing, radii, and arc geometry

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default gesture-session deadline in milliseconds. Each tap inside an
/// armed session slides the deadline forward by this amount.
pub const DEFAULT_DOUBLE_TAP_DELAY_MS: u64 = 650;

/// Minimum allowed session deadline (milliseconds).
pub const MIN_DOUBLE_TAP_DELAY_MS: u64 = 100;

/// Maximum allowed session deadline (milliseconds).
pub const MAX_DOUBLE_TAP_DELAY_MS: u64 = 2_000;

/// Window between two tap-downs for them to count as a double tap
/// (milliseconds). Matches the conventional platform double-tap timeout.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default seconds added to or removed from the playback position per tap.
pub const DEFAULT_SEEK_INCREMENT_SECS: u32 = 10;

/// Minimum allowed per-tap seek increment (seconds).
pub const MIN_SEEK_INCREMENT_SECS: u32 = 1;

/// Maximum allowed per-tap seek increment (seconds).
pub const MAX_SEEK_INCREMENT_SECS: u32 = 120;

/// Taps left of this fraction of the surface width mean rewind.
pub const REWIND_ZONE_FRACTION: f32 = 0.35;

/// Taps right of this fraction of the surface width mean forward.
pub const FORWARD_ZONE_FRACTION: f32 = 0.65;

/// Rewind taps are ignored until playback has advanced past this point
/// (milliseconds).
pub const MIN_REWIND_POSITION_MS: u64 = 500;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default duration of the expanding-circle reveal animation (milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 650;

/// Minimum allowed reveal animation duration (milliseconds).
pub const MIN_ANIMATION_DURATION_MS: u64 = 100;

/// Maximum allowed reveal animation duration (milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 5_000;

/// Default duration of one full icon fade cycle (milliseconds).
pub const DEFAULT_ICON_CYCLE_MS: u64 = 750;

/// Minimum allowed icon fade cycle (milliseconds).
pub const MIN_ICON_CYCLE_MS: u64 = 100;

/// Maximum allowed icon fade cycle (milliseconds).
pub const MAX_ICON_CYCLE_MS: u64 = 5_000;

/// Radius of the tap circle when the reveal starts (logical pixels).
pub const MIN_REVEAL_RADIUS: f32 = 30.0;

/// Radius of the tap circle when the reveal completes (logical pixels).
pub const MAX_REVEAL_RADIUS: f32 = 400.0;

/// Default size of the arc clipped out of the background shape
/// (logical pixels). The greater the value the more roundish the shape.
pub const DEFAULT_ARC_SIZE: f32 = 80.0;

/// Minimum allowed arc size (logical pixels).
pub const MIN_ARC_SIZE: f32 = 10.0;

/// Maximum allowed arc size (logical pixels).
pub const MAX_ARC_SIZE: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gesture validation
    assert!(MIN_DOUBLE_TAP_DELAY_MS > 0);
    assert!(MAX_DOUBLE_TAP_DELAY_MS >= MIN_DOUBLE_TAP_DELAY_MS);
    assert!(DEFAULT_DOUBLE_TAP_DELAY_MS >= MIN_DOUBLE_TAP_DELAY_MS);
    assert!(DEFAULT_DOUBLE_TAP_DELAY_MS <= MAX_DOUBLE_TAP_DELAY_MS);
    assert!(DOUBLE_TAP_WINDOW_MS > 0);
    assert!(DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_DELAY_MS);

    // Seek validation
    assert!(MIN_SEEK_INCREMENT_SECS > 0);
    assert!(MAX_SEEK_INCREMENT_SECS >= MIN_SEEK_INCREMENT_SECS);
    assert!(DEFAULT_SEEK_INCREMENT_SECS >= MIN_SEEK_INCREMENT_SECS);
    assert!(DEFAULT_SEEK_INCREMENT_SECS <= MAX_SEEK_INCREMENT_SECS);
    assert!(REWIND_ZONE_FRACTION > 0.0);
    assert!(REWIND_ZONE_FRACTION < FORWARD_ZONE_FRACTION);
    assert!(FORWARD_ZONE_FRACTION < 1.0);
    assert!(MIN_REWIND_POSITION_MS > 0);

    // Overlay validation
    assert!(MIN_ANIMATION_DURATION_MS > 0);
    assert!(MAX_ANIMATION_DURATION_MS >= MIN_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS >= MIN_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(MIN_ICON_CYCLE_MS > 0);
    assert!(DEFAULT_ICON_CYCLE_MS >= MIN_ICON_CYCLE_MS);
    assert!(DEFAULT_ICON_CYCLE_MS <= MAX_ICON_CYCLE_MS);
    assert!(MIN_REVEAL_RADIUS > 0.0);
    assert!(MAX_REVEAL_RADIUS > MIN_REVEAL_RADIUS);
    assert!(MIN_ARC_SIZE > 0.0);
    assert!(MAX_ARC_SIZE >= MIN_ARC_SIZE);
    assert!(DEFAULT_ARC_SIZE >= MIN_ARC_SIZE);
    assert!(DEFAULT_ARC_SIZE <= MAX_ARC_SIZE);
};
