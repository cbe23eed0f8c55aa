// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and
//! saving tuning overrides from a `settings.toml` file and resolving them
//! into the immutable, range-validated [`TapSeekConfig`] consumed by the
//! interaction layer.
//!
//! # Examples
//!
//! ```no_run
//! use tapseek::config::{self, Config};
//!
//! // Load existing overrides (all fields optional)
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.double_tap_delay_ms = Some(800);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Resolve into the validated runtime struct
//! let resolved = config.resolve();
//! assert_eq!(resolved.double_tap_delay.millis(), 800);
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::{AnimationDuration, ArcSize, DoubleTapDelay, IconCycleDuration, SeekIncrement};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TapSeek";

/// Persisted tuning overrides. Absent fields fall back to the defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub double_tap_delay_ms: Option<u64>,
    #[serde(default)]
    pub animation_duration_ms: Option<u64>,
    #[serde(default)]
    pub icon_animation_duration_ms: Option<u64>,
    #[serde(default)]
    pub seek_increment_seconds: Option<u32>,
    #[serde(default)]
    pub arc_size: Option<f32>,
}

impl Config {
    /// Resolves the overrides into the validated runtime configuration.
    #[must_use]
    pub fn resolve(&self) -> TapSeekConfig {
        TapSeekConfig {
            double_tap_delay: self
                .double_tap_delay_ms
                .map_or_else(DoubleTapDelay::default, DoubleTapDelay::new),
            animation_duration: self
                .animation_duration_ms
                .map_or_else(AnimationDuration::default, AnimationDuration::new),
            icon_cycle: self
                .icon_animation_duration_ms
                .map_or_else(IconCycleDuration::default, IconCycleDuration::new),
            seek_increment: self
                .seek_increment_seconds
                .map_or_else(SeekIncrement::default, SeekIncrement::new),
            arc_size: self.arc_size.map_or_else(ArcSize::default, ArcSize::new),
        }
    }
}

/// Immutable runtime configuration of the double-tap layer.
///
/// Every field is a clamping newtype, so a constructed value is valid by
/// construction. Presentation-only values (colors, text size) live in
/// [`crate::ui::style`] and are passed straight through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TapSeekConfig {
    /// Gesture-session deadline; each tap slides it forward.
    pub double_tap_delay: DoubleTapDelay,
    /// Duration of the expanding-circle reveal.
    pub animation_duration: AnimationDuration,
    /// Duration of one icon fade cycle.
    pub icon_cycle: IconCycleDuration,
    /// Seconds seeked per accepted tap.
    pub seek_increment: SeekIncrement,
    /// Arc size of the overlay background shape.
    pub arc_size: ArcSize,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
