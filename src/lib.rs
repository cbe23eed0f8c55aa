// SPDX-License-Identifier: MPL-2.0
//! `tapseek` is a double-tap-to-seek interaction layer for video players
//! built around the Iced GUI framework.
//!
//! It detects rapid repeated taps on a media surface, decides whether each
//! tap means rewind or forward from the tap position and the playback
//! state, drives a boundary-clamped seek against a host-owned media
//! engine, and exposes the render state of an expanding circular reveal
//! with an accumulating seconds counter. Drawing and the media engine
//! itself stay with the host; the crate ships a thin Iced canvas pair for
//! both ends.

#![doc(html_root_url = "https://docs.rs/tapseek/0.1.0")]

pub mod component;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod overlay;
pub mod player;
pub mod seek;
pub mod ui;
