// SPDX-License-Identifier: MPL-2.0
//! Iced widget pair for the double-tap layer.
//!
//! [`TapArea`] captures raw taps over the video surface;
//! [`OverlayCanvas`] renders the controller's overlay state. Neither holds
//! interaction logic of its own.

pub mod overlay_canvas;
pub mod style;
pub mod tap_area;

pub use overlay_canvas::OverlayCanvas;
pub use style::OverlayStyle;
pub use tap_area::{TapArea, TapEvent};
