// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the seek overlay.
//!
//! Pure presentation: none of these values feed back into the interaction
//! core. Hosts override them through [`OverlayStyle`].

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Expanding tap circle.
    pub const TAP_CIRCLE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.3,
    };

    /// Side-anchored background shape behind the circle.
    pub const CIRCLE_BACKGROUND: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.18,
    };

    /// Seconds label and direction icons.
    pub const LABEL: Color = Color::WHITE;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Seconds label text size (logical pixels).
    pub const LABEL_TEXT: f32 = 16.0;

    /// Edge length of one direction triangle (logical pixels).
    pub const ICON: f32 = 14.0;

    /// Gap between the triangles of the icon row (logical pixels).
    pub const ICON_GAP: f32 = 6.0;

    /// Vertical gap between the icon row and the label (logical pixels).
    pub const ICON_LABEL_GAP: f32 = 24.0;
}

/// Colors and text sizing of the overlay, passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Color of the scaling circle on touch feedback.
    pub tap_circle: Color,
    /// Color of the clipped background shape.
    pub circle_background: Color,
    /// Color of the seconds label and icons.
    pub label: Color,
    /// Seconds label text size.
    pub text_size: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            tap_circle: palette::TAP_CIRCLE,
            circle_background: palette::CIRCLE_BACKGROUND,
            label: palette::LABEL,
            text_size: sizing::LABEL_TEXT,
        }
    }
}

const _: () = {
    assert!(sizing::LABEL_TEXT > 0.0);
    assert!(sizing::ICON > 0.0);
};
