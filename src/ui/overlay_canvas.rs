// SPDX-License-Identifier: MPL-2.0
//! Seek overlay renderer using Canvas.
//!
//! Draw-only: everything it shows comes out of the controller's
//! [`RenderState`]. The background is the side-anchored shape of the
//! original tap feedback (a half-surface slab whose inner edge bulges
//! with a quadratic arc) with the expanding tap circle, the direction
//! icons, and the seconds label on top.

use crate::domain::{AnchorSide, ArcSize};
use crate::overlay::RenderState;
use crate::ui::style::{sizing, OverlayStyle};
use iced::widget::canvas::{self, Frame, Path, Text};
use iced::{mouse, Color, Point, Rectangle, Theme};

/// Canvas program rendering one frame of the seek overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCanvas {
    state: RenderState,
    style: OverlayStyle,
    arc_size: f32,
}

impl OverlayCanvas {
    /// Creates a renderer for the given overlay snapshot.
    #[must_use]
    pub fn new(state: RenderState, style: OverlayStyle, arc_size: ArcSize) -> Self {
        Self {
            state,
            style,
            arc_size: arc_size.value(),
        }
    }

    /// Side-anchored background path.
    ///
    /// Anchored to the left or right surface edge depending on which half
    /// the circle sits in, spanning half the width minus the arc, with a
    /// quadratic bulge towards the middle of the surface.
    fn background_path(&self, bounds: Rectangle) -> Path {
        let half_width = bounds.width * 0.5;
        let is_left = self.state.circle_center.x <= half_width;

        let w = if is_left { 0.0 } else { bounds.width };
        let f = if is_left { 1.0 } else { -1.0 };

        let mut builder = canvas::path::Builder::new();
        builder.move_to(Point::new(w, 0.0));
        builder.line_to(Point::new(f * (half_width - self.arc_size) + w, 0.0));
        builder.quadratic_curve_to(
            Point::new(f * (half_width + self.arc_size) + w, bounds.height / 2.0),
            Point::new(f * (half_width - self.arc_size) + w, bounds.height),
        );
        builder.line_to(Point::new(w, bounds.height));
        builder.close();
        builder.build()
    }

    /// One triangle of the direction icon row, pointing with the seek.
    fn triangle_path(&self, center: Point) -> Path {
        let half = sizing::ICON * 0.5;
        let tip = match self.state.anchor {
            AnchorSide::Start => -half,
            AnchorSide::End => half,
        };

        let mut builder = canvas::path::Builder::new();
        builder.move_to(Point::new(center.x - tip, center.y - half));
        builder.line_to(Point::new(center.x + tip, center.y));
        builder.line_to(Point::new(center.x - tip, center.y + half));
        builder.close();
        builder.build()
    }
}

impl<Message> canvas::Program<Message> for OverlayCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        if !self.state.visible {
            return Vec::new();
        }

        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill(&self.background_path(bounds), self.style.circle_background);

        let circle = Path::circle(self.state.circle_center, self.state.circle_radius);
        frame.fill(&circle, self.style.tap_circle);

        // Label block centered in the anchored half of the surface.
        let block_x = match self.state.anchor {
            AnchorSide::Start => bounds.width * 0.25,
            AnchorSide::End => bounds.width * 0.75,
        };
        let block_y = bounds.height / 2.0;

        let icon_color = Color {
            a: self.style.label.a * self.state.icon_alpha,
            ..self.style.label
        };
        let step = sizing::ICON + sizing::ICON_GAP;
        for offset in [-step, 0.0, step] {
            let triangle =
                self.triangle_path(Point::new(block_x + offset, block_y - sizing::ICON_LABEL_GAP));
            frame.fill(&triangle, icon_color);
        }

        let label = self.state.seconds_text();
        // No text measuring on the canvas; nudge left by an estimated
        // half-width to keep the label visually centered.
        let estimated_half_width = label.len() as f32 * self.style.text_size * 0.27;
        frame.fill_text(Text {
            content: label,
            position: Point::new(block_x - estimated_half_width, block_y),
            color: self.style.label,
            size: self.style.text_size.into(),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_state(visible: bool, center_x: f32, anchor: AnchorSide) -> RenderState {
        RenderState {
            visible,
            circle_center: Point::new(center_x, 300.0),
            circle_radius: 60.0,
            anchor,
            seconds: 20,
            icon_alpha: 0.5,
        }
    }

    #[test]
    fn renderer_carries_clamped_arc_size() {
        let program = OverlayCanvas::new(
            render_state(true, 800.0, AnchorSide::End),
            OverlayStyle::default(),
            ArcSize::new(10_000.0),
        );
        assert!((program.arc_size - crate::config::MAX_ARC_SIZE).abs() < f32::EPSILON);
    }

    #[test]
    fn seconds_text_matches_counter() {
        let state = render_state(true, 800.0, AnchorSide::End);
        assert_eq!(state.seconds_text(), "20 seconds");
    }
}
