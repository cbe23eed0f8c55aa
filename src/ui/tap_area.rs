// SPDX-License-Identifier: MPL-2.0
//! Transparent tap-capture surface laid over the video.
//!
//! Publishes raw tap events with the surface size they were measured
//! against; hosts map them into [`crate::component::Message`] and feed
//! them to the component together with the current instant.

use iced::widget::canvas;
use iced::{mouse, Point, Rectangle, Size, Theme};

/// Raw tap published by [`TapArea`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapEvent {
    /// Left button/finger went down inside the surface.
    Down { position: Point, surface: Size },
    /// Left button/finger came up inside the surface.
    Up { position: Point, surface: Size },
}

impl From<TapEvent> for crate::component::Message {
    fn from(event: TapEvent) -> Self {
        match event {
            TapEvent::Down { position, surface } => Self::TapDown { position, surface },
            TapEvent::Up { position, surface } => Self::TapUp { position, surface },
        }
    }
}

/// Invisible canvas program that captures left-button presses and
/// releases inside its bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TapArea;

impl canvas::Program<TapEvent> for TapArea {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<TapEvent>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(TapEvent::Down {
                        position,
                        surface: bounds.size(),
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(TapEvent::Up {
                        position,
                        surface: bounds.size(),
                    })
                    .and_capture(),
                )
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &iced::Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        // Pure hit area; nothing to draw.
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Message;

    #[test]
    fn tap_events_map_to_component_messages() {
        let position = Point::new(120.0, 80.0);
        let surface = Size::new(1_000.0, 600.0);

        let down: Message = TapEvent::Down { position, surface }.into();
        assert_eq!(down, Message::TapDown { position, surface });

        let up: Message = TapEvent::Up { position, surface }.into();
        assert_eq!(up, Message::TapUp { position, surface });
    }
}
