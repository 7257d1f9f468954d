// SPDX-License-Identifier: MPL-2.0
//! Pointer surface laid over the preview.
//!
//! Translates mouse input on the preview into press/move/release messages
//! in canvas coordinates. The editor decides what a move means; this
//! program only reports where the pointer is.

use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Color, Rectangle, Renderer, Theme};

/// Pointer input on the preview, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMessage {
    Pressed { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    /// Button released or pointer left the canvas.
    Released,
}

/// Canvas program handling panning input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSurface {
    /// No input is reported while no image is loaded.
    pub enabled: bool,
    pub dragging: bool,
}

impl PointerSurface {
    /// Maps a raw event to a pointer message.
    #[must_use]
    pub fn translate(
        &self,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PointerMessage> {
        if !self.enabled {
            return None;
        }

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
                .position_in(bounds)
                .map(|p| PointerMessage::Pressed { x: p.x, y: p.y }),
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.dragging => {
                match cursor.position_in(bounds) {
                    Some(p) => Some(PointerMessage::Moved { x: p.x, y: p.y }),
                    None => Some(PointerMessage::Released),
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft)
                if self.dragging =>
            {
                Some(PointerMessage::Released)
            }
            _ => None,
        }
    }
}

impl canvas::Program<PointerMessage> for PointerSurface {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<PointerMessage>> {
        self.translate(event, bounds, cursor)
            .map(|message| iced::widget::Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        if self.enabled {
            return Vec::new();
        }

        // Outline of the viewport while empty.
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let radius = bounds.width.min(bounds.height) / 2.0;
        let circle = Path::circle(frame.center(), (radius - 1.0).max(0.0));
        frame.stroke(
            &circle,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.3)),
        );
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !self.enabled || !cursor.is_over(bounds) {
            mouse::Interaction::default()
        } else if self.dragging {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        }
    }
}
