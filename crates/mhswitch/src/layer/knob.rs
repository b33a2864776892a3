//! Draggable knob.

use super::Layer;
use mhswitch_core::{Canvas, Color, Rect};

/// Circular knob with a pressed variant.
///
/// The frame is a square positioned by the switch from the current
/// animation progress; the circle is inscribed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobLayer {
    frame: Rect,
    highlighted: bool,
    knob_color: Color,
    highlighted_knob_color: Color,
    opacity: f32,
}

impl Default for KnobLayer {
    fn default() -> Self {
        Self {
            frame: Rect::default(),
            highlighted: false,
            knob_color: Color::WHITE,
            highlighted_knob_color: Color::new(0.85, 0.85, 0.85, 1.0),
            opacity: 1.0,
        }
    }
}

impl KnobLayer {
    /// Whether a touch is currently pressing the knob.
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Fill color at rest.
    #[must_use]
    pub const fn knob_color(&self) -> Color {
        self.knob_color
    }

    /// Fill color while pressed.
    #[must_use]
    pub const fn highlighted_knob_color(&self) -> Color {
        self.highlighted_knob_color
    }

    /// Color the next draw will fill with.
    #[must_use]
    pub const fn current_color(&self) -> Color {
        if self.highlighted {
            self.highlighted_knob_color
        } else {
            self.knob_color
        }
    }

    /// Knob radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.frame.width.min(self.frame.height) / 2.0
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub(crate) fn set_knob_color(&mut self, color: Color) {
        self.knob_color = color;
    }

    pub(crate) fn set_highlighted_knob_color(&mut self, color: Color) {
        self.highlighted_knob_color = color;
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

impl Layer for KnobLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let radius = self.radius();
        if radius <= 0.0 {
            return;
        }
        canvas.fill_circle(
            self.frame.center(),
            radius,
            self.current_color().fade(self.opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhswitch_core::{DrawCommand, Point, RecordingCanvas};

    fn knob() -> KnobLayer {
        let mut knob = KnobLayer::default();
        knob.set_frame(Rect::new(2.0, 2.0, 23.0, 23.0));
        knob
    }

    #[test]
    fn test_knob_draws_inscribed_circle() {
        let mut canvas = RecordingCanvas::new();
        knob().draw(&mut canvas);
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::filled_circle(
                Point::new(13.5, 13.5),
                11.5,
                Color::WHITE
            )]
        );
    }

    #[test]
    fn test_knob_highlighted_uses_pressed_color() {
        let mut knob = knob();
        knob.set_highlighted_knob_color(Color::RED);
        knob.set_highlighted(true);
        assert!(knob.is_highlighted());
        assert_eq!(knob.current_color(), Color::RED);

        let mut canvas = RecordingCanvas::new();
        knob.draw(&mut canvas);
        assert!(matches!(
            &canvas.commands()[0],
            DrawCommand::Circle { style, .. } if style.fill == Some(Color::RED)
        ));

        knob.set_highlighted(false);
        assert_eq!(knob.current_color(), Color::WHITE);
    }

    #[test]
    fn test_knob_empty_frame_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        KnobLayer::default().draw(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_knob_color_setter() {
        let mut knob = knob();
        knob.set_knob_color(Color::BLUE);
        assert_eq!(knob.knob_color(), Color::BLUE);
        assert_eq!(knob.current_color(), Color::BLUE);
    }
}
