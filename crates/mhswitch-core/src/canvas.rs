//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Commands issued while a clip is pushed are wrapped in
/// [`DrawCommand::Clip`] with the innermost clip bounds.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Recorded text commands as `(content, style)` pairs.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &TextStyle)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd.unclipped() {
                DrawCommand::Text { content, style, .. } => Some((content.as_str(), style)),
                _ => None,
            })
    }

    fn record(&mut self, command: DrawCommand) {
        let command = match self.current_clip() {
            Some(bounds) => DrawCommand::Clip {
                bounds,
                child: Box::new(command),
            },
            None => command,
        };
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::filled_rect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.record(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.record(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.record(DrawCommand::stroked_rounded_rect(
            rect,
            radius,
            StrokeStyle { color, width },
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.record(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 50.0), Color::RED);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, style, .. } => {
                assert_eq!(*bounds, Rect::new(10.0, 20.0, 100.0, 50.0));
                assert_eq!(style.fill, Some(Color::RED));
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_stroke_rounded_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_rounded_rect(Rect::new(0.0, 0.0, 50.0, 20.0), 10.0, Color::BLUE, 2.0);

        match &canvas.commands()[0] {
            DrawCommand::Rect { radius, style, .. } => {
                assert_eq!(*radius, CornerRadius::uniform(10.0));
                assert!(style.fill.is_none());
                assert_eq!(
                    style.stroke,
                    Some(StrokeStyle {
                        color: Color::BLUE,
                        width: 2.0
                    })
                );
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_stroke_rect_square_corners() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLACK, 1.0);
        assert!(matches!(
            &canvas.commands()[0],
            DrawCommand::Rect { radius, .. } if radius.is_zero()
        ));
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(5.0, 5.0), 4.0, Color::WHITE);
        assert_eq!(
            canvas.commands()[0],
            DrawCommand::filled_circle(Point::new(5.0, 5.0), 4.0, Color::WHITE)
        );
    }

    #[test]
    fn test_clip_wraps_commands() {
        let mut canvas = RecordingCanvas::new();
        let clip = Rect::new(0.0, 0.0, 20.0, 20.0);
        canvas.push_clip(clip);
        canvas.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::RED);
        canvas.pop_clip();
        canvas.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLUE);

        assert!(matches!(
            &canvas.commands()[0],
            DrawCommand::Clip { bounds, .. } if *bounds == clip
        ));
        assert!(matches!(&canvas.commands()[1], DrawCommand::Rect { .. }));
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_texts_sees_through_clips() {
        let mut canvas = RecordingCanvas::new();
        let style = TextStyle::default();
        canvas.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        canvas.draw_text("ON", Point::ORIGIN, &style);
        canvas.pop_clip();
        canvas.draw_text("OFF", Point::ORIGIN, &style);

        let texts: Vec<&str> = canvas.texts().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["ON", "OFF"]);
    }

    #[test]
    fn test_take_and_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::default(), Color::RED);
        canvas.push_clip(Rect::default());
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
        assert_eq!(canvas.clip_depth(), 1);
        canvas.clear();
        assert_eq!(canvas.clip_depth(), 0);
    }
}
