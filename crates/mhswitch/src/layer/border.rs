//! Decorative outline around the track.

use super::Layer;
use mhswitch_core::{Canvas, Color, Rect};

/// Stroked rounded-rectangle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderLayer {
    frame: Rect,
    corner_radius: f32,
    border_color: Color,
    border_width: f32,
    opacity: f32,
}

impl Default for BorderLayer {
    fn default() -> Self {
        Self {
            frame: Rect::default(),
            corner_radius: 0.0,
            border_color: Color::new(0.75, 0.75, 0.75, 1.0),
            border_width: 1.0,
            opacity: 1.0,
        }
    }
}

impl BorderLayer {
    /// Corner radius of the outline.
    #[must_use]
    pub const fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Stroke color.
    #[must_use]
    pub const fn border_color(&self) -> Color {
        self.border_color
    }

    /// Stroke width.
    #[must_use]
    pub const fn border_width(&self) -> f32 {
        self.border_width
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
    }

    pub(crate) fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    pub(crate) fn set_border_width(&mut self, width: f32) {
        self.border_width = width.max(0.0);
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

impl Layer for BorderLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.border_width <= 0.0 || self.border_color.a <= 0.0 {
            return;
        }
        // Stroke is centered on the path; keep it inside the frame.
        let half = self.border_width / 2.0;
        let rect = self.frame.inset(half);
        let radius = (self.corner_radius - half).max(0.0);
        canvas.stroke_rounded_rect(
            rect,
            radius,
            self.border_color.fade(self.opacity),
            self.border_width,
        );
    }
}
