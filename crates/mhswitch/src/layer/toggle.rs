//! Track background with on/off colors and labels.

use super::Layer;
use mhswitch_core::{Canvas, Color, Font, Point, Rect, TextStyle};

/// Track background.
///
/// Fill blends from `off_color` to `on_color` with progress. The on label
/// sits in the track area left of the knob, the off label in the area to its
/// right, and their opacities cross-fade with the same progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleLayer {
    frame: Rect,
    knob_frame: Rect,
    progress: f32,
    corner_radius: f32,
    on_color: Color,
    off_color: Color,
    on_text: String,
    off_text: String,
    on_text_color: Color,
    off_text_color: Color,
    font: Font,
    opacity: f32,
}

impl Default for ToggleLayer {
    fn default() -> Self {
        Self {
            frame: Rect::default(),
            knob_frame: Rect::default(),
            progress: 0.0,
            corner_radius: 0.0,
            on_color: Color::new(0.3, 0.85, 0.39, 1.0),
            off_color: Color::new(0.93, 0.93, 0.93, 1.0),
            on_text: "ON".to_string(),
            off_text: "OFF".to_string(),
            on_text_color: Color::WHITE,
            off_text_color: Color::new(0.45, 0.45, 0.45, 1.0),
            font: Font::system_bold(14.0),
            opacity: 1.0,
        }
    }
}

impl ToggleLayer {
    /// Fill color when fully on.
    #[must_use]
    pub const fn on_color(&self) -> Color {
        self.on_color
    }

    /// Fill color when fully off.
    #[must_use]
    pub const fn off_color(&self) -> Color {
        self.off_color
    }

    /// Label shown on the on side.
    #[must_use]
    pub fn on_text(&self) -> &str {
        &self.on_text
    }

    /// Label shown on the off side.
    #[must_use]
    pub fn off_text(&self) -> &str {
        &self.off_text
    }

    /// On label color.
    #[must_use]
    pub const fn on_text_color(&self) -> Color {
        self.on_text_color
    }

    /// Off label color.
    #[must_use]
    pub const fn off_text_color(&self) -> Color {
        self.off_text_color
    }

    /// Label font.
    #[must_use]
    pub const fn font(&self) -> &Font {
        &self.font
    }

    /// Corner radius of the track.
    #[must_use]
    pub const fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Progress last pushed by the switch (0 = off, 1 = on).
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Fill color at the current progress, before opacity.
    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.off_color.lerp(&self.on_color, self.progress)
    }

    /// On label opacity at the current progress.
    #[must_use]
    pub fn on_label_alpha(&self) -> f32 {
        self.progress * self.opacity
    }

    /// Off label opacity at the current progress.
    #[must_use]
    pub fn off_label_alpha(&self) -> f32 {
        (1.0 - self.progress) * self.opacity
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_knob_frame(&mut self, knob_frame: Rect) {
        self.knob_frame = knob_frame;
    }

    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    pub(crate) fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
    }

    pub(crate) fn set_on_color(&mut self, color: Color) {
        self.on_color = color;
    }

    pub(crate) fn set_off_color(&mut self, color: Color) {
        self.off_color = color;
    }

    pub(crate) fn set_on_text(&mut self, text: String) {
        self.on_text = text;
    }

    pub(crate) fn set_off_text(&mut self, text: String) {
        self.off_text = text;
    }

    pub(crate) fn set_on_text_color(&mut self, color: Color) {
        self.on_text_color = color;
    }

    pub(crate) fn set_off_text_color(&mut self, color: Color) {
        self.off_text_color = color;
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    fn draw_label(
        &self,
        canvas: &mut dyn Canvas,
        text: &str,
        region: Rect,
        color: Color,
        alpha: f32,
    ) {
        if text.is_empty() || alpha <= 0.0 || region.width <= 0.0 {
            return;
        }
        let center = region.center();
        let position = Point::new(
            center.x - self.font.text_width(text) / 2.0,
            center.y - self.font.line_height() / 2.0,
        );
        let style = TextStyle {
            font: self.font.clone(),
            color: color.fade(alpha),
        };
        canvas.draw_text(text, position, &style);
    }
}

impl Layer for ToggleLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let frame = self.frame;
        canvas.fill_rounded_rect(
            frame,
            self.corner_radius,
            self.fill_color().fade(self.opacity),
        );

        let knob = self.knob_frame;
        let on_region = Rect::new(frame.x, frame.y, knob.x - frame.x, frame.height);
        let off_region = Rect::new(
            knob.right(),
            frame.y,
            frame.right() - knob.right(),
            frame.height,
        );

        canvas.push_clip(frame);
        self.draw_label(
            canvas,
            &self.on_text,
            on_region,
            self.on_text_color,
            self.on_label_alpha(),
        );
        self.draw_label(
            canvas,
            &self.off_text,
            off_region,
            self.off_text_color,
            self.off_label_alpha(),
        );
        canvas.pop_clip();
    }
}
