//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by the host toolkit:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Paint**: Generate draw commands for rendering
//!
//! Input and display-refresh callbacks arrive through [`Widget::event`].
//!
//! # Examples
//!
//! ```
//! use mhswitch_core::{Font, FontWeight, TypeId};
//!
//! let font = Font::new("Helvetica", 14.0).weight(FontWeight::Bold);
//! assert_eq!(font.size, 14.0);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutResult {
    /// Computed size
    pub size: Size,
}

/// Core widget trait.
///
/// `event` returns an optional message for the host; widgets that emit
/// nothing return `None`.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events and display-refresh callbacks.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Called when the widget is removed from the hierarchy.
    fn detach(&mut self) {}

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a filled rectangle with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw a stroked rectangle with uniformly rounded corners.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

/// Font description.
///
/// Text metrics are approximated from the point size; backends with real
/// shaping can ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name, resolved by the rendering backend
    pub family: String,
    /// Point size
    pub size: f32,
    /// Weight
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    /// Family name backends map to their default UI face.
    pub const SYSTEM_FAMILY: &'static str = "system";

    /// Smallest accepted point size.
    pub const MIN_SIZE: f32 = 1.0;

    /// Create a regular-weight font.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size: size.max(Self::MIN_SIZE),
            weight: FontWeight::Normal,
        }
    }

    /// The backend's default UI face.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self::new(Self::SYSTEM_FAMILY, size)
    }

    /// The backend's default UI face in bold.
    #[must_use]
    pub fn system_bold(size: f32) -> Self {
        Self::system(size).weight(FontWeight::Bold)
    }

    /// Set the weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Approximate advance width of `text`.
    #[must_use]
    pub fn text_width(&self, text: &str) -> f32 {
        let advance = match self.weight {
            FontWeight::Bold => 0.6,
            _ => 0.55,
        };
        text.chars().count() as f32 * self.size * advance
    }

    /// Approximate line height.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(16.0)
    }
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font
    pub font: Font,
    /// Text color
    pub color: Color,
}
