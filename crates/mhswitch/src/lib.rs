//! Animated on/off switch control with a draggable knob.
//!
//! [`Switch`] is a [`Widget`] composed of three layers: a track whose fill and
//! labels cross-fade with the knob position, the knob itself, and an outline.
//! State changes animate over a fixed duration driven by host frame callbacks.
//!
//! # Example
//!
//! ```
//! use mhswitch::{Color, Event, MouseButton, Point, Rect, Switch, SwitchChanged, Widget};
//!
//! let mut switch = Switch::new()
//!     .on_text("On")
//!     .off_text("Off")
//!     .on_color(Color::GREEN);
//! switch.layout(Rect::new(0.0, 0.0, 77.0, 27.0));
//!
//! let at = Point::new(20.0, 13.0);
//! switch.event(&Event::MouseDown { position: at, button: MouseButton::Left });
//! let msg = switch.event(&Event::MouseUp { position: at, button: MouseButton::Left });
//! let changed = msg.and_then(|m| m.downcast::<SwitchChanged>().ok());
//! assert_eq!(changed.map(|c| c.on), Some(true));
//!
//! while switch.tick(1.0 / 60.0) {}
//! assert_eq!(switch.progress(), 1.0);
//! ```

pub mod error;
mod gesture;
pub mod layer;
pub mod style;
mod switch;

pub use error::StyleError;
pub use gesture::DRAG_SLOP;
pub use layer::{BorderLayer, KnobLayer, Layer, ToggleLayer};
pub use style::SwitchStyle;
pub use switch::{Switch, SwitchChanged, DEFAULT_SIZE, KNOB_INSET, TRANSITION_DURATION};

pub use mhswitch_core::{
    Canvas, Color, Constraints, DrawCommand, Event, Font, FontWeight, MouseButton, Point, Rect,
    RecordingCanvas, Size, TextStyle, TouchId, Widget,
};
