//! Renderable layers composing the switch.
//!
//! Each layer owns a frame and the visual properties it paints with. The
//! switch lays the layers out and pushes style into them; hosts get shared
//! references only, so frames can't be moved from outside.

mod border;
mod knob;
mod toggle;

pub use border::BorderLayer;
pub use knob::KnobLayer;
pub use toggle::ToggleLayer;

use mhswitch_core::{Canvas, Rect};

/// A drawable region with a redraw hook.
pub trait Layer: std::fmt::Debug + Send + Sync {
    /// Region the layer paints into, in the switch's coordinate space.
    fn frame(&self) -> Rect;

    /// Multiplier applied to every color the layer paints.
    fn opacity(&self) -> f32 {
        1.0
    }

    /// Paint the layer.
    fn draw(&self, canvas: &mut dyn Canvas);
}
