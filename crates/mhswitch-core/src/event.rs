//! Input and frame events delivered to widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled by the system (e.g., palm rejection, gesture takeover)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    /// Display refresh callback
    AnimationFrame {
        /// Seconds since the previous frame
        dt: f64,
    },
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Device a pointer sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Primary mouse button
    Mouse,
    /// A single touch
    Touch(TouchId),
}

/// Phase of a press-drag-release gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Contact began
    Down,
    /// Contact moved
    Move,
    /// Contact lifted
    Up,
    /// Contact aborted by the system
    Cancel,
}

/// Mouse and touch input folded into one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Originating device
    pub source: PointerSource,
    /// Gesture phase
    pub phase: PointerPhase,
    /// Position, absent for cancellations
    pub position: Option<Point>,
}

impl Event {
    /// Check if this is a mouse event.
    #[must_use]
    pub const fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseMove { .. } | Self::MouseDown { .. } | Self::MouseUp { .. }
        )
    }

    /// Check if this is a touch event.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel { .. }
        )
    }

    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchMove { position, .. }
            | Self::TouchEnd { position, .. } => Some(*position),
            Self::TouchCancel { .. } | Self::AnimationFrame { .. } => None,
        }
    }

    /// Normalize to a pointer sample.
    ///
    /// Only the left mouse button participates; other buttons yield `None`.
    #[must_use]
    pub fn as_pointer(&self) -> Option<PointerSample> {
        let (source, phase, position) = match *self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            } => (PointerSource::Mouse, PointerPhase::Down, Some(position)),
            Self::MouseMove { position } => {
                (PointerSource::Mouse, PointerPhase::Move, Some(position))
            }
            Self::MouseUp {
                position,
                button: MouseButton::Left,
            } => (PointerSource::Mouse, PointerPhase::Up, Some(position)),
            Self::TouchStart { id, position } => {
                (PointerSource::Touch(id), PointerPhase::Down, Some(position))
            }
            Self::TouchMove { id, position } => {
                (PointerSource::Touch(id), PointerPhase::Move, Some(position))
            }
            Self::TouchEnd { id, position } => {
                (PointerSource::Touch(id), PointerPhase::Up, Some(position))
            }
            Self::TouchCancel { id } => (PointerSource::Touch(id), PointerPhase::Cancel, None),
            _ => return None,
        };
        Some(PointerSample {
            source,
            phase,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_classification() {
        let down = Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Left,
        };
        assert!(down.is_mouse());
        assert!(!down.is_touch());

        let cancel = Event::TouchCancel { id: TouchId(1) };
        assert!(cancel.is_touch());
        assert!(!cancel.is_mouse());

        let frame = Event::AnimationFrame { dt: 0.016 };
        assert!(!frame.is_mouse());
        assert!(!frame.is_touch());
    }

    #[test]
    fn test_event_position() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Event::MouseMove { position: p }.position(), Some(p));
        assert_eq!(
            Event::TouchEnd {
                id: TouchId(0),
                position: p
            }
            .position(),
            Some(p)
        );
        assert_eq!(Event::TouchCancel { id: TouchId(0) }.position(), None);
        assert_eq!(Event::AnimationFrame { dt: 0.0 }.position(), None);
    }

    #[test]
    fn test_as_pointer_left_mouse() {
        let sample = Event::MouseDown {
            position: Point::new(1.0, 2.0),
            button: MouseButton::Left,
        }
        .as_pointer()
        .unwrap();
        assert_eq!(sample.source, PointerSource::Mouse);
        assert_eq!(sample.phase, PointerPhase::Down);
        assert_eq!(sample.position, Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_as_pointer_ignores_other_buttons() {
        for button in [MouseButton::Right, MouseButton::Middle] {
            let down = Event::MouseDown {
                position: Point::ORIGIN,
                button,
            };
            let up = Event::MouseUp {
                position: Point::ORIGIN,
                button,
            };
            assert!(down.as_pointer().is_none());
            assert!(up.as_pointer().is_none());
        }
    }

    #[test]
    fn test_as_pointer_touch_phases() {
        let id = TouchId(7);
        let p = Point::new(5.0, 5.0);
        let phases: Vec<_> = [
            Event::TouchStart { id, position: p },
            Event::TouchMove { id, position: p },
            Event::TouchEnd { id, position: p },
            Event::TouchCancel { id },
        ]
        .iter()
        .filter_map(Event::as_pointer)
        .map(|s| {
            assert_eq!(s.source, PointerSource::Touch(id));
            s.phase
        })
        .collect();
        assert_eq!(
            phases,
            vec![
                PointerPhase::Down,
                PointerPhase::Move,
                PointerPhase::Up,
                PointerPhase::Cancel
            ]
        );
    }

    #[test]
    fn test_frame_is_not_pointer() {
        assert!(Event::AnimationFrame { dt: 0.016 }.as_pointer().is_none());
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::TouchMove {
            id: TouchId(2),
            position: Point::new(10.0, 12.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
