//! Press-drag-release tracking for the knob.

use mhswitch_core::{Point, PointerSource};

/// Horizontal movement, in pixels, before a press becomes a drag.
pub const DRAG_SLOP: f32 = 4.0;

/// State captured when a press starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tracking {
    source: PointerSource,
    start: Point,
    start_progress: f32,
    was_on: bool,
    dragging: bool,
}

impl Tracking {
    pub(crate) const fn new(
        source: PointerSource,
        start: Point,
        start_progress: f32,
        was_on: bool,
    ) -> Self {
        Self {
            source,
            start,
            start_progress,
            was_on,
            dragging: false,
        }
    }

    /// Whether `source` is the pointer this gesture follows.
    pub(crate) fn follows(&self, source: PointerSource) -> bool {
        self.source == source
    }

    /// Logical state when the press started.
    pub(crate) const fn was_on(&self) -> bool {
        self.was_on
    }

    /// Whether the press has moved far enough to count as a drag.
    pub(crate) const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Progress the knob should show with the pointer at `position`.
    ///
    /// Returns `None` until the horizontal displacement first exceeds
    /// [`DRAG_SLOP`]; after that the gesture stays a drag even if the
    /// pointer returns to where it started.
    pub(crate) fn drag_to(&mut self, position: Point, travel: f32) -> Option<f32> {
        let dx = position.x - self.start.x;
        if !self.dragging && dx.abs() <= DRAG_SLOP {
            return None;
        }
        self.dragging = true;
        if travel <= 0.0 {
            return Some(if dx >= 0.0 { 1.0 } else { 0.0 });
        }
        Some((self.start_progress + dx / travel).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhswitch_core::TouchId;

    fn tracking(start_progress: f32) -> Tracking {
        Tracking::new(
            PointerSource::Mouse,
            Point::new(10.0, 10.0),
            start_progress,
            start_progress >= 0.5,
        )
    }

    #[test]
    fn test_small_move_is_not_a_drag() {
        let mut t = tracking(0.0);
        assert_eq!(t.drag_to(Point::new(12.0, 30.0), 50.0), None);
        assert_eq!(t.drag_to(Point::new(14.0, 10.0), 50.0), None);
        assert!(!t.is_dragging());
    }

    #[test]
    fn test_drag_follows_pointer() {
        let mut t = tracking(0.0);
        assert_eq!(t.drag_to(Point::new(35.0, 10.0), 50.0), Some(0.5));
        assert!(t.is_dragging());
    }

    #[test]
    fn test_drag_stays_active_after_returning() {
        let mut t = tracking(0.0);
        t.drag_to(Point::new(30.0, 10.0), 50.0);
        assert_eq!(t.drag_to(Point::new(10.0, 10.0), 50.0), Some(0.0));
    }

    #[test]
    fn test_drag_is_clamped() {
        let mut t = tracking(1.0);
        assert_eq!(t.drag_to(Point::new(200.0, 10.0), 50.0), Some(1.0));
        assert_eq!(t.drag_to(Point::new(-200.0, 10.0), 50.0), Some(0.0));
    }

    #[test]
    fn test_drag_with_no_travel_snaps_to_direction() {
        let mut t = tracking(0.5);
        assert_eq!(t.drag_to(Point::new(20.0, 10.0), 0.0), Some(1.0));
        assert_eq!(t.drag_to(Point::new(0.0, 10.0), 0.0), Some(0.0));
    }

    #[test]
    fn test_follows_only_its_source() {
        let t = Tracking::new(PointerSource::Touch(TouchId(1)), Point::ORIGIN, 0.0, false);
        assert!(t.follows(PointerSource::Touch(TouchId(1))));
        assert!(!t.follows(PointerSource::Touch(TouchId(2))));
        assert!(!t.follows(PointerSource::Mouse));
        assert!(!t.was_on());
    }
}
