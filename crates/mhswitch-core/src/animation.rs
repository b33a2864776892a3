//! Easing curves and frame-driven transitions.
//!
//! Values advance only when the host calls `update` from its display-refresh
//! callback; nothing here owns a timer or a thread.

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

// =============================================================================
// EasedValue
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

// =============================================================================
// Transition
// =============================================================================

/// A value that rests at a target and can be animated toward a new one.
///
/// Retargeting while in flight starts from the current interpolated value.
/// The duration is scaled by the distance left to cover, so a half-finished
/// reversal takes half as long.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    resting: f64,
    active: Option<EasedValue>,
    duration: f64,
    easing: Easing,
}

impl Transition {
    /// Create a transition resting at `initial`, using `duration` seconds to
    /// cover a distance of 1.0.
    #[must_use]
    pub fn new(initial: f64, duration: f64) -> Self {
        Self {
            resting: initial,
            active: None,
            duration: duration.max(0.0),
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current (possibly interpolated) value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.active.as_ref().map_or(self.resting, EasedValue::value)
    }

    /// Value the transition will settle at.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.resting
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Animate from the current value to `target`.
    pub fn animate_to(&mut self, target: f64) {
        let from = self.value();
        let distance = (target - from).abs();
        if distance <= f64::EPSILON || self.duration == 0.0 {
            self.jump_to(target);
            return;
        }
        let duration = self.duration * distance.min(1.0);
        self.active = Some(EasedValue::new(from, target, duration).with_easing(self.easing));
        self.resting = target;
    }

    /// Set the value immediately, dropping any in-flight transition.
    pub fn jump_to(&mut self, value: f64) {
        self.active = None;
        self.resting = value;
    }

    /// Stop at the current interpolated value and return it.
    pub fn interrupt(&mut self) -> f64 {
        let value = self.value();
        self.jump_to(value);
        value
    }

    /// Advance by `dt` seconds. Returns whether another frame is wanted.
    pub fn update(&mut self, dt: f64) -> bool {
        if let Some(active) = self.active.as_mut() {
            active.update(dt);
            if active.is_complete() {
                self.active = None;
            }
        }
        self.is_animating()
    }
}
