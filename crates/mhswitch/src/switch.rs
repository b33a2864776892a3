//! Animated on/off switch control.

use crate::gesture::Tracking;
use crate::layer::{BorderLayer, KnobLayer, Layer, ToggleLayer};
use crate::style::SwitchStyle;
use mhswitch_core::{
    widget::LayoutResult, Canvas, Color, Constraints, Easing, Event, Font, Point, PointerPhase,
    PointerSource, Rect, Size, Transition, TypeId, Widget,
};
use std::any::Any;
use tracing::{debug, trace};

/// Seconds a full off-to-on transition takes.
pub const TRANSITION_DURATION: f64 = 0.2;

/// Gap between the knob and the track edge.
pub const KNOB_INSET: f32 = 2.0;

/// Preferred size when nothing larger is needed for the labels.
pub const DEFAULT_SIZE: Size = Size::new(77.0, 27.0);

/// Opacity applied to every layer while disabled.
const DISABLED_OPACITY: f32 = 0.5;

/// Horizontal padding around a label inside its half of the track.
const LABEL_PADDING: f32 = 6.0;

/// Message emitted when the user changes the switch state.
///
/// Programmatic changes through [`Switch::set_on`] and friends never emit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new switch state
    pub on: bool,
}

/// Toggle switch with a draggable knob.
///
/// The logical state (`is_on`) always holds exactly one of on/off. The visual
/// `progress` runs from 0 (off) to 1 (on) and is what animations and drags
/// move. Host frame callbacks advance it through [`Switch::tick`] or
/// [`Event::AnimationFrame`].
#[derive(Debug, Clone)]
pub struct Switch {
    /// Current logical state
    on: bool,
    /// Whether input is ignored
    disabled: bool,
    /// Explicit corner radius; `None` means half the height
    corner_radius: Option<f32>,
    /// Visual progress, 0 = off and 1 = on
    transition: Transition,
    /// Active press, if any
    tracking: Option<Tracking>,
    toggle_layer: ToggleLayer,
    knob_layer: KnobLayer,
    border_layer: BorderLayer,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// Set by any visual change, cleared by the host
    needs_display: bool,
}

impl Default for Switch {
    fn default() -> Self {
        Self {
            on: false,
            disabled: false,
            corner_radius: None,
            transition: Transition::new(0.0, TRANSITION_DURATION).with_easing(Easing::EaseInOut),
            tracking: None,
            toggle_layer: ToggleLayer::default(),
            knob_layer: KnobLayer::default(),
            border_layer: BorderLayer::default(),
            test_id_value: None,
            bounds: Rect::default(),
            needs_display: true,
        }
    }
}

impl Switch {
    /// Create a new switch, off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with initial state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        Self::default().on(on)
    }

    /// Create a switch with a style applied.
    #[must_use]
    pub fn with_style(style: &SwitchStyle) -> Self {
        let mut switch = Self::default();
        switch.apply_style(style);
        switch
    }

    // ===== Builder =====

    /// Set the initial state.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.set_on(on);
        self
    }

    /// Set whether the switch is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Set the label on the on side.
    #[must_use]
    pub fn on_text(mut self, text: impl Into<String>) -> Self {
        self.set_on_text(text);
        self
    }

    /// Set the label on the off side.
    #[must_use]
    pub fn off_text(mut self, text: impl Into<String>) -> Self {
        self.set_off_text(text);
        self
    }

    /// Set the track fill when on.
    #[must_use]
    pub fn on_color(mut self, color: Color) -> Self {
        self.set_on_color(color);
        self
    }

    /// Set the track fill when off.
    #[must_use]
    pub fn off_color(mut self, color: Color) -> Self {
        self.set_off_color(color);
        self
    }

    /// Set the knob fill at rest and while pressed.
    #[must_use]
    pub fn knob_color(mut self, color: Color, highlighted: Color) -> Self {
        self.set_knob_color(color);
        self.set_highlighted_knob_color(highlighted);
        self
    }

    /// Set the outline color and width.
    #[must_use]
    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.set_border_color(color);
        self.set_border_width(width);
        self
    }

    /// Set the label font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.set_font(font);
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.set_corner_radius(radius);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // ===== State =====

    /// Get current logical state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Get disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Visual progress, 0 = off and 1 = on.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.transition.value() as f32
    }

    /// Whether a transition is in flight and frames are wanted.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Whether a press is being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Set the state with no transition.
    pub fn set_on(&mut self, on: bool) {
        self.set_on_animated(on, false);
    }

    /// Set the state, animating the visual when `animated` is true.
    ///
    /// An in-flight transition is retargeted from wherever it currently is.
    /// A press being tracked is abandoned without emitting a change.
    pub fn set_on_animated(&mut self, on: bool, animated: bool) {
        if self.tracking.take().is_some() {
            self.knob_layer.set_highlighted(false);
        }
        if self.on != on {
            debug!(on, animated, "switch state set");
        }
        self.on = on;
        self.move_to_state(animated);
    }

    /// Flip the state with animation. Has no effect while disabled.
    pub fn toggle(&mut self) {
        if !self.disabled {
            self.set_on_animated(!self.on, true);
        }
    }

    /// Enable or disable input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.cancel_tracking();
        }
        let opacity = if disabled { DISABLED_OPACITY } else { 1.0 };
        self.toggle_layer.set_opacity(opacity);
        self.knob_layer.set_opacity(opacity);
        self.border_layer.set_opacity(opacity);
        self.needs_display = true;
    }

    /// Advance the transition by `dt` seconds.
    ///
    /// Returns whether another frame is wanted.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.transition.is_animating() {
            return false;
        }
        let animating = self.transition.update(dt);
        if !animating {
            trace!(on = self.on, "switch transition settled");
        }
        self.sync_layers();
        animating
    }

    /// Whether anything visible changed since the last call; clears the flag.
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    // ===== Style =====

    /// Label on the on side.
    #[must_use]
    pub fn get_on_text(&self) -> &str {
        self.toggle_layer.on_text()
    }

    /// Label on the off side.
    #[must_use]
    pub fn get_off_text(&self) -> &str {
        self.toggle_layer.off_text()
    }

    /// Track fill when on.
    #[must_use]
    pub const fn get_on_color(&self) -> Color {
        self.toggle_layer.on_color()
    }

    /// Track fill when off.
    #[must_use]
    pub const fn get_off_color(&self) -> Color {
        self.toggle_layer.off_color()
    }

    /// Label font.
    #[must_use]
    pub const fn get_font(&self) -> &Font {
        self.toggle_layer.font()
    }

    /// Effective corner radius: the explicit value, or half the height,
    /// never more than half the height.
    #[must_use]
    pub fn get_corner_radius(&self) -> f32 {
        let half_height = self.bounds.height / 2.0;
        self.corner_radius
            .map_or(half_height, |radius| radius.min(half_height))
            .max(0.0)
    }

    /// Set the label on the on side.
    pub fn set_on_text(&mut self, text: impl Into<String>) {
        self.toggle_layer.set_on_text(text.into());
        self.needs_display = true;
    }

    /// Set the label on the off side.
    pub fn set_off_text(&mut self, text: impl Into<String>) {
        self.toggle_layer.set_off_text(text.into());
        self.needs_display = true;
    }

    /// Set the track fill when on.
    pub fn set_on_color(&mut self, color: Color) {
        self.toggle_layer.set_on_color(color);
        self.needs_display = true;
    }

    /// Set the track fill when off.
    pub fn set_off_color(&mut self, color: Color) {
        self.toggle_layer.set_off_color(color);
        self.needs_display = true;
    }

    /// Set the on label color.
    pub fn set_on_text_color(&mut self, color: Color) {
        self.toggle_layer.set_on_text_color(color);
        self.needs_display = true;
    }

    /// Set the off label color.
    pub fn set_off_text_color(&mut self, color: Color) {
        self.toggle_layer.set_off_text_color(color);
        self.needs_display = true;
    }

    /// Set the knob fill at rest.
    pub fn set_knob_color(&mut self, color: Color) {
        self.knob_layer.set_knob_color(color);
        self.needs_display = true;
    }

    /// Set the knob fill while pressed.
    pub fn set_highlighted_knob_color(&mut self, color: Color) {
        self.knob_layer.set_highlighted_knob_color(color);
        self.needs_display = true;
    }

    /// Set the outline color.
    pub fn set_border_color(&mut self, color: Color) {
        self.border_layer.set_border_color(color);
        self.needs_display = true;
    }

    /// Set the outline width. Negative values clamp to 0.
    pub fn set_border_width(&mut self, width: f32) {
        self.border_layer.set_border_width(width);
        self.needs_display = true;
    }

    /// Set the label font. Sizes below [`Font::MIN_SIZE`] are raised to it.
    pub fn set_font(&mut self, mut font: Font) {
        font.size = font.size.max(Font::MIN_SIZE);
        self.toggle_layer.set_font(font);
        self.needs_display = true;
    }

    /// Set the corner radius. Negative values clamp to 0.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = Some(radius.max(0.0));
        self.sync_layers();
    }

    /// Apply every property present in `style`.
    pub fn apply_style(&mut self, style: &SwitchStyle) {
        if let Some(text) = &style.on_text {
            self.set_on_text(text.clone());
        }
        if let Some(text) = &style.off_text {
            self.set_off_text(text.clone());
        }
        if let Some(color) = style.on_color {
            self.set_on_color(color);
        }
        if let Some(color) = style.off_color {
            self.set_off_color(color);
        }
        if let Some(color) = style.on_text_color {
            self.set_on_text_color(color);
        }
        if let Some(color) = style.off_text_color {
            self.set_off_text_color(color);
        }
        if let Some(color) = style.knob_color {
            self.set_knob_color(color);
        }
        if let Some(color) = style.highlighted_knob_color {
            self.set_highlighted_knob_color(color);
        }
        if let Some(color) = style.border_color {
            self.set_border_color(color);
        }
        if let Some(width) = style.border_width {
            self.set_border_width(width);
        }
        if let Some(radius) = style.corner_radius {
            self.set_corner_radius(radius);
        }
        if let Some(font) = &style.font {
            self.set_font(font.clone());
        }
        debug!("switch style applied");
    }

    /// Snapshot of every visual property.
    ///
    /// `corner_radius` is only present when set explicitly.
    #[must_use]
    pub fn style(&self) -> SwitchStyle {
        SwitchStyle {
            on_text: Some(self.toggle_layer.on_text().to_string()),
            off_text: Some(self.toggle_layer.off_text().to_string()),
            on_color: Some(self.toggle_layer.on_color()),
            off_color: Some(self.toggle_layer.off_color()),
            on_text_color: Some(self.toggle_layer.on_text_color()),
            off_text_color: Some(self.toggle_layer.off_text_color()),
            knob_color: Some(self.knob_layer.knob_color()),
            highlighted_knob_color: Some(self.knob_layer.highlighted_knob_color()),
            border_color: Some(self.border_layer.border_color()),
            border_width: Some(self.border_layer.border_width()),
            corner_radius: self.corner_radius,
            font: Some(self.toggle_layer.font().clone()),
        }
    }

    // ===== Layers =====

    /// Track background layer.
    #[must_use]
    pub const fn toggle_layer(&self) -> &ToggleLayer {
        &self.toggle_layer
    }

    /// Knob layer.
    #[must_use]
    pub const fn knob_layer(&self) -> &KnobLayer {
        &self.knob_layer
    }

    /// Outline layer.
    #[must_use]
    pub const fn border_layer(&self) -> &BorderLayer {
        &self.border_layer
    }

    // ===== Geometry =====

    /// Knob diameter for the current bounds.
    fn knob_diameter(&self) -> f32 {
        2.0f32.mul_add(-KNOB_INSET, self.bounds.height).max(0.0)
    }

    /// Horizontal distance the knob moves between off and on.
    fn knob_travel(&self) -> f32 {
        (2.0f32.mul_add(-KNOB_INSET, self.bounds.width) - self.knob_diameter()).max(0.0)
    }

    /// Knob frame at `progress`.
    fn knob_frame(&self, progress: f32) -> Rect {
        let diameter = self.knob_diameter();
        Rect::new(
            progress.mul_add(self.knob_travel(), self.bounds.x + KNOB_INSET),
            self.bounds.y + KNOB_INSET,
            diameter,
            diameter,
        )
    }

    /// Push geometry and progress into the layers.
    fn sync_layers(&mut self) {
        let progress = self.progress();
        let knob_frame = self.knob_frame(progress);
        let radius = self.get_corner_radius();

        self.toggle_layer.set_frame(self.bounds);
        self.toggle_layer.set_knob_frame(knob_frame);
        self.toggle_layer.set_progress(progress);
        self.toggle_layer.set_corner_radius(radius);
        self.knob_layer.set_frame(knob_frame);
        self.border_layer.set_frame(self.bounds);
        self.border_layer.set_corner_radius(radius);
        self.needs_display = true;
    }

    fn move_to_state(&mut self, animated: bool) {
        let target = if self.on { 1.0 } else { 0.0 };
        if animated {
            self.transition.animate_to(target);
        } else {
            self.transition.jump_to(target);
        }
        self.sync_layers();
    }

    // ===== Tracking =====

    fn begin_tracking(&mut self, source: PointerSource, position: Point) {
        let progress = self.transition.interrupt() as f32;
        trace!(?source, progress, "switch press began");
        self.tracking = Some(Tracking::new(source, position, progress, self.on));
        self.knob_layer.set_highlighted(true);
        self.sync_layers();
    }

    fn continue_tracking(&mut self, source: PointerSource, position: Point) {
        let travel = self.knob_travel();
        let Some(tracking) = self.tracking.as_mut().filter(|t| t.follows(source)) else {
            return;
        };
        let Some(progress) = tracking.drag_to(position, travel) else {
            return;
        };
        let on = progress >= 0.5;
        if on != self.on {
            debug!(on, "switch state crossed by drag");
            self.on = on;
        }
        self.transition.jump_to(f64::from(progress));
        self.sync_layers();
    }

    fn end_tracking(&mut self, source: PointerSource) -> Option<SwitchChanged> {
        if !self.tracking.is_some_and(|t| t.follows(source)) {
            return None;
        }
        let tracking = self.tracking.take()?;
        self.knob_layer.set_highlighted(false);
        if !tracking.is_dragging() {
            self.on = !self.on;
        }
        trace!(on = self.on, dragged = tracking.is_dragging(), "switch press ended");
        self.move_to_state(true);

        (self.on != tracking.was_on()).then(|| {
            debug!(on = self.on, "switch changed by user");
            SwitchChanged { on: self.on }
        })
    }

    fn cancel_tracking(&mut self) {
        let Some(tracking) = self.tracking.take() else {
            return;
        };
        trace!("switch press cancelled");
        self.knob_layer.set_highlighted(false);
        self.on = tracking.was_on();
        self.move_to_state(true);
    }

    fn handle_pointer(&mut self, event: &Event) -> Option<SwitchChanged> {
        let sample = event.as_pointer()?;
        match sample.phase {
            PointerPhase::Down => {
                let position = sample.position?;
                if self.tracking.is_none() && self.bounds.contains_point(&position) {
                    self.begin_tracking(sample.source, position);
                }
                None
            }
            PointerPhase::Move => {
                self.continue_tracking(sample.source, sample.position?);
                None
            }
            PointerPhase::Up => self.end_tracking(sample.source),
            PointerPhase::Cancel => {
                if self.tracking.is_some_and(|t| t.follows(sample.source)) {
                    self.cancel_tracking();
                }
                None
            }
        }
    }
}

impl Widget for Switch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let font = self.toggle_layer.font();
        let label = font
            .text_width(self.toggle_layer.on_text())
            .max(font.text_width(self.toggle_layer.off_text()));
        let height = DEFAULT_SIZE.height.max(font.line_height() + 2.0 * KNOB_INSET);
        let knob = 2.0f32.mul_add(-KNOB_INSET, height);
        let width = DEFAULT_SIZE
            .width
            .max(2.0f32.mul_add(LABEL_PADDING, label) + knob + 2.0 * KNOB_INSET);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.sync_layers();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.toggle_layer.draw(canvas);
        self.knob_layer.draw(canvas);
        self.border_layer.draw(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::AnimationFrame { dt } = event {
            self.tick(*dt);
            return None;
        }
        if self.disabled {
            return None;
        }
        self.handle_pointer(event)
            .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
    }

    fn detach(&mut self) {
        if let Some(tracking) = self.tracking.take() {
            trace!("switch press dropped on detach");
            self.on = tracking.was_on();
        }
        self.knob_layer.set_highlighted(false);
        self.move_to_state(false);
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
