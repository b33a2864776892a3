//! Core types and traits for the MHSwitch control.
//!
//! This crate provides the toolkit surface the switch is written against:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`]
//! - Input and frame events: [`Event`]
//! - Frame-driven animation: [`Easing`], [`EasedValue`], [`Transition`]
//! - Rendering: the [`Canvas`] trait, [`DrawCommand`] and [`RecordingCanvas`]
//! - The [`Widget`] trait hosts use to measure, lay out, paint and feed input

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{EasedValue, Easing, Transition};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, MouseButton, PointerPhase, PointerSample, PointerSource, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{Canvas, Font, FontWeight, LayoutResult, TextStyle, TypeId, Widget};
