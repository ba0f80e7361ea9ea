//! Core types and traits for the wheelpick picker widgets.
//!
//! This crate provides foundational types used throughout wheelpick:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`PressPhase`]
//! - Drag tracking: [`DragTracker`]
//! - The [`Widget`] trait

mod constraints;
pub mod drag;
mod event;
mod geometry;
pub mod widget;

pub use constraints::Constraints;
pub use drag::{ActiveDrag, DragTracker, DragUpdate};
pub use event::{
    Event, Key, MouseButton, PointerId, PointerType, PressPhase, PressSource, TouchId,
};
pub use geometry::{Point, Rect, Size};
pub use widget::{LayoutResult, TypeId, Widget};
