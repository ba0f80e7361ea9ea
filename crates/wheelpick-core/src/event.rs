//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Hosts translate their native mouse, touch and pointer input into these
/// before handing them to a widget.
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
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Widget lost focus
    FocusOut,
    // Touch events
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
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    // Pointer events (unified mouse/touch/pen)
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer cancelled
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

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

/// Keyboard keys a picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Home key
    Home,
    /// End key
    End,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Phase of a single-finger press, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressPhase {
    /// Finger/button went down
    Start(Point),
    /// Finger/button moved while down
    Move(Point),
    /// Finger/button lifted
    End(Point),
    /// Press abandoned without a release
    Cancel,
}

/// Input contact a press comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressSource {
    /// The mouse
    Mouse,
    /// A single touch contact
    Touch(TouchId),
    /// A single pointer
    Pointer(PointerId),
}

impl Event {
    /// Device and contact a press-related event belongs to.
    ///
    /// Each touch contact and each pointer is its own source, so a release
    /// only ends the press that the same finger or pointer started.
    #[must_use]
    pub const fn press_source(&self) -> Option<PressSource> {
        match self {
            Self::MouseMove { .. } | Self::MouseDown { .. } | Self::MouseUp { .. } => {
                Some(PressSource::Mouse)
            }
            Self::TouchStart { id, .. }
            | Self::TouchMove { id, .. }
            | Self::TouchEnd { id, .. }
            | Self::TouchCancel { id } => Some(PressSource::Touch(*id)),
            Self::PointerDown { pointer_id, .. }
            | Self::PointerMove { pointer_id, .. }
            | Self::PointerUp { pointer_id, .. }
            | Self::PointerCancel { pointer_id } => Some(PressSource::Pointer(*pointer_id)),
            _ => None,
        }
    }

    /// Classify this event as a press phase.
    ///
    /// Only the left mouse button and primary pointers count; mouse moves are
    /// reported as `Move` regardless of button state, so callers must track
    /// whether a press is active.
    #[must_use]
    pub const fn press_phase(&self) -> Option<PressPhase> {
        match self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchStart { position, .. }
            | Self::PointerDown {
                position,
                is_primary: true,
                ..
            } => Some(PressPhase::Start(*position)),
            Self::MouseMove { position }
            | Self::TouchMove { position, .. }
            | Self::PointerMove {
                position,
                is_primary: true,
                ..
            } => Some(PressPhase::Move(*position)),
            Self::MouseUp {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchEnd { position, .. }
            | Self::PointerUp {
                position,
                is_primary: true,
                ..
            } => Some(PressPhase::End(*position)),
            Self::TouchCancel { .. } | Self::PointerCancel { .. } => Some(PressPhase::Cancel),
            _ => None,
        }
    }
}
