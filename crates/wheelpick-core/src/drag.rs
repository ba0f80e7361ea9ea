//! Single-press drag tracking.
//!
//! [`DragTracker`] turns a stream of mouse, touch or pointer events into a
//! drag that starts inside a widget's bounds and resolves once, when the
//! press is released. Intermediate moves only update the tracked offset.
//! A drag belongs to the contact that started it: events from any other
//! finger, pointer or the mouse leave it alone.

use crate::event::{Event, PressPhase, PressSource};
use crate::geometry::{Point, Rect};

/// A press being tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// Contact that owns the drag.
    pub source: PressSource,
    /// Where the press started.
    pub start_position: Point,
    /// Latest known position.
    pub current_position: Point,
}

impl ActiveDrag {
    /// Offset from the start position to the current one.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.current_position - self.start_position
    }
}

/// What a processed event did to the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// A press started inside the tracked bounds.
    Started,
    /// The press moved; carries the offset from the start position.
    Moved(Point),
    /// The press was released; carries the total offset.
    Released(Point),
    /// The press was abandoned.
    Cancelled,
}

/// Tracks at most one drag at a time.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

impl DragTracker {
    /// Create an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Whether a press is currently held.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The current drag, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Feed an event. Presses outside `bounds`, presses made while a drag
    /// is already held, and events from other contacts are ignored.
    pub fn process(&mut self, event: &Event, bounds: &Rect) -> Option<DragUpdate> {
        let phase = event.press_phase()?;
        let source = event.press_source()?;
        if let PressPhase::Start(position) = phase {
            if self.active.is_some() || !bounds.contains_point(&position) {
                return None;
            }
            self.active = Some(ActiveDrag {
                source,
                start_position: position,
                current_position: position,
            });
            return Some(DragUpdate::Started);
        }

        let drag = self.active.as_mut().filter(|d| d.source == source)?;
        match phase {
            PressPhase::Move(position) => {
                drag.current_position = position;
                Some(DragUpdate::Moved(drag.offset()))
            }
            PressPhase::End(position) => {
                drag.current_position = position;
                let offset = drag.offset();
                self.active = None;
                Some(DragUpdate::Released(offset))
            }
            PressPhase::Cancel | PressPhase::Start(_) => {
                self.active = None;
                Some(DragUpdate::Cancelled)
            }
        }
    }

    /// Drop any in-flight drag.
    pub fn reset(&mut self) {
        self.active = None;
    }
}
