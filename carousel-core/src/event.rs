//! Pointer events.
//!
//! Hosts translate their native mouse and touch input into this one shape
//! and feed it to the gesture tracker. Only the primary pointer is expected;
//! additional simultaneous touch points should not be forwarded.

use crate::px::PxPosition;

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventContent {
    /// The pointer was pressed (mouse down / touch start).
    Pressed,
    /// The pointer moved while pressed or hovering.
    Moved,
    /// The pointer was released (mouse up / touch end).
    Released,
    /// The pointer left the component area. Ends an active gesture the same
    /// way a release does.
    Left,
}

/// A single pointer event with its position relative to the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Pointer position at the time of the event.
    pub position: PxPosition,
    /// The kind of event.
    pub content: PointerEventContent,
}

impl PointerEvent {
    /// A press at `position`.
    pub const fn pressed(position: PxPosition) -> Self {
        Self {
            position,
            content: PointerEventContent::Pressed,
        }
    }

    /// A move to `position`.
    pub const fn moved(position: PxPosition) -> Self {
        Self {
            position,
            content: PointerEventContent::Moved,
        }
    }

    /// A release at `position`.
    pub const fn released(position: PxPosition) -> Self {
        Self {
            position,
            content: PointerEventContent::Released,
        }
    }

    /// The pointer leaving the component at `position`.
    pub const fn left(position: PxPosition) -> Self {
        Self {
            position,
            content: PointerEventContent::Left,
        }
    }
}
