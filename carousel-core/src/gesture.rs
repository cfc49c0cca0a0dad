//! Swipe gesture tracking.
//!
//! A gesture is one continuous press-move-release interaction. The tracker
//! follows the primary pointer's horizontal travel and, on release, decides
//! whether the gesture was a swipe (navigate) or just a tap/jitter (ignore).

use tracing::trace;

use crate::{
    event::{PointerEvent, PointerEventContent},
    px::Px,
};

/// Horizontal travel beyond which a swipe counts as navigation.
pub const DEFAULT_SWIPE_THRESHOLD: Px = Px(50);

/// Horizontal travel beyond which the host should suppress native scrolling
/// so a horizontal swipe does not also pan the page.
pub const SCROLL_LOCK_THRESHOLD: Px = Px(10);

/// Navigation intent inferred from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Swipe toward the previous page (pointer travelled right).
    Prev,
    /// Swipe toward the next page (pointer travelled left).
    Next,
}

/// What one pointer event did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureUpdate {
    /// True once the gesture has travelled far enough horizontally that the
    /// host should prevent its native scroll handling for this gesture.
    pub suppress_scroll: bool,
    /// Set on the event that ended a swipe past the threshold.
    pub intent: Option<SwipeIntent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    Idle,
    Tracking { start_x: Px, current_x: Px },
}

/// Two-state tracker turning raw pointer events into [`SwipeIntent`]s.
///
/// Only the first active pointer is modeled; a second press while a gesture
/// is in flight is ignored. The tracker holds no timers and no history, so
/// it is reset simply by the gesture ending.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: Px,
    state: TrackerState,
}

impl SwipeTracker {
    /// Creates a tracker that navigates once travel exceeds `threshold`.
    pub fn new(threshold: Px) -> Self {
        Self {
            threshold,
            state: TrackerState::Idle,
        }
    }

    /// Whether a gesture is currently in flight.
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking { .. })
    }

    /// The configured swipe threshold.
    pub fn threshold(&self) -> Px {
        self.threshold
    }

    /// Feeds one pointer event through the state machine.
    pub fn handle_event(&mut self, event: &PointerEvent) -> GestureUpdate {
        match (self.state, event.content) {
            (TrackerState::Idle, PointerEventContent::Pressed) => {
                self.state = TrackerState::Tracking {
                    start_x: event.position.x,
                    current_x: event.position.x,
                };
                trace!(start_x = %event.position.x, "gesture started");
                GestureUpdate::default()
            }
            (TrackerState::Tracking { start_x, .. }, PointerEventContent::Moved) => {
                let current_x = event.position.x;
                self.state = TrackerState::Tracking { start_x, current_x };
                GestureUpdate {
                    suppress_scroll: (current_x - start_x).abs() > SCROLL_LOCK_THRESHOLD,
                    intent: None,
                }
            }
            (
                TrackerState::Tracking { start_x, current_x },
                PointerEventContent::Released | PointerEventContent::Left,
            ) => {
                self.state = TrackerState::Idle;
                // A release may carry a final position update.
                let current_x = match event.content {
                    PointerEventContent::Released => event.position.x,
                    _ => current_x,
                };
                let delta = start_x - current_x;
                let intent = if delta.abs() > self.threshold {
                    Some(if delta > Px::ZERO {
                        SwipeIntent::Next
                    } else {
                        SwipeIntent::Prev
                    })
                } else {
                    None
                };
                trace!(%delta, ?intent, "gesture ended");
                GestureUpdate {
                    suppress_scroll: false,
                    intent,
                }
            }
            // A second press mid-gesture or stray moves/releases while idle.
            _ => GestureUpdate::default(),
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
