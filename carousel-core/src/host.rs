//! Host capability traits.
//!
//! The engine never talks to a real window, DOM, or event loop. Whatever
//! environment embeds it supplies two capabilities: a viewport that reports
//! its width and announces resizes, and a timer that can tick repeatedly
//! until cancelled. Pointer input needs no trait; the host forwards
//! [`PointerEvent`](crate::event::PointerEvent)s directly.

use std::time::Duration;

use crate::px::Px;

/// Callback invoked with the new width after a viewport resize.
pub type ResizeCallback = Box<dyn FnMut(Px) + Send>;

/// Callback invoked on each timer tick.
pub type TickCallback = Box<dyn FnMut() + Send>;

/// A viewport owned by the host environment.
pub trait ViewportSource {
    /// The current viewport width.
    fn width(&self) -> Px;

    /// Registers a resize listener. The listener stops being called once the
    /// returned [`Subscription`] is dropped.
    fn subscribe(&self, on_resize: ResizeCallback) -> Subscription;
}

/// A repeating-timer facility owned by the host environment.
pub trait TimerDriver {
    /// Arranges for `on_tick` to run every `interval` until the returned
    /// [`TimerHandle`] is cancelled or dropped. No tick may be delivered
    /// after cancellation.
    fn start_repeating(&self, interval: Duration, on_tick: TickCallback) -> TimerHandle;
}

/// Guard for a resize listener registration. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps the host-side cleanup to run on drop.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Guard for a running repeating timer. Dropping it cancels the timer.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    /// Wraps the host-side cancellation to run on drop.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels the timer now instead of waiting for drop.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
