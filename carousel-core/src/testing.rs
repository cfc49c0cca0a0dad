//! In-memory host capabilities for tests and demos.
//!
//! [`ManualTimerDriver`] and [`ManualViewport`] implement the host traits
//! without threads or a real event loop: ticks and resizes happen only when
//! the test (or demo script) says so. Enabled with the `testing` feature.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use parking_lot::Mutex;

use crate::{
    host::{ResizeCallback, Subscription, TickCallback, TimerDriver, TimerHandle, ViewportSource},
    px::Px,
};

struct TimerSlot {
    interval: Duration,
    callback: Option<TickCallback>,
    cancelled: Arc<AtomicBool>,
}

/// A [`TimerDriver`] whose timers fire only when told to.
#[derive(Clone, Default)]
pub struct ManualTimerDriver {
    timers: Arc<Mutex<Vec<TimerSlot>>>,
}

impl ManualTimerDriver {
    /// Creates a driver with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires every non-cancelled timer once, in registration order.
    pub fn fire_all(&self) {
        let len = self.timers.lock().len();
        for index in 0..len {
            // Take the callback out while invoking it so a callback that
            // registers a new timer does not deadlock on the slot list.
            let taken = {
                let mut timers = self.timers.lock();
                let slot = &mut timers[index];
                if slot.cancelled.load(Ordering::SeqCst) {
                    None
                } else {
                    slot.callback.take()
                }
            };
            if let Some(mut callback) = taken {
                callback();
                self.timers.lock()[index].callback = Some(callback);
            }
        }
    }

    /// Number of timers that are still live.
    pub fn active_timers(&self) -> usize {
        self.timers
            .lock()
            .iter()
            .filter(|slot| !slot.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// The interval of the most recently started live timer, if any.
    pub fn last_interval(&self) -> Option<Duration> {
        self.timers
            .lock()
            .iter()
            .rev()
            .find(|slot| !slot.cancelled.load(Ordering::SeqCst))
            .map(|slot| slot.interval)
    }
}

impl TimerDriver for ManualTimerDriver {
    fn start_repeating(&self, interval: Duration, on_tick: TickCallback) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.timers.lock().push(TimerSlot {
            interval,
            callback: Some(on_tick),
            cancelled: Arc::clone(&cancelled),
        });
        TimerHandle::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}

struct ListenerSlot {
    callback: Option<ResizeCallback>,
    cancelled: Arc<AtomicBool>,
}

struct ViewportInner {
    width: Px,
    listeners: Vec<ListenerSlot>,
}

/// A [`ViewportSource`] whose width changes only through [`resize`].
///
/// [`resize`]: ManualViewport::resize
#[derive(Clone)]
pub struct ManualViewport {
    inner: Arc<Mutex<ViewportInner>>,
}

impl ManualViewport {
    /// Creates a viewport at the given initial width.
    pub fn new(width: Px) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewportInner {
                width,
                listeners: Vec::new(),
            })),
        }
    }

    /// Sets the width and notifies live listeners.
    pub fn resize(&self, width: Px) {
        self.inner.lock().width = width;
        let len = self.inner.lock().listeners.len();
        for index in 0..len {
            let taken = {
                let mut inner = self.inner.lock();
                let slot = &mut inner.listeners[index];
                if slot.cancelled.load(Ordering::SeqCst) {
                    None
                } else {
                    slot.callback.take()
                }
            };
            if let Some(mut callback) = taken {
                callback(width);
                self.inner.lock().listeners[index].callback = Some(callback);
            }
        }
    }

    /// Number of listeners that are still subscribed.
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .listeners
            .iter()
            .filter(|slot| !slot.cancelled.load(Ordering::SeqCst))
            .count()
    }
}

impl ViewportSource for ManualViewport {
    fn width(&self) -> Px {
        self.inner.lock().width
    }

    fn subscribe(&self, on_resize: ResizeCallback) -> Subscription {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.inner.lock().listeners.push(ListenerSlot {
            callback: Some(on_resize),
            cancelled: Arc::clone(&cancelled),
        });
        Subscription::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}
