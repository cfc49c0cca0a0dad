//! Autoplay scheduling.
//!
//! Autoplay advances the carousel on a fixed interval. The timer itself
//! belongs to the host (see [`TimerDriver`]); this module owns the pause
//! gate and the timer's lifetime. A tick that fires while paused is
//! swallowed, not deferred, so resuming never replays missed ticks.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tracing::{debug, trace};

use crate::host::{TimerDriver, TimerHandle};

/// Timer-driven page advancement with a pause gate.
///
/// The composition root pauses the scheduler while a gesture is in flight
/// and resumes it when the gesture ends. Stopping (or dropping) the
/// scheduler cancels the underlying timer deterministically; no tick is
/// delivered afterwards.
pub struct Autoplay {
    interval: Duration,
    paused: Arc<AtomicBool>,
    handle: Option<TimerHandle>,
}

impl Autoplay {
    /// Creates a stopped scheduler that will tick every `interval` once
    /// started.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            paused: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the underlying timer is currently armed.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether ticks are currently being swallowed.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Pauses or resumes tick delivery without touching the timer.
    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    /// Starts ticking on `driver`, replacing any previous timer.
    ///
    /// `on_tick` runs every interval while not paused.
    pub fn start(
        &mut self,
        driver: &dyn TimerDriver,
        mut on_tick: impl FnMut() + Send + 'static,
    ) {
        let paused = Arc::clone(&self.paused);
        let gated: Box<dyn FnMut() + Send> = Box::new(move || {
            if paused.load(Ordering::SeqCst) {
                trace!("autoplay tick suppressed while paused");
            } else {
                on_tick();
            }
        });
        debug!(interval_ms = self.interval.as_millis() as u64, "autoplay started");
        self.handle = Some(driver.start_repeating(self.interval, gated));
    }

    /// Cancels the timer. Idempotent.
    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            debug!("autoplay stopped");
        }
    }
}
