//! Headless engine for responsive, paginated carousels.
//!
//! This crate contains everything below the rendering layer: breakpoint
//! classification, pagination arithmetic, swipe gesture tracking, and
//! autoplay scheduling. It owns no window, draws nothing, and runs no event
//! loop; the embedding host supplies those through the capability traits in
//! [`host`] and forwards pointer input as [`PointerEvent`]s.
//!
//! The companion `carousel-components` crate composes these pieces into the
//! `ResponsiveCarousel` component.
//!
//! # Pipeline
//!
//! 1. [`ViewportTier::classify`] buckets the host viewport width.
//! 2. [`BreakpointTable`] resolves the tier to an items-per-page count.
//! 3. [`Paging`] turns that count into page totals and item windows.
//! 4. [`SwipeTracker`] converts pointer gestures into [`SwipeIntent`]s.
//! 5. [`Autoplay`] ticks the page forward on a host timer unless paused.
//!
//! # Example
//!
//! ```
//! use carousel_core::{BreakpointTable, Paging, Px};
//!
//! let table = BreakpointTable::default();
//! let paging = Paging::new(table.items_per_page(Px(1280)))?;
//! assert_eq!(paging.total_pages(7), 3);
//! # Ok::<(), carousel_core::ConfigError>(())
//! ```

#![deny(missing_docs, clippy::unwrap_used)]

pub mod autoplay;
pub mod breakpoint;
pub mod error;
pub mod event;
pub mod gesture;
pub mod host;
pub mod paging;
pub mod px;
pub mod state;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use autoplay::Autoplay;
pub use breakpoint::{BreakpointTable, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH, ViewportTier};
pub use error::ConfigError;
pub use event::{PointerEvent, PointerEventContent};
pub use gesture::{
    DEFAULT_SWIPE_THRESHOLD, GestureUpdate, SCROLL_LOCK_THRESHOLD, SwipeIntent, SwipeTracker,
};
pub use host::{ResizeCallback, Subscription, TickCallback, TimerDriver, TimerHandle, ViewportSource};
pub use paging::Paging;
pub use px::{Px, PxPosition};
pub use state::State;
