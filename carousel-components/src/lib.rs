//! Responsive carousel component built on the `carousel-core` engine.
//!
//! # Usage
//!
//! Construct a [`ResponsiveCarousel`] over your items and a render closure,
//! hand it the host's viewport and timer capabilities, and map the
//! [`CarouselView`] it renders onto your widget tree.
//!
//! ```
//! use carousel_components::{CarouselArgs, ResponsiveCarousel};
//! use carousel_core::{Px, testing::{ManualTimerDriver, ManualViewport}};
//!
//! let viewport = ManualViewport::new(Px(1280));
//! let timers = ManualTimerDriver::new();
//!
//! let carousel = ResponsiveCarousel::new(
//!     CarouselArgs::default().gap("gap-4".to_string()),
//!     vec!["deep clean", "move-out", "weekly"],
//!     |service, _index| format!("<card>{service}</card>"),
//!     &viewport,
//!     &timers,
//! )
//! .unwrap();
//!
//! for slot in &carousel.render().slots {
//!     // hand each slot to the host renderer
//!     let _ = slot.item();
//! }
//! ```
//!
//! Pointer input is forwarded through
//! [`ResponsiveCarousel::handle_pointer`]; swipes past the threshold
//! navigate, and autoplay stays paused while a gesture is in flight.

#![deny(missing_docs, clippy::unwrap_used)]

pub mod carousel;
pub mod view;

pub use carousel::{CarouselArgs, CarouselController, Renderer, ResponsiveCarousel};
pub use view::{CarouselView, Indicator, NavControls, Slot};
