//! Responsive carousel component.
//!
//! ## Usage
//!
//! Page through cards, testimonials, or image galleries with swipe, button,
//! and indicator navigation, sized per viewport breakpoint.

use std::{ops::Range, time::Duration};

use derive_setters::Setters;
use tracing::{debug, warn};

use carousel_core::{
    Autoplay, BreakpointTable, ConfigError, GestureUpdate, Paging, PointerEvent, Px, State,
    Subscription, SwipeIntent, SwipeTracker, TimerDriver, ViewportSource,
    gesture::DEFAULT_SWIPE_THRESHOLD,
};

use crate::view::{CarouselView, Indicator, NavControls, Slot};

const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Renders one item into the host's view type.
///
/// Receives the item and its index in the full sequence, not its position on
/// the current page.
pub type Renderer<T, V> = dyn Fn(&T, usize) -> V + Send + Sync;

/// Configuration arguments for [`ResponsiveCarousel`].
#[derive(Clone, Setters)]
pub struct CarouselArgs {
    /// Items-per-page counts per viewport tier.
    pub breakpoints: BreakpointTable,
    /// Page shown when the carousel is first created, clamped into range.
    pub initial_page: usize,
    /// Opaque spacing token forwarded to the view unchanged.
    pub gap: String,
    /// Opaque style token forwarded to the view unchanged.
    pub class: String,
    /// Whether pages advance automatically.
    pub auto_play: bool,
    /// Delay between automatic advances.
    pub auto_play_interval: Duration,
    /// Whether forward/back buttons are produced.
    pub show_controls: bool,
    /// Whether pagination indicators are produced.
    pub show_indicators: bool,
    /// Horizontal travel a gesture needs to count as a swipe.
    pub swipe_threshold: Px,
    /// Whether a short last page is padded with placeholder slots.
    pub pad_last_page: bool,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointTable::default(),
            initial_page: 0,
            gap: String::new(),
            class: String::new(),
            auto_play: false,
            auto_play_interval: DEFAULT_AUTO_PLAY_INTERVAL,
            show_controls: true,
            show_indicators: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            pad_last_page: true,
        }
    }
}

/// Page-index owner for carousel components.
///
/// All navigation goes through this controller: relative moves wrap at both
/// ends, direct jumps clamp, and resizes re-resolve the breakpoint table and
/// clamp the index back into range. The page index is never mutated from
/// anywhere else.
#[derive(Clone)]
pub struct CarouselController {
    breakpoints: BreakpointTable,
    paging: Paging,
    item_count: usize,
    current_page: usize,
    viewport_width: Px,
}

impl CarouselController {
    /// Creates a controller for `item_count` items at the given viewport
    /// width.
    ///
    /// Fails with [`ConfigError::InvalidConfiguration`] when the breakpoint
    /// table resolves any tier to zero items per page.
    pub fn new(
        breakpoints: BreakpointTable,
        item_count: usize,
        viewport_width: Px,
    ) -> Result<Self, ConfigError> {
        breakpoints.validate()?;
        let paging = Paging::new(breakpoints.items_per_page(viewport_width))?;
        Ok(Self {
            breakpoints,
            paging,
            item_count,
            current_page: 0,
            viewport_width,
        })
    }

    /// The currently selected page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of items in the sequence.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Items shown per page at the current viewport width.
    pub fn items_per_page(&self) -> usize {
        self.paging.items_per_page()
    }

    /// Total number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.paging.total_pages(self.item_count)
    }

    /// The viewport width last seen by the controller.
    pub fn viewport_width(&self) -> Px {
        self.viewport_width
    }

    /// Item index window for the current page.
    pub fn page_range(&self) -> Range<usize> {
        self.paging.page_range(self.item_count, self.current_page)
    }

    /// Advances one page, wrapping from the last page to the first.
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.current_page = if self.current_page + 1 >= total {
            0
        } else {
            self.current_page + 1
        };
        debug!(page = self.current_page, "advanced to next page");
    }

    /// Goes back one page, wrapping from the first page to the last.
    pub fn previous_page(&mut self) {
        let total = self.total_pages();
        self.current_page = if self.current_page == 0 {
            total - 1
        } else {
            self.current_page - 1
        };
        debug!(page = self.current_page, "went to previous page");
    }

    /// Jumps directly to `page`, clamping out-of-range requests.
    pub fn jump_to_page(&mut self, page: usize) {
        let last = self.total_pages() - 1;
        if page > last {
            warn!(requested = page, last, "page jump out of range, clamping");
        }
        self.current_page = page.min(last);
        debug!(page = self.current_page, "jumped to page");
    }

    /// Reclassifies the viewport and clamps the page index if the page
    /// count shrank.
    pub fn handle_resize(&mut self, width: Px) {
        self.viewport_width = width;
        let per_page = self.breakpoints.items_per_page(width);
        if per_page != self.paging.items_per_page() {
            // The table was validated at construction, so per_page is nonzero.
            if let Ok(paging) = Paging::new(per_page) {
                self.paging = paging;
            }
            self.clamp_current_page();
        }
    }

    /// Updates the item count and clamps the page index if needed.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.clamp_current_page();
    }

    fn clamp_current_page(&mut self) {
        let last = self.total_pages() - 1;
        if self.current_page > last {
            debug!(from = self.current_page, to = last, "clamped page index");
            self.current_page = last;
        }
    }
}

/// A paginated, swipe-navigable, optionally self-advancing item view.
///
/// The composition root: owns the item sequence and the page index (through
/// [`CarouselController`]), subscribes to viewport resizes, routes pointer
/// gestures into navigation, and drives autoplay. Dropping the carousel
/// cancels the autoplay timer and the resize subscription.
///
/// ## Usage
///
/// ```
/// use carousel_components::{CarouselArgs, ResponsiveCarousel};
/// use carousel_core::{Px, testing::{ManualTimerDriver, ManualViewport}};
///
/// let viewport = ManualViewport::new(Px(1280));
/// let timers = ManualTimerDriver::new();
/// let carousel = ResponsiveCarousel::new(
///     CarouselArgs::default(),
///     vec!["a", "b", "c", "d"],
///     |item, _index| format!("card:{item}"),
///     &viewport,
///     &timers,
/// )
/// .unwrap();
///
/// let view = carousel.render();
/// assert_eq!(view.slots.len(), 3);
/// assert_eq!(view.total_pages, 2);
/// ```
pub struct ResponsiveCarousel<T, V> {
    args: CarouselArgs,
    items: Vec<T>,
    renderer: Box<Renderer<T, V>>,
    controller: State<CarouselController>,
    tracker: SwipeTracker,
    autoplay: Autoplay,
    _resize_subscription: Subscription,
}

impl<T, V> ResponsiveCarousel<T, V> {
    /// Builds the carousel and wires it to the host capabilities.
    ///
    /// Subscribes to viewport resizes immediately and, when `auto_play` is
    /// set, starts the autoplay timer on `timers`.
    pub fn new(
        args: CarouselArgs,
        items: Vec<T>,
        renderer: impl Fn(&T, usize) -> V + Send + Sync + 'static,
        viewport: &dyn ViewportSource,
        timers: &dyn TimerDriver,
    ) -> Result<Self, ConfigError> {
        let mut initial =
            CarouselController::new(args.breakpoints, items.len(), viewport.width())?;
        initial.jump_to_page(args.initial_page);
        let controller = State::new(initial);

        let resize_controller = controller.clone();
        let resize_subscription = viewport.subscribe(Box::new(move |width| {
            resize_controller.with_mut(|c| c.handle_resize(width));
        }));

        let mut carousel = Self {
            tracker: SwipeTracker::new(args.swipe_threshold),
            autoplay: Autoplay::new(args.auto_play_interval),
            args,
            items,
            renderer: Box::new(renderer),
            controller,
            _resize_subscription: resize_subscription,
        };
        if carousel.args.auto_play {
            carousel.start_auto_play(timers);
        }
        Ok(carousel)
    }

    /// Feeds one pointer event through the gesture tracker.
    ///
    /// Autoplay is paused for the lifetime of the gesture, and a completed
    /// swipe navigates before autoplay resumes, so a pending tick can never
    /// advance past the page the user just swiped to.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> GestureUpdate {
        let update = self.tracker.handle_event(event);
        if self.tracker.is_tracking() {
            self.autoplay.set_paused(true);
        }
        match update.intent {
            Some(SwipeIntent::Next) => self.controller.with_mut(|c| c.next_page()),
            Some(SwipeIntent::Prev) => self.controller.with_mut(|c| c.previous_page()),
            None => {}
        }
        if !self.tracker.is_tracking() {
            self.autoplay.set_paused(false);
        }
        update
    }

    /// Advances one page, wrapping past the end.
    pub fn next_page(&self) {
        self.controller.with_mut(|c| c.next_page());
    }

    /// Goes back one page, wrapping past the start.
    pub fn previous_page(&self) {
        self.controller.with_mut(|c| c.previous_page());
    }

    /// Jumps to `page` (indicator taps land here), clamped into range.
    pub fn jump_to_page(&self, page: usize) {
        self.controller.with_mut(|c| c.jump_to_page(page));
    }

    /// The currently selected page.
    pub fn current_page(&self) -> usize {
        self.controller.with(|c| c.current_page())
    }

    /// Total number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.controller.with(|c| c.total_pages())
    }

    /// Items shown per page at the current viewport width.
    pub fn items_per_page(&self) -> usize {
        self.controller.with(|c| c.items_per_page())
    }

    /// The item sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the item sequence, clamping the page index if the page
    /// count shrank.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let count = self.items.len();
        self.controller.with_mut(|c| c.set_item_count(count));
    }

    /// Starts (or restarts) autoplay on `timers`.
    pub fn start_auto_play(&mut self, timers: &dyn TimerDriver) {
        let tick_controller = self.controller.clone();
        self.autoplay.start(timers, move || {
            tick_controller.with_mut(|c| c.next_page());
        });
    }

    /// Stops autoplay, cancelling its timer.
    pub fn stop_auto_play(&mut self) {
        self.autoplay.stop();
    }

    /// Whether the autoplay timer is currently armed.
    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Whether a gesture is currently in flight.
    pub fn is_gesture_active(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Produces the view description for the current state.
    ///
    /// Controls and indicators are suppressed entirely when there is only
    /// one page.
    pub fn render(&self) -> CarouselView<V> {
        let (range, current_page, total_pages, per_page) = self.controller.with(|c| {
            (
                c.page_range(),
                c.current_page(),
                c.total_pages(),
                c.items_per_page(),
            )
        });

        let mut slots: Vec<Slot<V>> = range
            .map(|index| Slot::Item((self.renderer)(&self.items[index], index)))
            .collect();
        if self.args.pad_last_page && !self.items.is_empty() {
            while slots.len() < per_page {
                slots.push(Slot::Placeholder);
            }
        }

        let indicators = if self.args.show_indicators && total_pages > 1 {
            (0..total_pages)
                .map(|page| Indicator {
                    page,
                    active: page == current_page,
                })
                .collect()
        } else {
            Vec::new()
        };

        let controls = (self.args.show_controls && total_pages > 1).then_some(NavControls {
            prev_enabled: true,
            next_enabled: true,
        });

        CarouselView {
            slots,
            indicators,
            controls,
            gap: self.args.gap.clone(),
            class: self.args.class.clone(),
            current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use carousel_core::{
        PxPosition,
        testing::{ManualTimerDriver, ManualViewport},
    };

    use super::*;

    fn table_123() -> BreakpointTable {
        BreakpointTable {
            mobile: 1,
            tablet: Some(2),
            desktop: 3,
        }
    }

    fn controller(item_count: usize, width: i32) -> CarouselController {
        CarouselController::new(table_123(), item_count, Px(width)).expect("valid table")
    }

    fn carousel(
        items: usize,
        width: i32,
        args: CarouselArgs,
    ) -> (
        ResponsiveCarousel<usize, String>,
        ManualViewport,
        ManualTimerDriver,
    ) {
        let viewport = ManualViewport::new(Px(width));
        let timers = ManualTimerDriver::new();
        let carousel = ResponsiveCarousel::new(
            args,
            (0..items).collect(),
            |item, index| format!("{item}@{index}"),
            &viewport,
            &timers,
        )
        .expect("valid args");
        (carousel, viewport, timers)
    }

    fn drag(carousel: &mut ResponsiveCarousel<usize, String>, from: i32, to: i32) {
        carousel.handle_pointer(&PointerEvent::pressed(PxPosition::new(Px(from), Px::ZERO)));
        carousel.handle_pointer(&PointerEvent::moved(PxPosition::new(Px(to), Px::ZERO)));
        carousel.handle_pointer(&PointerEvent::released(PxPosition::new(Px(to), Px::ZERO)));
    }

    #[test]
    fn test_construction_rejects_zero_tier() {
        let table = BreakpointTable {
            mobile: 0,
            tablet: None,
            desktop: 3,
        };
        assert!(matches!(
            CarouselController::new(table, 7, Px(1280)),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_wrap_around_navigation() {
        let mut c = controller(7, 1280);
        assert_eq!(c.total_pages(), 3);

        c.jump_to_page(2);
        c.next_page();
        assert_eq!(c.current_page(), 0);

        c.previous_page();
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_jump_clamps_out_of_range() {
        let mut c = controller(7, 1280);
        c.jump_to_page(99);
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_resize_reclassifies_and_reclamps() {
        let mut c = controller(7, 1280);
        assert_eq!(c.items_per_page(), 3);

        c.handle_resize(Px(800));
        assert_eq!(c.items_per_page(), 2);
        assert_eq!(c.total_pages(), 4);

        c.handle_resize(Px(500));
        assert_eq!(c.items_per_page(), 1);
        assert_eq!(c.total_pages(), 7);

        // Park on the last mobile page, then widen: the index must clamp.
        c.jump_to_page(6);
        c.handle_resize(Px(1280));
        assert_eq!(c.total_pages(), 3);
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_shrinking_item_count_reclamps() {
        let mut c = controller(7, 1280);
        c.jump_to_page(2);
        c.set_item_count(3);
        assert_eq!(c.total_pages(), 1);
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn test_empty_carousel_hides_chrome() {
        let (carousel, _viewport, _timers) = carousel(0, 1280, CarouselArgs::default());
        let view = carousel.render();
        assert_eq!(view.total_pages, 1);
        assert!(view.slots.is_empty());
        assert!(view.indicators.is_empty());
        assert!(view.controls.is_none());
    }

    #[test]
    fn test_single_page_hides_chrome() {
        let (carousel, _viewport, _timers) = carousel(3, 1280, CarouselArgs::default());
        let view = carousel.render();
        assert_eq!(view.total_pages, 1);
        assert!(view.indicators.is_empty());
        assert!(view.controls.is_none());
    }

    #[test]
    fn test_render_pads_short_last_page() {
        let (carousel, _viewport, _timers) = carousel(7, 1280, CarouselArgs::default());
        carousel.jump_to_page(2);

        let view = carousel.render();
        assert_eq!(view.slots.len(), 3);
        assert_eq!(view.placeholder_count(), 2);
        assert_eq!(view.slots[0].item().map(String::as_str), Some("6@6"));
    }

    #[test]
    fn test_padding_can_be_disabled() {
        let args = CarouselArgs::default().pad_last_page(false);
        let (carousel, _viewport, _timers) = carousel(7, 1280, args);
        carousel.jump_to_page(2);
        assert_eq!(carousel.render().slots.len(), 1);
    }

    #[test]
    fn test_indicators_track_current_page() {
        let (carousel, _viewport, _timers) = carousel(7, 1280, CarouselArgs::default());
        carousel.next_page();

        let view = carousel.render();
        assert_eq!(view.indicators.len(), 3);
        let active: Vec<usize> = view
            .indicators
            .iter()
            .filter(|i| i.active)
            .map(|i| i.page)
            .collect();
        assert_eq!(active, vec![1]);
        assert_eq!(
            view.controls,
            Some(NavControls {
                prev_enabled: true,
                next_enabled: true,
            })
        );
    }

    #[test]
    fn test_swipe_left_advances() {
        let (mut carousel, _viewport, _timers) = carousel(7, 1280, CarouselArgs::default());
        drag(&mut carousel, 300, 220);
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn test_short_drag_does_not_navigate() {
        let (mut carousel, _viewport, _timers) = carousel(7, 1280, CarouselArgs::default());
        drag(&mut carousel, 300, 251);
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn test_swipe_right_wraps_to_last_page() {
        let (mut carousel, _viewport, _timers) = carousel(7, 1280, CarouselArgs::default());
        drag(&mut carousel, 220, 300);
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn test_resize_notification_flows_into_controller() {
        let (carousel, viewport, _timers) = carousel(7, 1280, CarouselArgs::default());
        assert_eq!(carousel.items_per_page(), 3);

        viewport.resize(Px(800));
        assert_eq!(carousel.items_per_page(), 2);
        assert_eq!(carousel.total_pages(), 4);
    }

    #[test]
    fn test_autoplay_advances_and_wraps() {
        let args = CarouselArgs::default().auto_play(true);
        let (carousel, _viewport, timers) = carousel(7, 1280, args);
        assert!(carousel.is_auto_playing());

        for _ in 0..3 {
            timers.fire_all();
        }
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(
            timers.last_interval(),
            Some(DEFAULT_AUTO_PLAY_INTERVAL)
        );
    }

    #[test]
    fn test_autoplay_pauses_during_gesture() {
        let args = CarouselArgs::default().auto_play(true);
        let (mut carousel, _viewport, timers) = carousel(7, 1280, args);

        carousel.handle_pointer(&PointerEvent::pressed(PxPosition::new(Px(300), Px::ZERO)));
        assert!(carousel.is_gesture_active());
        timers.fire_all();
        assert_eq!(carousel.current_page(), 0);

        carousel.handle_pointer(&PointerEvent::released(PxPosition::new(Px(300), Px::ZERO)));
        timers.fire_all();
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn test_drop_releases_host_resources() {
        let args = CarouselArgs::default().auto_play(true);
        let (carousel, viewport, timers) = carousel(7, 1280, args);
        assert_eq!(timers.active_timers(), 1);
        assert_eq!(viewport.listener_count(), 1);

        drop(carousel);
        assert_eq!(timers.active_timers(), 0);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_stop_auto_play_cancels_timer() {
        let args = CarouselArgs::default().auto_play(true);
        let (mut carousel, _viewport, timers) = carousel(7, 1280, args);

        carousel.stop_auto_play();
        assert!(!carousel.is_auto_playing());
        assert_eq!(timers.active_timers(), 0);

        timers.fire_all();
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn test_initial_page_is_clamped() {
        let args = CarouselArgs::default().initial_page(9);
        let (carousel, _viewport, _timers) = carousel(7, 1280, args);
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn test_set_items_reclamps() {
        let (mut carousel, _viewport, _timers) = carousel(7, 1280, CarouselArgs::default());
        carousel.jump_to_page(2);

        carousel.set_items(vec![0, 1]);
        assert_eq!(carousel.total_pages(), 1);
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.render().slots.len(), 2);
    }

    #[test]
    fn test_style_tokens_pass_through() {
        let args = CarouselArgs::default()
            .gap("gap-6".to_string())
            .class("testimonial-grid".to_string());
        let (carousel, _viewport, _timers) = carousel(7, 1280, args);

        let view = carousel.render();
        assert_eq!(view.gap, "gap-6");
        assert_eq!(view.class, "testimonial-grid");
    }
}
