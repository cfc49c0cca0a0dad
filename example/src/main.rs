//! Headless demo: drives a carousel of service cards through resizes,
//! swipes, indicator jumps, and autoplay ticks, logging each transition.
//!
//! Run with `RUST_LOG=debug` to also see the engine's internal logs.

use carousel_components::{CarouselArgs, ResponsiveCarousel, Slot};
use carousel_core::{
    PointerEvent, Px, PxPosition,
    testing::{ManualTimerDriver, ManualViewport},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SERVICES: [&str; 7] = [
    "Deep Cleaning",
    "Move-Out Cleaning",
    "Office Cleaning",
    "Carpet Care",
    "Window Washing",
    "Post-Construction",
    "Recurring Service",
];

fn log_view(stage: &str, carousel: &ResponsiveCarousel<&'static str, String>) {
    let view = carousel.render();
    let cells: Vec<String> = view
        .slots
        .iter()
        .map(|slot| match slot {
            Slot::Item(card) => card.clone(),
            Slot::Placeholder => "(empty)".to_string(),
        })
        .collect();
    info!(
        stage,
        page = view.current_page,
        of = view.total_pages,
        indicators = view.indicators.len(),
        controls = view.controls.is_some(),
        "page: [{}]",
        cells.join(" | ")
    );
}

fn drag(carousel: &mut ResponsiveCarousel<&'static str, String>, from: i32, to: i32) {
    carousel.handle_pointer(&PointerEvent::pressed(PxPosition::new(Px(from), Px::ZERO)));
    carousel.handle_pointer(&PointerEvent::moved(PxPosition::new(Px(to), Px::ZERO)));
    carousel.handle_pointer(&PointerEvent::released(PxPosition::new(Px(to), Px::ZERO)));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let viewport = ManualViewport::new(Px(1280));
    let timers = ManualTimerDriver::new();

    let mut carousel = ResponsiveCarousel::new(
        CarouselArgs::default()
            .auto_play(true)
            .gap("gap-6".to_string())
            .class("service-cards".to_string()),
        SERVICES.to_vec(),
        |name, index| format!("#{index} {name}"),
        &viewport,
        &timers,
    )
    .expect("default breakpoint table is valid");

    log_view("initial desktop render", &carousel);

    for width in [800, 500, 1280] {
        viewport.resize(Px(width));
        log_view("after resize", &carousel);
    }

    drag(&mut carousel, 300, 200);
    log_view("after 100px swipe left", &carousel);

    drag(&mut carousel, 300, 270);
    log_view("after 30px drag (below threshold)", &carousel);

    drag(&mut carousel, 200, 300);
    log_view("after 100px swipe right", &carousel);

    carousel.jump_to_page(2);
    log_view("after indicator jump to page 2", &carousel);

    timers.fire_all();
    log_view("after autoplay tick", &carousel);

    // A tick arriving mid-gesture must not advance the page.
    carousel.handle_pointer(&PointerEvent::pressed(PxPosition::new(Px(300), Px::ZERO)));
    timers.fire_all();
    log_view("tick during gesture (no advance)", &carousel);
    carousel.handle_pointer(&PointerEvent::released(PxPosition::new(Px(300), Px::ZERO)));

    timers.fire_all();
    log_view("tick after gesture ended", &carousel);

    carousel.stop_auto_play();
    info!(
        active_timers = timers.active_timers(),
        "autoplay stopped, timers released"
    );
}
