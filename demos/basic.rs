//! Standalone demo: opens a window with the color picker and logs every
//! color it produces.
//!
//! `RUST_LOG=floem_sv_picker=trace` shows the individual selection events.

use floem::prelude::*;
use floem::reactive::create_effect;
use floem::window::WindowConfig;
use floem_sv_picker::{color_picker, Rgb};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let color = RwSignal::new(Rgb::new(255, 2, 0));
    create_effect(move |_| {
        let c = color.get();
        tracing::info!(color = %c, hex = %c.to_hex(), "picked");
    });

    floem::Application::new()
        .window(
            move |_| {
                color_picker(color).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((304.0, 400.0))
                    .title("floem-sv-picker"),
            ),
        )
        .run();
}
