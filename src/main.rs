//! Perch - Desktop Messenger Shell
//!
//! A desktop conversation UI centered on the hero header above each chat.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use perch::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("perch=info".parse().unwrap()))
        .init();

    info!("Starting Perch v{}", env!("CARGO_PKG_VERSION"));

    perch::i18n::init();

    if let Err(e) = perch::storage::init_storage() {
        tracing::error!("Failed to initialize storage: {}", e);
    }
    match perch::storage::summaries::seed_if_empty() {
        Ok(true) => info!("Seeded starter conversations"),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to seed conversations: {}", e),
    }

    // Launch Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("Perch")
                    .with_inner_size(LogicalSize::new(1100.0, 760.0)),
            ),
        )
        .launch(App);
}
