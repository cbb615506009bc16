//! Logging Infrastructure
//!
//! Everything goes to the in-app log pane; stdout belongs to the terminal UI.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

/// Initialize the logger
pub fn init_logger() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();

    // Bridge the log crate for dependencies that still use it
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);
}
