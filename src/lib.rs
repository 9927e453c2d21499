use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::DashboardConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Wire up logging and the clock, then mount the dashboard into `<body>`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    let config = DashboardConfig::from_location();
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Dashboard starting: {} via {}", config.variant.title(), config.api_base),
    );

    leptos::mount_to_body(move || leptos::view! { <App config=config /> });
}
