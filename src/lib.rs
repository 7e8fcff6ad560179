use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
use crate::infrastructure::{BrowserTimeProvider, ConsoleLogger};
use crate::presentation::{Dashboard, wasm_api::api_config};

pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

const COMPONENT: LogComponent = LogComponent::Presentation("Initialize");

/// Install logging and mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    init_logger(Box::new(ConsoleLogger::for_build()));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    match api_config() {
        Ok(config) => {
            log_info!(COMPONENT, "backend: {}", config.base_url());
        }
        Err(err) => {
            log_warn!(COMPONENT, "{}; getStock will reject until it is set", err);
        }
    }

    leptos::mount_to_body(Dashboard);
    log_info!(COMPONENT, "🚀 dashboard mounted");
}
