pub mod api;
pub mod app;
pub mod cart;
pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod session;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    let (config, config_error) = match AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::init(config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(%err, "using default configuration");
    }
    tracing::info!(api_base = %config.api_base, "starting");

    mount_to_body(move || view! { <App config=config /> });
}
