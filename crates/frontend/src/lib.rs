pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use contracts::shared::config::{default_config, load_config};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, override_error) = match load_config(shared::config_override().as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (default_config().clone(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = override_error {
        log::warn!("Config override ignored: {:#}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
