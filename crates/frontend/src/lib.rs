pub mod app;
pub mod dashboards;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("Solar dashboard API at {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}
