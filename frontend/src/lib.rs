mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use router::{app_root, mount_app};

pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting StaffHub frontend");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__STAFFHUB_ENV is present (env.js), it takes precedence.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    mount_app();
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    boot();
}
