//! Spendemic - entry point
//!
//! Launches the Dioxus shell. The renderer comes from the `web` (default)
//! or `desktop` feature.

use spendemic::app::App;

// Browser entry point
#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(
        "[WASM] Spendemic - WASM initialized!",
    ));
    dioxus::launch(App);
}

// Native (desktop) entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE dioxus::launch so its logger backs off
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(spendemic::config::DEFAULT_LOG_LEVEL.into()),
        )
        .init();

    tracing::info!("Starting Spendemic...");

    dioxus::launch(App);
}
