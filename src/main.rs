//! Cyclops dashboard shell - entry point
//!
//! Launches the Dioxus app with the side navigation layout.

use cyclops_sidenav::app::App;

// Native targets (desktop / server-side rendering)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE launching the app
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Cyclops dashboard...");

    dioxus::launch(App);
}

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Cyclops dashboard - WASM initialized!".into());
    dioxus::launch(App);
}
