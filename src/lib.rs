//! Dessert shop widget: a product catalog, a cart with live totals and an
//! order confirmation modal, rendered client-side with Leptos.
//!
//! All session mutations go through [`models::ShopState::apply`]; the Leptos
//! components only read derived values and dispatch [`models::ShopEvent`]s.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use app::App;
pub use config::ShopConfig;

// Component timers need `window`
#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Install panic/log hooks and mount `<App/>` on the document body.
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = ShopConfig::default();
    if let Err(e) = logging::setup_logging(&config.log_filter) {
        web_sys::console::warn_1(&format!("Warning: Failed to setup logging: {e}").into());
    }

    tracing::info!("Starting dessert cart");

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config /> });
}
