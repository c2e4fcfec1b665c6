use leptos::prelude::*;

use crate::components::Shop;
use crate::config::ShopConfig;
use crate::models::{detect_mobile, ShopStore};

/// Root application component that provides global context and mounts the Shop.
#[component]
pub fn App(config: ShopConfig) -> impl IntoView {
    // Device class is decided once per session
    let is_mobile = detect_mobile(&config.mobile_patterns);
    let store = ShopStore::new(is_mobile, config.message_ttl_ms);

    // Provide context to all child components
    provide_context(config);
    provide_context(store);

    view! {
        <main class="app">
            <Shop />
        </main>
    }
}
