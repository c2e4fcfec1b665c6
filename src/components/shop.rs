use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CartPanel, OrderModal, ProductGrid};
use crate::config::ShopConfig;
use crate::models::{ShopEvent, ShopStore};
use crate::services::fetch_catalog;

/// Main shop container: loads the catalog once and lays out grid, cart and modal.
#[component]
pub fn Shop() -> impl IntoView {
    let store = use_context::<ShopStore>().expect("ShopStore context missing");
    let config = use_context::<ShopConfig>().expect("ShopConfig context missing");

    // Fetch the catalog on mount - run only once per component instance
    let fetch_setup = std::cell::Cell::new(false);
    let catalog_url = config.catalog_url;
    Effect::new(move |_| {
        if !fetch_setup.get() {
            fetch_setup.set(true);
            let url = catalog_url.clone();
            spawn_local(async move {
                let result = fetch_catalog(&url).await;
                store.dispatch(ShopEvent::CatalogLoaded(result));
            });
        }
    });

    view! {
        <div class="shop">
            <Show
                when=move || !store.is_loading()
                fallback=|| view! { <p class="loading">"loading ...."</p> }
            >
                <div class="shop-layout">
                    <ProductGrid />
                    <CartPanel />
                </div>
                <OrderModal />
            </Show>
        </div>
    }
}
