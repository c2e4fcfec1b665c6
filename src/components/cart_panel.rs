use leptos::prelude::*;

use crate::components::Toast;
use crate::config::ShopConfig;
use crate::models::{format_price, CartLine, ShopEvent, ShopStore};

/// Cart sidebar: line items, totals, confirm button and the transient message.
#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_context::<ShopStore>().expect("ShopStore context missing");
    let config = use_context::<ShopConfig>().expect("ShopConfig context missing");
    let banner_url = config.mobile_banner_url;

    view! {
        <aside class="cart-panel">
            <h2 class="cart-title">"Your Cart (" {move || store.total_items()} ")"</h2>
            <ul class="cart-lines">
                <For
                    each=move || store.cart_lines()
                    key=CartLine::render_key
                    children=move |line| view! { <CartLineRow line=line /> }
                />
            </ul>
            <div class="cart-total">"Order Total: $" {move || store.total_price()}</div>
            <div class="cart-note">"This is a carbon-neutral delivery"</div>
            <button class="confirm-button" on:click=move |_| store.dispatch(ShopEvent::ConfirmOrder)>
                "Confirm Order"
            </button>
            <Toast />
            <Show when=move || store.is_mobile()>
                <div class="mobile-banner">
                    <img src=banner_url.clone() alt="Mobile Thank You" />
                </div>
            </Show>
        </aside>
    }
}

/// One cart row: name, quantity breakdown and a remove control.
#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let store = use_context::<ShopStore>().expect("ShopStore context missing");
    let id = line.product.id;
    let detail = format!(
        "{} x {} = {}",
        line.quantity,
        format_price(line.product.price),
        format_price(line.subtotal())
    );

    view! {
        <li class="cart-line">
            <div>
                <div class="cart-line-name">{line.product.name}</div>
                <div class="cart-line-detail">{detail}</div>
            </div>
            <button
                class="remove-button"
                aria-label="Remove item"
                on:click=move |_| store.dispatch(ShopEvent::RemoveFromCart(id))
            >
                "×"
            </button>
        </li>
    }
}
