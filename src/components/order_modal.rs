use leptos::prelude::*;

use crate::models::{format_amount, format_price, ShopEvent, ShopStore};

/// Blocking overlay shown while an order is confirmed.
#[component]
pub fn OrderModal() -> impl IntoView {
    let store = use_context::<ShopStore>().expect("ShopStore context missing");

    view! {
        {move || {
            store.receipt().map(|receipt| {
                let total = format_amount(receipt.total_price);
                let rows = receipt
                    .lines
                    .into_iter()
                    .map(|line| {
                        let subtotal = format_price(line.subtotal());
                        view! {
                            <li class="receipt-line">
                                <span class="receipt-name">{line.product.name}</span>
                                <span class="receipt-quantity">{format!("{}x", line.quantity)}</span>
                                <span class="receipt-subtotal">{subtotal}</span>
                            </li>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="modal-backdrop">
                        <div class="modal" role="dialog" aria-modal="true">
                            <h2 class="modal-title">"Order Confirmed!"</h2>
                            <p>"Thank you for your order."</p>
                            <ul class="receipt-lines">{rows}</ul>
                            <p class="modal-total">"Total Price: $" {total}</p>
                            <button
                                class="modal-button"
                                on:click=move |_| store.dispatch(ShopEvent::CloseOrder)
                            >
                                "Start new order"
                            </button>
                        </div>
                    </div>
                }
            })
        }}
    }
}
