use leptos::prelude::*;

use crate::models::{format_price, Product, ShopEvent, ShopStore};

/// Grid of product cards, one per catalog entry.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_context::<ShopStore>().expect("ShopStore context missing");

    view! {
        <section class="catalog">
            <h1 class="catalog-title">"Desserts"</h1>
            <div class="product-grid">
                <For
                    each=move || store.products()
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </div>
        </section>
    }
}

/// A single product with either an add button or a quantity stepper.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = use_context::<ShopStore>().expect("ShopStore context missing");
    let id = product.id;
    let image = product.image.desktop().unwrap_or_default().to_string();
    let alt = product.name.clone();

    view! {
        <article class="product-card">
            <img src=image alt=alt class="product-image" />
            <div class="product-category">{product.category}</div>
            <div class="product-name">{product.name}</div>
            <div class="product-price">{format_price(product.price)}</div>
            <div class="product-actions">
                {move || match store.quantity_of(id) {
                    Some(quantity) => view! {
                        <div class="quantity-stepper">
                            <button
                                class="stepper-button"
                                on:click=move |_| store.dispatch(ShopEvent::AdjustQuantity { id, delta: -1 })
                            >
                                "−"
                            </button>
                            <span class="stepper-count">{quantity}</span>
                            <button
                                class="stepper-button"
                                on:click=move |_| store.dispatch(ShopEvent::AdjustQuantity { id, delta: 1 })
                            >
                                "+"
                            </button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <button
                            class="add-button"
                            on:click=move |_| store.dispatch(ShopEvent::AddToCart(id))
                        >
                            "Add to Cart"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </article>
    }
}
