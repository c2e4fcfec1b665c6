use leptos::prelude::*;

use crate::models::{format_amount, CartLine, OrderReceipt, Product, ProductId, ShopEvent, ShopState};

/// Get current timestamp in milliseconds
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn current_timestamp_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Reactive handle to the shop session (Leptos signal).
/// Shared with all components via `use_context()`; every mutation goes through `dispatch`.
#[derive(Clone, Copy)]
pub struct ShopStore {
    state: RwSignal<ShopState>,
}

impl ShopStore {
    pub fn new(is_mobile: bool, message_ttl_ms: u64) -> Self {
        Self {
            state: RwSignal::new(ShopState::new(is_mobile, message_ttl_ms)),
        }
    }

    /// Apply an event to the session at the current time
    pub fn dispatch(&self, event: ShopEvent) {
        let now = current_timestamp_ms();
        self.state.update(|state| state.apply(event, now));
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(ShopState::is_loading)
    }

    pub fn is_mobile(&self) -> bool {
        self.state.with(ShopState::is_mobile)
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.with(|state| state.catalog().products().to_vec())
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.state.with(|state| state.cart().lines().to_vec())
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.state.with(|state| state.cart().quantity_of(id))
    }

    pub fn total_items(&self) -> u32 {
        self.state.with(|state| state.cart().total_items())
    }

    /// Cart total formatted with two decimals, without currency symbol
    pub fn total_price(&self) -> String {
        self.state.with(|state| format_amount(state.cart().total_price()))
    }

    pub fn receipt(&self) -> Option<OrderReceipt> {
        self.state.with(|state| state.receipt().cloned())
    }

    pub fn visible_message(&self) -> Option<String> {
        let now = current_timestamp_ms();
        self.state
            .with(|state| state.visible_message(now).map(ToString::to_string))
    }

    pub fn message_remaining_ms(&self) -> Option<u64> {
        let now = current_timestamp_ms();
        self.state.with(|state| state.message_remaining_ms(now))
    }
}
