//! End-to-end session tests for the shop reducer
//!
//! These drive `ShopState` through whole user sessions: catalog load, cart
//! editing, order confirmation and reset, without any rendering.

use rust_decimal::Decimal;

use dessert_cart::error::CatalogError;
use dessert_cart::models::{
    format_amount, Catalog, OrderFlow, ProductId, ProductRecord, ShopEvent, ShopState,
};

const TTL: u64 = 2_000;

/// Helper to load the catalog document shipped with the app
fn shipped_catalog() -> Catalog {
    let json = include_str!("../public/data.json");
    let payload: Option<Vec<ProductRecord>> =
        serde_json::from_str(json).expect("data.json should decode");
    Catalog::from_payload(payload).expect("data.json should not be null")
}

fn session_with(catalog: Catalog) -> ShopState {
    let mut state = ShopState::new(false, TTL);
    state.apply(ShopEvent::CatalogLoaded(Ok(catalog)), 0);
    state
}

fn find(state: &ShopState, name: &str) -> ProductId {
    state
        .catalog()
        .products()
        .iter()
        .find(|product| product.name == name)
        .map(|product| product.id)
        .unwrap_or_else(|| panic!("{name} should be in the catalog"))
}

#[test]
fn test_shipped_catalog_has_desktop_images() {
    let catalog = shipped_catalog();

    assert_eq!(catalog.len(), 9);
    for product in catalog.products() {
        assert!(product.image.desktop().is_some(), "{} lacks a desktop image", product.name);
        assert!(product.price >= Decimal::ZERO);
    }
}

#[test]
fn test_full_order_session() {
    let mut state = session_with(shipped_catalog());
    let waffle = find(&state, "Waffle with Berries");
    let tiramisu = find(&state, "Classic Tiramisu");

    state.apply(ShopEvent::AddToCart(waffle), 100);
    state.apply(ShopEvent::AddToCart(tiramisu), 200);
    state.apply(ShopEvent::AdjustQuantity { id: waffle, delta: 1 }, 300);

    assert_eq!(state.cart().total_items(), 3);
    assert_eq!(format_amount(state.cart().total_price()), "18.50");
    assert_eq!(
        state.visible_message(300),
        Some("You added Classic Tiramisu to your cart!")
    );

    state.apply(ShopEvent::ConfirmOrder, 400);
    let receipt = state.receipt().expect("order should be confirmed");
    assert_eq!(receipt.total_items, 3);
    assert_eq!(format_amount(receipt.total_price), "18.50");
    assert_eq!(receipt.lines[0].product.id, waffle);

    state.apply(ShopEvent::CloseOrder, 500);
    assert_eq!(state.order(), &OrderFlow::Idle);
    assert!(state.cart().is_empty());
    assert_eq!(format_amount(state.cart().total_price()), "0.00");
}

#[test]
fn test_modal_total_for_two_units_at_three_dollars() {
    let records = vec![ProductRecord {
        name: "Brownie".to_string(),
        category: "Brownie".to_string(),
        price: Decimal::new(300, 2),
        image: [("desktop", "./brownie.jpg")].into_iter().collect(),
    }];
    let mut state = session_with(Catalog::from_records(records));
    let id = ProductId::new(0);
    state.apply(ShopEvent::AddToCart(id), 0);
    state.apply(ShopEvent::AddToCart(id), 0);

    state.apply(ShopEvent::ConfirmOrder, 0);

    assert!(state.order().is_confirmed());
    assert_eq!(format_amount(state.receipt().unwrap().total_price), "6.00");

    state.apply(ShopEvent::CloseOrder, 0);
    assert!(state.cart().is_empty());
    assert!(!state.order().is_confirmed());
}

#[test]
fn test_confirm_empty_cart_never_opens_modal() {
    let mut state = session_with(shipped_catalog());

    state.apply(ShopEvent::ConfirmOrder, 1_000);

    assert!(!state.order().is_confirmed());
    assert_eq!(state.visible_message(1_000), Some("Your cart is empty."));
    assert_eq!(state.visible_message(3_000), None);
}

#[test]
fn test_failed_catalog_leaves_usable_empty_shop() {
    let mut state = ShopState::new(false, TTL);

    state.apply(
        ShopEvent::CatalogLoaded(Err(CatalogError::Network("Failed to fetch".to_string()))),
        0,
    );

    assert!(!state.is_loading());
    assert!(state.catalog().is_empty());

    state.apply(ShopEvent::AddToCart(ProductId::new(0)), 10);
    state.apply(ShopEvent::ConfirmOrder, 20);

    assert!(state.cart().is_empty());
    assert_eq!(state.visible_message(20), Some("Your cart is empty."));
}

#[test]
fn test_remove_after_confirm_and_close_cycle() {
    let mut state = session_with(shipped_catalog());
    let pie = find(&state, "Lemon Meringue Pie");
    let cake = find(&state, "Red Velvet Cake");

    state.apply(ShopEvent::AddToCart(pie), 0);
    state.apply(ShopEvent::AddToCart(cake), 0);
    state.apply(ShopEvent::RemoveFromCart(pie), 0);

    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.cart().quantity_of(pie), None);
    assert_eq!(format_amount(state.cart().total_price()), "4.50");
}
