use crate::error::CatalogError;
use crate::models::{Cart, Catalog, OrderFlow, OrderReceipt, ProductId};

/// A status string that is visible until `expires_at_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at_ms: u64,
}

impl TransientMessage {
    pub const fn is_visible_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms
    }
}

/// Everything that can change the shop session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopEvent {
    /// The one-shot catalog fetch settled
    CatalogLoaded(Result<Catalog, CatalogError>),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    AdjustQuantity { id: ProductId, delta: i32 },
    ConfirmOrder,
    CloseOrder,
    /// A message timer fired; clears the message if it has run out
    ExpireMessage,
}

/// The whole session state, updated only through [`ShopState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopState {
    catalog: Catalog,
    cart: Cart,
    loading: bool,
    is_mobile: bool,
    message: Option<TransientMessage>,
    order: OrderFlow,
    message_ttl_ms: u64,
}

impl ShopState {
    pub fn new(is_mobile: bool, message_ttl_ms: u64) -> Self {
        Self {
            catalog: Catalog::default(),
            cart: Cart::new(),
            loading: true,
            is_mobile,
            message: None,
            order: OrderFlow::Idle,
            message_ttl_ms,
        }
    }

    /// Apply one event at time `now_ms`.
    pub fn apply(&mut self, event: ShopEvent, now_ms: u64) {
        match event {
            ShopEvent::CatalogLoaded(result) => self.settle_catalog(result),
            ShopEvent::AddToCart(id) => self.add_to_cart(id, now_ms),
            ShopEvent::RemoveFromCart(id) => {
                if self.cart.remove(id) {
                    tracing::debug!(%id, "Removed cart line");
                }
            }
            ShopEvent::AdjustQuantity { id, delta } => {
                let remaining = self.cart.adjust_quantity(id, delta);
                tracing::debug!(%id, delta, ?remaining, "Adjusted cart quantity");
            }
            ShopEvent::ConfirmOrder => match self.order.confirm(&self.cart) {
                Ok(()) => {
                    tracing::info!(
                        items = self.cart.total_items(),
                        total = %self.cart.total_price(),
                        "Order confirmed"
                    );
                }
                Err(e) => self.show_message(e.to_string(), now_ms),
            },
            ShopEvent::CloseOrder => {
                if self.order.close().is_some() {
                    self.cart.clear();
                    tracing::info!("Order closed, cart reset");
                }
            }
            ShopEvent::ExpireMessage => {
                if self
                    .message
                    .as_ref()
                    .is_some_and(|message| !message.is_visible_at(now_ms))
                {
                    self.message = None;
                }
            }
        }
    }

    fn settle_catalog(&mut self, result: Result<Catalog, CatalogError>) {
        if !self.loading {
            tracing::warn!("Ignoring catalog result after the catalog already settled");
            return;
        }

        match result {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "Catalog loaded");
                self.catalog = catalog;
            }
            Err(e) => {
                tracing::error!("Failed to load catalog, continuing with an empty one: {e}");
            }
        }
        self.loading = false;
    }

    fn add_to_cart(&mut self, id: ProductId, now_ms: u64) {
        let Some(product) = self.catalog.get(id) else {
            tracing::warn!(%id, "Add for a product that is not in the catalog");
            return;
        };

        let quantity = self.cart.add(product);
        let text = format!("You added {} to your cart!", product.name);
        tracing::debug!(%id, quantity, "Added to cart");
        self.show_message(text, now_ms);
    }

    fn show_message(&mut self, text: String, now_ms: u64) {
        self.message = Some(TransientMessage {
            text,
            expires_at_ms: now_ms.saturating_add(self.message_ttl_ms),
        });
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub const fn order(&self) -> &OrderFlow {
        &self.order
    }

    pub const fn receipt(&self) -> Option<&OrderReceipt> {
        self.order.receipt()
    }

    /// The message text if it has not expired at `now_ms`
    pub fn visible_message(&self, now_ms: u64) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|message| message.is_visible_at(now_ms))
            .map(|message| message.text.as_str())
    }

    /// Milliseconds until the current message expires, if one is visible
    pub fn message_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.message
            .as_ref()
            .filter(|message| message.is_visible_at(now_ms))
            .map(|message| message.expires_at_ms - now_ms)
    }
}
