use rust_decimal::Decimal;

use crate::error::OrderError;
use crate::models::{Cart, CartLine};

/// Snapshot of the cart taken when an order is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub lines: Vec<CartLine>,
    pub total_items: u32,
    pub total_price: Decimal,
}

impl OrderReceipt {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// Confirm/close cycle that gates the order summary modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OrderFlow {
    #[default]
    Idle,
    Confirmed(OrderReceipt),
}

impl OrderFlow {
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    pub const fn receipt(&self) -> Option<&OrderReceipt> {
        match self {
            Self::Confirmed(receipt) => Some(receipt),
            Self::Idle => None,
        }
    }

    /// Move to `Confirmed` with a receipt of `cart`.
    /// An empty cart is refused and the flow stays `Idle`; confirming twice is a no-op.
    pub fn confirm(&mut self, cart: &Cart) -> Result<(), OrderError> {
        if self.is_confirmed() {
            return Ok(());
        }
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        *self = Self::Confirmed(OrderReceipt::from_cart(cart));
        Ok(())
    }

    /// Leave `Confirmed`, handing back the receipt. `None` when already idle.
    pub fn close(&mut self) -> Option<OrderReceipt> {
        match std::mem::take(self) {
            Self::Confirmed(receipt) => Some(receipt),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::fixtures::product;

    #[test]
    fn test_confirm_empty_cart_is_refused() {
        let mut flow = OrderFlow::Idle;

        assert_eq!(flow.confirm(&Cart::new()), Err(OrderError::EmptyCart));
        assert_eq!(flow, OrderFlow::Idle);
    }

    #[test]
    fn test_confirm_snapshots_cart() {
        let cake = product(0, "Cake", 300);
        let mut cart = Cart::new();
        cart.add(&cake);
        cart.add(&cake);
        let mut flow = OrderFlow::Idle;

        flow.confirm(&cart).unwrap();

        let receipt = flow.receipt().unwrap();
        assert_eq!(receipt.total_items, 2);
        assert_eq!(receipt.total_price, Decimal::new(600, 2));
        assert_eq!(receipt.lines.len(), 1);
    }

    #[test]
    fn test_confirm_twice_keeps_first_receipt() {
        let cake = product(0, "Cake", 300);
        let mut cart = Cart::new();
        cart.add(&cake);
        let mut flow = OrderFlow::Idle;

        flow.confirm(&cart).unwrap();
        cart.add(&cake);
        flow.confirm(&cart).unwrap();

        assert_eq!(flow.receipt().unwrap().total_items, 1);
    }

    #[test]
    fn test_close_returns_to_idle() {
        let cake = product(0, "Cake", 300);
        let mut cart = Cart::new();
        cart.add(&cake);
        let mut flow = OrderFlow::Idle;
        flow.confirm(&cart).unwrap();

        assert!(flow.close().is_some());
        assert_eq!(flow, OrderFlow::Idle);
        assert!(flow.close().is_none());
    }
}
