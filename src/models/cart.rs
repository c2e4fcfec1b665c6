use rust_decimal::Decimal;

use crate::models::{Product, ProductId};

/// One entry of the cart: a copy of the product plus how many of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price times quantity)
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    /// Key used by keyed list rendering; changes whenever the quantity does
    pub fn render_key(&self) -> (ProductId, u32) {
        (self.product.id, self.quantity)
    }
}

/// Ordered cart lines, in order of first add.
///
/// At most one line exists per product and every line has a quantity of at
/// least one; a line whose quantity would reach zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, appending a new line on first add.
    /// Returns the resulting quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Delete the line for `id`. Returns false if there was none.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != id);
        self.lines.len() != before
    }

    /// Shift the quantity of the line for `id` by `delta`, dropping the line
    /// when the result is zero or less. Returns the remaining quantity, or
    /// `None` if the line is gone (or never existed).
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i32) -> Option<u32> {
        let index = self.lines.iter().position(|line| line.product.id == id)?;
        let line = &mut self.lines[index];
        let next = i64::from(line.quantity) + i64::from(delta);

        if next <= 0 {
            self.lines.remove(index);
            return None;
        }

        line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Some(line.quantity)
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product.id == id)
            .map(|line| line.quantity)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of price times quantity over all lines
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use rust_decimal::Decimal;

    use crate::models::{ImageSet, Product, ProductId};

    pub fn product(id: u32, name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Dessert".to_string(),
            price: Decimal::new(cents, 2),
            image: [("desktop", format!("./assets/images/{id}-desktop.jpg"))]
                .into_iter()
                .collect::<ImageSet>(),
        }
    }
}
