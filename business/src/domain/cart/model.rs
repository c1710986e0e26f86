use chrono::{DateTime, Utc};

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::{Money, ProductId};

pub const CHECKOUT_MESSAGE: &str = "Your order is successful!";

/// One product's entry in the cart. The quantity never drops below one.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: u64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    fn increment(&mut self) {
        self.quantity += 1;
    }

    fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;
            return true;
        }
        false
    }
}

/// Lines in first-add order, at most one per product id.
///
/// Every mutation is total: operating on an id that is not in the cart is a
/// no-op, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id() == id)
    }

    /// Bumps the line for `product` or appends a new line with quantity one.
    /// Returns the resulting quantity.
    pub fn add_or_increment(&mut self, product: Product) -> u64 {
        if let Some(line) = self.line_mut(product.id) {
            line.increment();
            return line.quantity;
        }
        self.lines.push(CartLine::new(product));
        1
    }

    /// Returns whether a line was changed.
    pub fn increment(&mut self, id: ProductId) -> bool {
        match self.line_mut(id) {
            Some(line) => {
                line.increment();
                true
            }
            None => false,
        }
    }

    /// Lowers the quantity by one while it is above one. A line at quantity
    /// one stays in the cart; only [`Cart::remove`] deletes lines.
    pub fn decrement(&mut self, id: ProductId) -> bool {
        self.line_mut(id).is_some_and(|line| line.decrement())
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.product_id() == id)?;
        Some(self.lines.remove(index))
    }

    /// Sum of all quantities; drives the cart badge.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Badge value, hidden while the cart is empty.
    pub fn badge(&self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            Some(self.total_item_count())
        }
    }

    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Empties the cart and produces the confirmation for what it held.
    pub fn checkout(&mut self) -> CheckoutConfirmation {
        let confirmation = CheckoutConfirmation {
            message: CHECKOUT_MESSAGE.to_string(),
            item_count: self.total_item_count(),
            total_price: self.total_price(),
            confirmed_at: Utc::now(),
        };
        self.lines.clear();
        confirmation
    }
}

/// Signal emitted by checkout. Nothing about the order is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfirmation {
    pub message: String,
    pub item_count: u64,
    pub total_price: Money,
    pub confirmed_at: DateTime<Utc>,
}
