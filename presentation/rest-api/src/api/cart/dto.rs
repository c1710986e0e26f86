use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine, CheckoutConfirmation};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Identifier of a product in the display set
    pub product_id: u64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Catalog product identifier
    pub product_id: u64,
    /// Product title
    pub title: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Unit price with two decimals
    pub unit_price: String,
    /// Quantity, at least 1
    pub quantity: u64,
    /// Unit price times quantity with two decimals
    pub subtotal: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        let product = line.product();
        Self {
            product_id: product.id.value(),
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            unit_price: product.price.to_fixed(),
            quantity: line.quantity(),
            subtotal: line.subtotal().to_fixed(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Lines in the order they were first added
    pub lines: Vec<CartLineResponse>,
    /// Sum of all quantities
    pub total_item_count: u64,
    /// Badge value; omitted while the cart is empty
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<u64>,
    /// Sum of all subtotals with two decimals
    pub total_price: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineResponse::from).collect(),
            total_item_count: cart.total_item_count(),
            badge: cart.badge(),
            total_price: cart.total_price().to_fixed(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    /// Confirmation message
    pub message: String,
    /// Number of items that were in the cart
    pub item_count: u64,
    /// Total that was in the cart, with two decimals
    pub total_price: String,
    /// Confirmation timestamp
    pub confirmed_at: DateTime<Utc>,
}

impl From<CheckoutConfirmation> for CheckoutResponse {
    fn from(confirmation: CheckoutConfirmation) -> Self {
        Self {
            message: confirmation.message,
            item_count: confirmation.item_count,
            total_price: confirmation.total_price.to_fixed(),
            confirmed_at: confirmation.confirmed_at,
        }
    }
}
