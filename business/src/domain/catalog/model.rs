use crate::domain::shared::value_objects::{Money, ProductId};

/// A product of the remote catalog. Read-only once fetched; the cart keeps
/// its own copy of every product it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub thumbnail: String,
    pub rating: f64,
    pub category: String,
}
