use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityChange {
    Increment,
    /// Floors at one; never removes the line.
    Decrement,
}

pub struct ChangeQuantityParams {
    pub product_id: ProductId,
    pub change: QuantityChange,
}

#[async_trait]
pub trait ChangeQuantityUseCase: Send + Sync {
    async fn execute(&self, params: ChangeQuantityParams) -> Result<Cart, CartError>;
}
