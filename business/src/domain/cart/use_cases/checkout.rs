use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CheckoutConfirmation;

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<CheckoutConfirmation, CartError>;
}
