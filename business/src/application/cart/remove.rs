use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Removing product {} from cart", product_id));

        let cart = self
            .repository
            .update(Box::new(move |cart: &mut Cart| {
                cart.remove(product_id);
            }))
            .await?;

        self.logger
            .info(&format!("Cart now holds {} lines", cart.lines().len()));
        Ok(cart)
    }
}
