use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::change_quantity::{
    ChangeQuantityParams, ChangeQuantityUseCase, QuantityChange,
};
use crate::domain::logger::Logger;

pub struct ChangeQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ChangeQuantityUseCase for ChangeQuantityUseCaseImpl {
    async fn execute(&self, params: ChangeQuantityParams) -> Result<Cart, CartError> {
        let ChangeQuantityParams { product_id, change } = params;
        self.logger.info(&format!(
            "Changing quantity of product {}: {:?}",
            product_id, change
        ));

        let cart = self
            .repository
            .update(Box::new(move |cart: &mut Cart| match change {
                QuantityChange::Increment => {
                    cart.increment(product_id);
                }
                QuantityChange::Decrement => {
                    cart.decrement(product_id);
                }
            }))
            .await?;

        match cart.line(product_id) {
            Some(line) => self.logger.info(&format!(
                "Product {} now has quantity {}",
                product_id,
                line.quantity()
            )),
            None => self
                .logger
                .debug(&format!("Product {} is not in the cart", product_id)),
        }
        Ok(cart)
    }
}
