use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Adding product {} to cart", product_id));

        let product = self
            .catalog
            .get_by_id(product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotInCatalog,
                other => CartError::Repository(other),
            })?;

        let cart = self
            .repository
            .update(Box::new(move |cart: &mut Cart| {
                cart.add_or_increment(product);
            }))
            .await?;

        let quantity = cart
            .line(product_id)
            .map(|line| line.quantity())
            .unwrap_or_default();
        self.logger.info(&format!(
            "Product {} in cart with quantity {}",
            product_id, quantity
        ));
        Ok(cart)
    }
}
