use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, params: GetProductParams) -> Result<Product, CatalogError>;
}
