use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

#[async_trait]
pub trait GetCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError>;
}
