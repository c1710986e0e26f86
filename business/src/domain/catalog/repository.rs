use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;

/// Holds the display set: the products currently offered to the user.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn replace_all(&self, products: Vec<Product>) -> Result<(), RepositoryError>;
}
