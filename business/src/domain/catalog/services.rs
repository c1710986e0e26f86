use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// Service port for reading the product list from the remote catalog.
///
/// One call is one outbound request: implementations do not retry, cache
/// or paginate.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
