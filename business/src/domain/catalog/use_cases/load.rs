use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoadOutcome {
    /// The display set now holds the fetched products.
    Replaced { count: usize },
    /// The fetch failed and the display set was left untouched.
    Kept { count: usize },
}

#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<CatalogLoadOutcome, CatalogError>;
}
