#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_in_catalog")]
    ProductNotInCatalog,
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
