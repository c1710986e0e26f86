#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.fetch_failed")]
    FetchFailed,
    #[error("catalog.invalid_payload")]
    InvalidPayload,
    #[error("catalog.invalid_endpoint")]
    InvalidEndpoint,
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
