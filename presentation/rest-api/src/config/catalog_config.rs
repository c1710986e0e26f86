use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::value_objects::{CatalogEndpoint, DEFAULT_CATALOG_URL};

/// Where the product catalog is fetched from.
pub struct CatalogConfig {
    pub endpoint: CatalogEndpoint,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_URL: Product list endpoint (default: "https://dummyjson.com/products")
    pub fn from_env() -> Result<Self, CatalogError> {
        let raw = std::env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        Self::from_url(&raw)
    }

    pub fn from_url(raw: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            endpoint: CatalogEndpoint::parse(raw)?,
        })
    }
}
