use url::Url;

use super::errors::CatalogError;

pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Absolute http(s) URL the catalog is read from.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEndpoint(Url);

impl CatalogEndpoint {
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let url = Url::parse(raw.trim()).map_err(|_| CatalogError::InvalidEndpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            _ => Err(CatalogError::InvalidEndpoint),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for CatalogEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
