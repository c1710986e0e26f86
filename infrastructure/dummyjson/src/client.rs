use reqwest::Client;

use business::domain::catalog::value_objects::CatalogEndpoint;

/// HTTP client bound to the catalog endpoint.
///
/// No request timeout is configured: the single catalog read waits for as
/// long as the transport keeps the connection open.
pub struct DummyJsonClient {
    pub client: Client,
    pub endpoint: CatalogEndpoint,
}

impl DummyJsonClient {
    pub fn new(endpoint: CatalogEndpoint) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Returns the product list URL.
    pub fn products_url(&self) -> &str {
        self.endpoint.as_str()
    }
}
