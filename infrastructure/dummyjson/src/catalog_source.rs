use async_trait::async_trait;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Product;
use business::domain::catalog::services::CatalogSource;
use business::domain::shared::value_objects::{Money, ProductId};

use crate::client::DummyJsonClient;

#[derive(Deserialize)]
struct ProductListResponse {
    products: Vec<ProductDto>,
}

/// Only the fields the storefront shows; the rest of the payload is ignored.
#[derive(Deserialize)]
struct ProductDto {
    id: u64,
    title: String,
    price: serde_json::Number,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    category: String,
}

impl ProductDto {
    fn into_domain(self) -> Result<Product, CatalogError> {
        // Parse the literal as written so 9.99 stays 9.99 instead of its f64 expansion.
        let price = self
            .price
            .to_string()
            .parse::<Money>()
            .map_err(|_| CatalogError::InvalidPayload)?;

        Ok(Product {
            id: ProductId::new(self.id),
            title: self.title,
            price,
            thumbnail: self.thumbnail,
            rating: self.rating,
            category: self.category,
        })
    }
}

pub struct DummyJsonCatalogSource {
    client: DummyJsonClient,
}

impl DummyJsonCatalogSource {
    pub fn new(client: DummyJsonClient) -> Self {
        Self { client }
    }

    fn decode(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
        let payload: ProductListResponse =
            serde_json::from_slice(body).map_err(|_| CatalogError::InvalidPayload)?;

        payload
            .products
            .into_iter()
            .map(ProductDto::into_domain)
            .collect()
    }
}

#[async_trait]
impl CatalogSource for DummyJsonCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|_| CatalogError::FetchFailed)?;

        if !response.status().is_success() {
            return Err(CatalogError::FetchFailed);
        }

        let body = response
            .bytes()
            .await
            .map_err(|_| CatalogError::FetchFailed)?;

        Self::decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::value_objects::CatalogEndpoint;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const CATALOG_BODY: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "Popular mascara",
                "category": "beauty",
                "price": 9.99,
                "discountPercentage": 7.17,
                "rating": 4.94,
                "stock": 5,
                "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Essence%20Mascara%20Lash%20Princess/thumbnail.png"
            },
            {
                "id": 2,
                "title": "Eyeshadow Palette with Mirror",
                "category": "beauty",
                "price": 19.99,
                "rating": 3.28,
                "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Eyeshadow%20Palette%20with%20Mirror/thumbnail.png"
            }
        ],
        "total": 194,
        "skip": 0,
        "limit": 30
    }"#;

    /// Serves one canned HTTP response on a local port and returns its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/products", addr)
    }

    fn source_for(url: &str) -> DummyJsonCatalogSource {
        let endpoint = CatalogEndpoint::parse(url).unwrap();
        DummyJsonCatalogSource::new(DummyJsonClient::new(endpoint).unwrap())
    }

    #[test]
    fn should_decode_products_and_ignore_extra_fields() {
        let products = DummyJsonCatalogSource::decode(CATALOG_BODY.as_bytes()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[0].title, "Essence Mascara Lash Princess");
        assert_eq!(products[0].price.to_fixed(), "9.99");
        assert_eq!(products[0].category, "beauty");
        assert!((products[1].rating - 3.28).abs() < f64::EPSILON);
    }

    #[test]
    fn should_keep_decimal_price_exact() {
        let products = DummyJsonCatalogSource::decode(CATALOG_BODY.as_bytes()).unwrap();

        assert_eq!(products[0].price, "9.99".parse::<Money>().unwrap());
    }

    #[test]
    fn should_accept_integer_price() {
        let body = br#"{"products":[{"id":7,"title":"Table","price":300}]}"#;

        let products = DummyJsonCatalogSource::decode(body).unwrap();

        assert_eq!(products[0].price.to_fixed(), "300.00");
        assert_eq!(products[0].thumbnail, "");
    }

    #[test]
    fn should_reject_body_without_product_list() {
        let result = DummyJsonCatalogSource::decode(br#"{"items":[]}"#);

        assert!(matches!(result, Err(CatalogError::InvalidPayload)));
    }

    #[test]
    fn should_reject_negative_price() {
        let body = br#"{"products":[{"id":1,"title":"Broken","price":-1.5}]}"#;

        let result = DummyJsonCatalogSource::decode(body);

        assert!(matches!(result, Err(CatalogError::InvalidPayload)));
    }

    #[test]
    fn should_reject_non_json_body() {
        let result = DummyJsonCatalogSource::decode(b"<html>rate limited</html>");

        assert!(matches!(result, Err(CatalogError::InvalidPayload)));
    }

    #[tokio::test]
    async fn should_fetch_products_over_http() {
        let url = serve_once("HTTP/1.1 200 OK", CATALOG_BODY).await;

        let products = source_for(&url).fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price.to_fixed(), "19.99");
    }

    #[tokio::test]
    async fn should_fail_on_error_status() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;

        let result = source_for(&url).fetch_products().await;

        assert!(matches!(result, Err(CatalogError::FetchFailed)));
    }

    #[tokio::test]
    async fn should_fail_on_non_json_response() {
        let url = serve_once("HTTP/1.1 200 OK", "not json").await;

        let result = source_for(&url).fetch_products().await;

        assert!(matches!(result, Err(CatalogError::InvalidPayload)));
    }

    #[tokio::test]
    async fn should_fail_when_endpoint_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = source_for(&format!("http://{}/products", addr))
            .fetch_products()
            .await;

        assert!(matches!(result, Err(CatalogError::FetchFailed)));
    }
}
