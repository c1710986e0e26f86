use poem_openapi::Object;

use business::domain::catalog::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price with two decimals
    pub price: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Average rating
    pub rating: f64,
    /// Catalog category
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            price: product.price.to_fixed(),
            title: product.title,
            thumbnail: product.thumbnail,
            rating: product.rating,
            category: product.category,
        }
    }
}
