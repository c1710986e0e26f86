use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// Display set of the storefront, empty until the first successful load.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn replace_all(&self, products: Vec<Product>) -> Result<(), RepositoryError> {
        let mut current = self.products.write().await;
        tracing::debug!(
            previous = current.len(),
            next = products.len(),
            "replacing display set"
        );
        *current = products;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::product;

    #[tokio::test]
    async fn should_be_empty_before_first_load() {
        let repository = InMemoryCatalogRepository::new();

        assert!(repository.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_replace_whole_display_set() {
        let repository = InMemoryCatalogRepository::new();
        repository
            .replace_all(vec![product(1, "9.99"), product(2, "19.99")])
            .await
            .unwrap();

        repository
            .replace_all(vec![product(3, "4.99")])
            .await
            .unwrap();

        let products = repository.get_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::new(3));
    }

    #[tokio::test]
    async fn should_find_product_by_id() {
        let repository = InMemoryCatalogRepository::new();
        repository
            .replace_all(vec![product(1, "9.99"), product(2, "19.99")])
            .await
            .unwrap();

        let found = repository.get_by_id(ProductId::new(2)).await.unwrap();

        assert_eq!(found.price.to_fixed(), "19.99");
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let repository = InMemoryCatalogRepository::new();

        let result = repository.get_by_id(ProductId::new(1)).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
