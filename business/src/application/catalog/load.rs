use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::services::CatalogSource;
use crate::domain::catalog::use_cases::load::{CatalogLoadOutcome, LoadCatalogUseCase};
use crate::domain::logger::Logger;

pub struct LoadCatalogUseCaseImpl {
    pub source: Arc<dyn CatalogSource>,
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> Result<CatalogLoadOutcome, CatalogError> {
        self.logger.info("Loading product catalog");

        match self.source.fetch_products().await {
            Ok(products) => {
                let count = products.len();
                self.repository.replace_all(products).await?;
                self.logger
                    .info(&format!("Catalog loaded with {} products", count));
                Ok(CatalogLoadOutcome::Replaced { count })
            }
            Err(err) => {
                // A failed fetch never reaches the caller; the display set stays as it was.
                self.logger
                    .error(&format!("Catalog fetch failed: {}", err));
                let count = self.repository.get_all().await?.len();
                Ok(CatalogLoadOutcome::Kept { count })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn replace_all(&self, products: Vec<Product>) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Source {}

        #[async_trait]
        impl CatalogSource for Source {
            async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price: "9.99".parse().unwrap(),
            thumbnail: String::new(),
            rating: 4.0,
            category: "groceries".to_string(),
        }
    }

    #[tokio::test]
    async fn should_replace_display_set_when_fetch_succeeds() {
        let mut mock_source = MockSource::new();
        mock_source
            .expect_fetch_products()
            .times(1)
            .returning(|| Ok(vec![product(1), product(2)]));

        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_replace_all()
            .withf(|products| products.len() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LoadCatalogUseCaseImpl {
            source: Arc::new(mock_source),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap(), CatalogLoadOutcome::Replaced { count: 2 });
    }

    #[tokio::test]
    async fn should_keep_previous_display_set_when_fetch_fails() {
        let mut mock_source = MockSource::new();
        mock_source
            .expect_fetch_products()
            .returning(|| Err(CatalogError::FetchFailed));

        let mut mock_repo = MockCatalogRepo::new();
        mock_repo.expect_replace_all().never();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![product(5)]));

        let use_case = LoadCatalogUseCaseImpl {
            source: Arc::new(mock_source),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap(), CatalogLoadOutcome::Kept { count: 1 });
    }

    #[tokio::test]
    async fn should_log_error_and_stay_empty_on_first_failed_load() {
        let mut mock_source = MockSource::new();
        mock_source
            .expect_fetch_products()
            .returning(|| Err(CatalogError::InvalidPayload));

        let mut mock_repo = MockCatalogRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("catalog.invalid_payload"))
            .times(1)
            .returning(|_| ());

        let use_case = LoadCatalogUseCaseImpl {
            source: Arc::new(mock_source),
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap(), CatalogLoadOutcome::Kept { count: 0 });
    }
}
