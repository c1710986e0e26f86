use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::GetCatalogUseCase;
use crate::domain::logger::Logger;

pub struct GetCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.debug("Reading catalog display set");
        let products = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Display set holds {} products", products.len()));
        Ok(products)
    }
}
