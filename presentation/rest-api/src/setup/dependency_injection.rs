use std::sync::Arc;

use dummyjson::catalog_source::DummyJsonCatalogSource;
use dummyjson::client::DummyJsonClient;
use logger::TracingLogger;
use memory::cart::repository::InMemoryCartRepository;
use memory::catalog::repository::InMemoryCatalogRepository;
use memory::drawer::repository::InMemoryDrawerRepository;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::change_quantity::ChangeQuantityUseCaseImpl;
use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::catalog::get_all::GetCatalogUseCaseImpl;
use business::application::catalog::get_by_id::GetProductUseCaseImpl;
use business::application::catalog::load::LoadCatalogUseCaseImpl;
use business::application::drawer::change::ChangeDrawerUseCaseImpl;
use business::application::drawer::get::GetDrawerUseCaseImpl;
use business::domain::catalog::services::CatalogSource;
use business::domain::catalog::use_cases::load::LoadCatalogUseCase;

use crate::config::catalog_config::CatalogConfig;

/// One container is one storefront session: every store it creates lives
/// as long as the process.
pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub drawer_api: crate::api::drawer::routes::DrawerApi,
    pub load_catalog: Arc<dyn LoadCatalogUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let client = DummyJsonClient::new(config.endpoint.clone())?;
        Ok(Self::with_catalog_source(Arc::new(
            DummyJsonCatalogSource::new(client),
        )))
    }

    pub fn with_catalog_source(source: Arc<dyn CatalogSource>) -> Self {
        let logger = Arc::new(TracingLogger);

        // Session stores
        let catalog_repository = Arc::new(InMemoryCatalogRepository::new());
        let cart_repository = Arc::new(InMemoryCartRepository::new());
        let drawer_repository = Arc::new(InMemoryDrawerRepository::new());

        // Catalog use cases
        let load_catalog = Arc::new(LoadCatalogUseCaseImpl {
            source,
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_catalog_use_case = Arc::new(GetCatalogUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            catalog: catalog_repository,
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let change_quantity_use_case = Arc::new(ChangeQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            repository: cart_repository,
            drawer: drawer_repository.clone(),
            logger: logger.clone(),
        });

        // Drawer use cases
        let get_drawer_use_case = Arc::new(GetDrawerUseCaseImpl {
            repository: drawer_repository.clone(),
            logger: logger.clone(),
        });
        let change_drawer_use_case = Arc::new(ChangeDrawerUseCaseImpl {
            repository: drawer_repository,
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(get_catalog_use_case.clone());
        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_catalog_use_case,
            get_product_use_case,
        );
        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_to_cart_use_case,
            change_quantity_use_case,
            remove_from_cart_use_case,
            checkout_use_case,
        );
        let drawer_api =
            crate::api::drawer::routes::DrawerApi::new(get_drawer_use_case, change_drawer_use_case);

        Self {
            health_api,
            catalog_api,
            cart_api,
            drawer_api,
            load_catalog,
        }
    }
}
