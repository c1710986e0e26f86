use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod catalog {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod drawer {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod catalog_config;
    pub mod cors_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use business::domain::catalog::use_cases::load::CatalogLoadOutcome;
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront API entry point
///
/// - config/: environment configuration (server, CORS, catalog endpoint)
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG from .env applies too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Catalog endpoint: {}", config.catalog.endpoint);

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.catalog)?;

    // 5. Load the catalog in the background; the API is usable meanwhile
    let load_catalog = container.load_catalog.clone();
    tokio::spawn(async move {
        match load_catalog.execute().await {
            Ok(CatalogLoadOutcome::Replaced { count }) => {
                tracing::info!(count, "catalog ready")
            }
            Ok(CatalogLoadOutcome::Kept { count }) => {
                tracing::warn!(count, "catalog unavailable, display set unchanged")
            }
            Err(err) => tracing::error!("catalog load aborted: {}", err),
        }
    });

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
