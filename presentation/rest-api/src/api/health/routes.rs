use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::catalog::use_cases::get_all::GetCatalogUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of products in the display set (0 until the catalog loads)
    pub catalog_size: u64,
}

pub struct Api {
    get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
}

impl Api {
    pub fn new(get_catalog_use_case: Arc<dyn GetCatalogUseCase>) -> Self {
        Self {
            get_catalog_use_case,
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `catalog_size`: products currently on display; stays 0 when the
    ///   catalog fetch failed
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let catalog_size = self
            .get_catalog_use_case
            .execute()
            .await
            .map(|products| products.len() as u64)
            .unwrap_or_else(|err| {
                tracing::warn!("Catalog unavailable for health check: {}", err);
                0
            });

        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_size,
        })
    }
}
