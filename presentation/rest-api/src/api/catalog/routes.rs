use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::use_cases::get_all::GetCatalogUseCase;
use business::domain::catalog::use_cases::get_by_id::{GetProductParams, GetProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::catalog::dto::ProductResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_all_use_case: Arc<dyn GetCatalogUseCase>,
    get_by_id_use_case: Arc<dyn GetProductUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetCatalogUseCase>,
        get_by_id_use_case: Arc<dyn GetProductUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only view of the products fetched at startup.
#[OpenApi]
impl CatalogApi {
    /// List products
    ///
    /// Returns the display set in catalog order. Empty while the catalog is
    /// still loading or when the fetch failed.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_all(&self) -> GetProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product
    #[oai(path = "/products/:product_id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_by_id(&self, product_id: Path<u64>) -> GetProductResponse {
        let params = GetProductParams {
            id: ProductId::new(product_id.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
