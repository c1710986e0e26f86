use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::change_quantity::{
    ChangeQuantityParams, ChangeQuantityUseCase, QuantityChange,
};
use business::domain::cart::use_cases::checkout::CheckoutUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddToCartRequest, CartResponse, CheckoutResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    change_quantity_use_case: Arc<dyn ChangeQuantityUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        change_quantity_use_case: Arc<dyn ChangeQuantityUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            change_quantity_use_case,
            remove_use_case,
            checkout_use_case,
        }
    }

    async fn change_quantity(&self, product_id: u64, change: QuantityChange) -> CartStateResponse {
        self.change_quantity_use_case
            .execute(ChangeQuantityParams {
                product_id: ProductId::new(product_id),
                change,
            })
            .await
            .into()
    }
}

/// Shopping cart API
///
/// Endpoints for the session cart. Operations on products that are not in
/// the cart leave it unchanged and still return the current cart.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the lines, the item count badge and the total price.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> CartStateResponse {
        self.get_use_case.execute().await.into()
    }

    /// Add a product to the cart
    ///
    /// Appends the product with quantity 1, or bumps its quantity when it is
    /// already in the cart. The product must be part of the display set.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let params = AddToCartParams {
            product_id: ProductId::new(body.0.product_id),
        };

        match self.add_use_case.execute(params).await {
            Ok(cart) => AddToCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddToCartResponse::NotFound(json),
                    _ => AddToCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Increase a line's quantity
    #[oai(
        path = "/cart/items/:product_id/increment",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn increment(&self, product_id: Path<u64>) -> CartStateResponse {
        self.change_quantity(product_id.0, QuantityChange::Increment)
            .await
    }

    /// Decrease a line's quantity
    ///
    /// Stops at 1; use the delete endpoint to drop the line.
    #[oai(
        path = "/cart/items/:product_id/decrement",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn decrement(&self, product_id: Path<u64>) -> CartStateResponse {
        self.change_quantity(product_id.0, QuantityChange::Decrement)
            .await
    }

    /// Remove a line
    ///
    /// Drops the line whatever its quantity.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove(&self, product_id: Path<u64>) -> CartStateResponse {
        self.remove_use_case
            .execute(RemoveFromCartParams {
                product_id: ProductId::new(product_id.0),
            })
            .await
            .into()
    }

    /// Check out
    ///
    /// Empties the cart, closes the drawer and returns a confirmation. No
    /// order is recorded.
    #[oai(path = "/cart/checkout", method = "post", tag = "ApiTags::Cart")]
    async fn checkout(&self) -> CheckoutApiResponse {
        match self.checkout_use_case.execute().await {
            Ok(confirmation) => CheckoutApiResponse::Ok(Json(confirmation.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CheckoutApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartStateResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<Result<Cart, CartError>> for CartStateResponse {
    fn from(result: Result<Cart, CartError>) -> Self {
        match result {
            Ok(cart) => CartStateResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartStateResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutApiResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
