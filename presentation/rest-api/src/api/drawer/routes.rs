use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::drawer::errors::DrawerError;
use business::domain::drawer::model::DrawerState;
use business::domain::drawer::use_cases::change::{
    ChangeDrawerParams, ChangeDrawerUseCase, DrawerAction,
};
use business::domain::drawer::use_cases::get::GetDrawerUseCase;

use crate::api::drawer::dto::DrawerResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DrawerApi {
    get_use_case: Arc<dyn GetDrawerUseCase>,
    change_use_case: Arc<dyn ChangeDrawerUseCase>,
}

impl DrawerApi {
    pub fn new(
        get_use_case: Arc<dyn GetDrawerUseCase>,
        change_use_case: Arc<dyn ChangeDrawerUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            change_use_case,
        }
    }

    async fn change(&self, action: DrawerAction) -> DrawerStateResponse {
        self.change_use_case
            .execute(ChangeDrawerParams { action })
            .await
            .into()
    }
}

/// Cart drawer API
///
/// Open/closed state of the slide-out cart panel.
#[OpenApi]
impl DrawerApi {
    /// Get drawer state
    #[oai(path = "/drawer", method = "get", tag = "ApiTags::Drawer")]
    async fn get(&self) -> DrawerStateResponse {
        self.get_use_case.execute().await.into()
    }

    /// Open the drawer
    #[oai(path = "/drawer/open", method = "post", tag = "ApiTags::Drawer")]
    async fn open(&self) -> DrawerStateResponse {
        self.change(DrawerAction::Open).await
    }

    /// Close the drawer
    #[oai(path = "/drawer/close", method = "post", tag = "ApiTags::Drawer")]
    async fn close(&self) -> DrawerStateResponse {
        self.change(DrawerAction::Close).await
    }

    /// Toggle the drawer
    ///
    /// What the cart button does: opens a closed drawer and closes an open one.
    #[oai(path = "/drawer/toggle", method = "post", tag = "ApiTags::Drawer")]
    async fn toggle(&self) -> DrawerStateResponse {
        self.change(DrawerAction::Toggle).await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DrawerStateResponse {
    #[oai(status = 200)]
    Ok(Json<DrawerResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<Result<DrawerState, DrawerError>> for DrawerStateResponse {
    fn from(result: Result<DrawerState, DrawerError>) -> Self {
        match result {
            Ok(state) => DrawerStateResponse::Ok(Json(state.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DrawerStateResponse::InternalError(json)
            }
        }
    }
}
