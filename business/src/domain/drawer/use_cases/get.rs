use async_trait::async_trait;

use crate::domain::drawer::errors::DrawerError;
use crate::domain::drawer::model::DrawerState;

#[async_trait]
pub trait GetDrawerUseCase: Send + Sync {
    async fn execute(&self) -> Result<DrawerState, DrawerError>;
}
