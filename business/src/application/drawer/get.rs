use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::drawer::errors::DrawerError;
use crate::domain::drawer::model::DrawerState;
use crate::domain::drawer::repository::DrawerRepository;
use crate::domain::drawer::use_cases::get::GetDrawerUseCase;
use crate::domain::logger::Logger;

pub struct GetDrawerUseCaseImpl {
    pub repository: Arc<dyn DrawerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDrawerUseCase for GetDrawerUseCaseImpl {
    async fn execute(&self) -> Result<DrawerState, DrawerError> {
        let state = self.repository.get().await?;
        self.logger.debug(&format!("Drawer is {}", state));
        Ok(state)
    }
}
