use async_trait::async_trait;

use crate::domain::drawer::errors::DrawerError;
use crate::domain::drawer::model::DrawerState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerAction {
    Open,
    Close,
    Toggle,
}

pub struct ChangeDrawerParams {
    pub action: DrawerAction,
}

#[async_trait]
pub trait ChangeDrawerUseCase: Send + Sync {
    async fn execute(&self, params: ChangeDrawerParams) -> Result<DrawerState, DrawerError>;
}
