use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::DrawerState;

pub type DrawerMutation = Box<dyn FnOnce(&mut DrawerState) + Send>;

#[async_trait]
pub trait DrawerRepository: Send + Sync {
    async fn get(&self) -> Result<DrawerState, RepositoryError>;
    async fn update(&self, mutation: DrawerMutation) -> Result<DrawerState, RepositoryError>;
}
