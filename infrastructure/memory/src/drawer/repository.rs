use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::drawer::model::DrawerState;
use business::domain::drawer::repository::{DrawerMutation, DrawerRepository};
use business::domain::errors::RepositoryError;

#[derive(Default)]
pub struct InMemoryDrawerRepository {
    state: Mutex<DrawerState>,
}

impl InMemoryDrawerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DrawerRepository for InMemoryDrawerRepository {
    async fn get(&self) -> Result<DrawerState, RepositoryError> {
        Ok(*self.state.lock().await)
    }

    async fn update(&self, mutation: DrawerMutation) -> Result<DrawerState, RepositoryError> {
        let mut state = self.state.lock().await;
        mutation(&mut *state);
        Ok(*state)
    }
}
