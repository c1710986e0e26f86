use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::{CartMutation, CartRepository};
use business::domain::errors::RepositoryError;

/// Session cart guarded by an async mutex; each mutation holds the lock
/// for its whole duration.
#[derive(Default)]
pub struct InMemoryCartRepository {
    cart: Mutex<Cart>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get(&self) -> Result<Cart, RepositoryError> {
        Ok(self.cart.lock().await.clone())
    }

    async fn update(&self, mutation: CartMutation) -> Result<Cart, RepositoryError> {
        let mut cart = self.cart.lock().await;
        mutation(&mut *cart);
        tracing::debug!(lines = cart.lines().len(), "cart updated");
        Ok(cart.clone())
    }

    async fn take(&self) -> Result<Cart, RepositoryError> {
        let mut cart = self.cart.lock().await;
        Ok(std::mem::take(&mut *cart))
    }
}
