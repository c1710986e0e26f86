use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Change applied to the cart while the store holds it exclusively.
pub type CartMutation = Box<dyn FnOnce(&mut Cart) + Send>;

/// Owner of the session cart. Mutations go through [`CartRepository::update`]
/// so that each one runs to completion before the next is applied.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get(&self) -> Result<Cart, RepositoryError>;
    /// Applies `mutation` and returns the cart as it stands afterwards.
    async fn update(&self, mutation: CartMutation) -> Result<Cart, RepositoryError>;
    /// Swaps in an empty cart and returns the previous one.
    async fn take(&self) -> Result<Cart, RepositoryError>;
}
