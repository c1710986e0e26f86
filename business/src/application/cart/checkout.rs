use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CheckoutConfirmation;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::checkout::CheckoutUseCase;
use crate::domain::drawer::model::DrawerState;
use crate::domain::drawer::repository::DrawerRepository;
use crate::domain::logger::Logger;

pub struct CheckoutUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub drawer: Arc<dyn DrawerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self) -> Result<CheckoutConfirmation, CartError> {
        self.logger.info("Checking out cart");

        let mut cart = self.repository.take().await?;
        let confirmation = cart.checkout();

        // The cart is already emptied; a drawer failure must not drop the confirmation.
        if let Err(err) = self
            .drawer
            .update(Box::new(|drawer: &mut DrawerState| drawer.close()))
            .await
        {
            self.logger
                .error(&format!("Could not close drawer after checkout: {}", err));
        }

        self.logger.info(&format!(
            "Checkout confirmed: {} items, total {}",
            confirmation.item_count, confirmation.total_price
        ));
        Ok(confirmation)
    }
}
