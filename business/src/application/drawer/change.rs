use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::drawer::errors::DrawerError;
use crate::domain::drawer::model::DrawerState;
use crate::domain::drawer::repository::DrawerRepository;
use crate::domain::drawer::use_cases::change::{
    ChangeDrawerParams, ChangeDrawerUseCase, DrawerAction,
};
use crate::domain::logger::Logger;

pub struct ChangeDrawerUseCaseImpl {
    pub repository: Arc<dyn DrawerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ChangeDrawerUseCase for ChangeDrawerUseCaseImpl {
    async fn execute(&self, params: ChangeDrawerParams) -> Result<DrawerState, DrawerError> {
        let action = params.action;
        let state = self
            .repository
            .update(Box::new(move |drawer: &mut DrawerState| match action {
                DrawerAction::Open => drawer.open(),
                DrawerAction::Close => drawer.close(),
                DrawerAction::Toggle => drawer.toggle(),
            }))
            .await?;

        self.logger
            .debug(&format!("Drawer {:?} -> {}", action, state));
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drawer::repository::DrawerMutation;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub DrawerRepo {}

        #[async_trait]
        impl DrawerRepository for DrawerRepo {
            async fn get(&self) -> Result<DrawerState, RepositoryError>;
            async fn update(&self, mutation: DrawerMutation) -> Result<DrawerState, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case_from(start: DrawerState) -> ChangeDrawerUseCaseImpl {
        let mut mock_repo = MockDrawerRepo::new();
        mock_repo.expect_update().returning(move |mutation| {
            let mut drawer = start;
            mutation(&mut drawer);
            Ok(drawer)
        });
        ChangeDrawerUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    async fn apply(start: DrawerState, action: DrawerAction) -> DrawerState {
        use_case_from(start)
            .execute(ChangeDrawerParams { action })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn should_open_closed_drawer() {
        assert_eq!(
            apply(DrawerState::Closed, DrawerAction::Open).await,
            DrawerState::Open
        );
    }

    #[tokio::test]
    async fn should_close_open_drawer() {
        assert_eq!(
            apply(DrawerState::Open, DrawerAction::Close).await,
            DrawerState::Closed
        );
    }

    #[tokio::test]
    async fn should_toggle_both_ways() {
        assert_eq!(
            apply(DrawerState::Closed, DrawerAction::Toggle).await,
            DrawerState::Open
        );
        assert_eq!(
            apply(DrawerState::Open, DrawerAction::Toggle).await,
            DrawerState::Closed
        );
    }
}
