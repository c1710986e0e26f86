#[derive(Debug, thiserror::Error)]
pub enum DrawerError {
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
