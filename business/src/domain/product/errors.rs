use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    NameEmpty,
    #[error("Product price must be greater than zero")]
    InvalidPrice,
    #[error("Product not found")]
    NotFound,
    #[error("{0}")]
    Repository(RepositoryError),
}

impl ProductError {
    /// Lookups by identifier never distinguish a malformed id from a missing one.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound | RepositoryError::InvalidId => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ProductError::NameEmpty | ProductError::InvalidPrice)
    }
}

impl From<RepositoryError> for ProductError {
    fn from(error: RepositoryError) -> Self {
        ProductError::from_lookup(error)
    }
}
