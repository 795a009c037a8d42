/// Repository errors for domain layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("document not found")]
    NotFound,
    /// The identifier is not in the form the store accepts.
    #[error("invalid identifier")]
    InvalidId,
    #[error("store operation timed out")]
    Timeout,
    #[error("{0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn invalid_id() -> Self {
        RepositoryError::InvalidId
    }
    pub fn timeout() -> Self {
        RepositoryError::Timeout
    }
    pub fn database_error(message: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(message.into())
    }
}
