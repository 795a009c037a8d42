use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::search::SearchCriteria;
use super::value_objects::ProductId;

/// Persistence port for products.
///
/// Implementations own identifier encoding and timestamps. Lookups by a
/// malformed identifier fail with `RepositoryError::InvalidId`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product, assigning its identifier and both timestamps.
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Overwrites the mutable fields and refreshes `updated_at`.
    async fn update(&self, id: &ProductId, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Product>, RepositoryError>;
}
