use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::view::ProductView;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProductView>, ProductError>;
}
