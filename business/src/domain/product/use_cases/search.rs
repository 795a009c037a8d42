use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::search::SearchCriteria;
use crate::domain::product::view::ProductView;

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, criteria: SearchCriteria) -> Result<Vec<ProductView>, ProductError>;
}
