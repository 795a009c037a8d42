use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::search::SearchCriteria;
use crate::domain::product::use_cases::search::SearchProductsUseCase;
use crate::domain::product::view::ProductView;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, criteria: SearchCriteria) -> Result<Vec<ProductView>, ProductError> {
        self.logger.debug(&format!("Searching products with {:?}", criteria));

        let products = self
            .repository
            .search(&criteria)
            .await
            .map_err(ProductError::Repository)?;

        self.logger.info(&format!("Search matched {} products", products.len()));
        Ok(products.into_iter().map(ProductView::from).collect())
    }
}
