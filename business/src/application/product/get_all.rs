use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::view::ProductView;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductView>, ProductError> {
        self.logger.info("Fetching all products");

        let products = self
            .repository
            .find_all()
            .await
            .map_err(ProductError::Repository)?;

        self.logger.info(&format!("Fetched {} products", products.len()));
        Ok(products.into_iter().map(ProductView::from).collect())
    }
}
