use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::view::ProductView;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<ProductView, ProductError> {
        self.logger.info(&format!("Creating product: {}", params.name));

        let product = NewProduct::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
        })?;

        let stored = self
            .repository
            .insert(product)
            .await
            .map_err(ProductError::Repository)?;

        self.logger.info(&format!("Product created with id: {}", stored.id));
        Ok(stored.into())
    }
}
