use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductChanges;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::view::ProductView;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<ProductView, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .find_by_id(&params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        // Read-merge-write without a concurrency token: a concurrent update
        // of the same product can overwrite these fields.
        product.apply_changes(&ProductChanges {
            name: params.name,
            description: params.description,
            price: params.price,
        });

        let updated = self
            .repository
            .update(&params.id, &product)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated.into())
    }
}
