use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::view::ProductView;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<ProductView, ProductError> {
        self.logger.info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .find_by_id(&params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, PRODUCT_ID, mock_logger, stored_product,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::ProductId;
    use chrono::Utc;

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| id.as_str() == PRODUCT_ID)
            .returning(move |_| Ok(stored_product("Fountain Pen", "Gold nib", 42.0, now)));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(PRODUCT_ID),
            })
            .await;

        let view = result.unwrap();
        assert_eq!(view.id, PRODUCT_ID);
        assert_eq!(view.name, "Fountain Pen");
        assert_eq!(view.description, "Gold nib");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(PRODUCT_ID),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_is_malformed() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::InvalidId));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new("not-a-valid-id-format"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_report_store_timeout_as_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::Timeout));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(PRODUCT_ID),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Timeout)
        ));
    }
}
