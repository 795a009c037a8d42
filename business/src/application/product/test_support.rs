use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::search::SearchCriteria;
use crate::domain::product::value_objects::ProductId;

pub const PRODUCT_ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
        async fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn update(
            &self,
            id: &ProductId,
            product: &Product,
        ) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
        async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_product(name: &str, description: &str, price: f64, at: DateTime<Utc>) -> Product {
    Product::from_repository(
        ProductId::new(PRODUCT_ID),
        name.to_string(),
        description.to_string(),
        price,
        at,
        at,
    )
}
