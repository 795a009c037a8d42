use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::view::ProductView;

pub struct CreateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<ProductView, ProductError>;
}
