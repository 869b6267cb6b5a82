use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductsByNameParams {
    pub name: String,
}

#[async_trait]
pub trait GetProductsByNameUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsByNameParams) -> Result<Vec<Product>, ProductError>;
}
