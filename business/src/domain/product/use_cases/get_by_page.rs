use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductsByPageParams {
    pub page: u32,
    pub page_size: u32,
}

#[async_trait]
pub trait GetProductsByPageUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsByPageParams) -> Result<Vec<Product>, ProductError>;
}
