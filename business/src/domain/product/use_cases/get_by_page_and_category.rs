use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductsByPageAndCategoryParams {
    pub page: u32,
    pub page_size: u32,
    pub category: String,
}

#[async_trait]
pub trait GetProductsByPageAndCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByPageAndCategoryParams,
    ) -> Result<Vec<Product>, ProductError>;
}
