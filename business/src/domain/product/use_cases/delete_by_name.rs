use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductsByNameParams {
    pub name: String,
}

#[async_trait]
pub trait DeleteProductsByNameUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductsByNameParams) -> Result<(), ProductError>;
}
