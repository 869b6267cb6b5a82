use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductByIdParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductByIdParams) -> Result<(), ProductError>;
}
