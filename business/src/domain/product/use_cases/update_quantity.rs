use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductQuantityParams {
    pub id: ProductId,
    /// Signed change applied to `quantity_warehouse`.
    pub quantity_change: i64,
}

#[async_trait]
pub trait UpdateProductQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductQuantityParams) -> Result<(), ProductError>;
}
