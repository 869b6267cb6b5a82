use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_quantity::{
    UpdateProductQuantityParams, UpdateProductQuantityUseCase,
};

/// Applies a stock movement and drops every catalog cache entry.
pub struct UpdateProductQuantityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductQuantityUseCaseImpl {
    async fn run(&self, params: UpdateProductQuantityParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Adjusting quantity of product {} by {}",
            params.id, params.quantity_change
        ));

        self.repository
            .adjust_quantity(&params.id, params.quantity_change)
            .await
            .map_err(ProductError::from_lookup)?;

        self.cache.evict_all().await?;
        Ok(())
    }
}

#[async_trait]
impl UpdateProductQuantityUseCase for UpdateProductQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateProductQuantityParams) -> Result<(), ProductError> {
        observe("update_quantity", self.run(params)).await
    }
}
