use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::cache_keys::CatalogCacheKey;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete_by_name::{
    DeleteProductsByNameParams, DeleteProductsByNameUseCase,
};

pub struct DeleteProductsByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductsByNameUseCaseImpl {
    async fn run(&self, params: DeleteProductsByNameParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting products named: {}", params.name));

        let removed = self.repository.delete_by_name(&params.name).await?;
        self.cache.evict(CatalogCacheKey::AllProducts).await?;

        self.logger
            .info(&format!("Deleted {} products named {}", removed, params.name));
        Ok(())
    }
}

#[async_trait]
impl DeleteProductsByNameUseCase for DeleteProductsByNameUseCaseImpl {
    async fn execute(&self, params: DeleteProductsByNameParams) -> Result<(), ProductError> {
        observe("delete_by_name", self.run(params)).await
    }
}
