use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::cache_keys::CatalogCacheKey;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_page::{
    GetProductsByPageParams, GetProductsByPageUseCase,
};
use crate::domain::product::value_objects::PageRequest;

pub struct GetProductsByPageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl GetProductsByPageUseCaseImpl {
    async fn run(&self, params: GetProductsByPageParams) -> Result<Vec<Product>, ProductError> {
        let page = PageRequest::new(params.page, params.page_size)?;
        self.logger.info(&format!(
            "Fetching products page {} (size {})",
            page.page(),
            page.page_size()
        ));

        let key = CatalogCacheKey::ProductsPage {
            page: page.page(),
            page_size: page.page_size(),
        };

        // Writes never evict page entries; a cached page may be stale until TTL expiry.
        if let Some(products) = self.cache.read::<Vec<Product>>(key).await? {
            return Ok(products);
        }

        let products = self.repository.list_by_page(page).await?;
        self.cache.write(key, &products).await?;

        Ok(products)
    }
}

#[async_trait]
impl GetProductsByPageUseCase for GetProductsByPageUseCaseImpl {
    async fn execute(&self, params: GetProductsByPageParams) -> Result<Vec<Product>, ProductError> {
        observe("get_by_page", self.run(params)).await
    }
}
