use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::cache_keys::CatalogCacheKey;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl GetAllProductsUseCaseImpl {
    async fn run(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");

        if let Some(products) = self
            .cache
            .read::<Vec<Product>>(CatalogCacheKey::AllProducts)
            .await?
        {
            self.logger
                .info(&format!("Serving {} products from cache", products.len()));
            return Ok(products);
        }

        let products = self.repository.list_all().await?;
        self.cache
            .write(CatalogCacheKey::AllProducts, &products)
            .await?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        observe("get_all", self.run()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, MockStore, catalog_cache, mock_logger, stored_product,
    };
    use crate::domain::cache::CacheError;
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_serve_cached_products_without_touching_repository() {
        let cached = serde_json::to_string(&vec![stored_product("p-1", "Cat Tree")]).unwrap();
        let mut store = MockStore::new();
        store
            .expect_get()
            .withf(|key| key == "allProducts")
            .returning(move |_| Ok(Some(cached.clone())));
        store.expect_set().never();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_all().never();

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Cat Tree");
    }

    #[tokio::test]
    async fn should_load_and_cache_products_when_cache_misses() {
        let mut store = MockStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .withf(|key, value, _| key == "allProducts" && value.contains("Scratching Post"))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![stored_product("p-1", "Scratching Post")]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_storage_unavailable() {
        let mut store = MockStore::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_set().never();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list_all()
            .returning(|| Err(RepositoryError::StorageUnavailable));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::StorageUnavailable))
        ));
    }

    #[tokio::test]
    async fn should_propagate_cache_failure() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Err(CacheError::Unavailable));
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_all().never();

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(ProductError::Cache(CacheError::Unavailable))
        ));
    }
}
