use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::cache_keys::CatalogCacheKey;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete_by_id::{
    DeleteProductByIdParams, DeleteProductByIdUseCase,
};

pub struct DeleteProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductByIdUseCaseImpl {
    async fn run(&self, params: DeleteProductByIdParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let removed = self.repository.delete_by_id(&params.id).await?;
        if removed == 0 {
            self.logger
                .warn(&format!("No product matched id {}", params.id));
        }

        self.cache.evict(CatalogCacheKey::AllProducts).await?;
        Ok(())
    }
}

#[async_trait]
impl DeleteProductByIdUseCase for DeleteProductByIdUseCaseImpl {
    async fn execute(&self, params: DeleteProductByIdParams) -> Result<(), ProductError> {
        observe("delete_by_id", self.run(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, MockStore, catalog_cache, mock_logger,
    };
    use crate::domain::cache::CacheError;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::ProductId;

    #[tokio::test]
    async fn should_delete_product_and_evict_full_list() {
        let mut store = MockStore::new();
        store
            .expect_delete()
            .withf(|key| key == "allProducts")
            .times(1)
            .returning(|_| Ok(()));
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete_by_id()
            .withf(|id| id.as_str() == "p-9")
            .times(1)
            .returning(|_| Ok(1));

        let use_case = DeleteProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductByIdParams {
                id: ProductId::new("p-9"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_for_unknown_id() {
        let mut store = MockStore::new();
        store.expect_delete().returning(|_| Ok(()));
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete_by_id().returning(|_| Ok(0));

        let use_case = DeleteProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductByIdParams {
                id: ProductId::new("not-a-real-id"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_cache_failure_after_delete() {
        let mut store = MockStore::new();
        store
            .expect_delete()
            .returning(|_| Err(CacheError::Unavailable));
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete_by_id().times(1).returning(|_| Ok(1));

        let use_case = DeleteProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductByIdParams {
                id: ProductId::new("p-9"),
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Cache(CacheError::Unavailable))
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut store = MockStore::new();
        store.expect_delete().never();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductByIdParams {
                id: ProductId::new("p-9"),
            })
            .await;

        assert!(result.is_err());
    }
}
