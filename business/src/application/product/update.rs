use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::cache_keys::CatalogCacheKey;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    async fn run(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        params.patch.validate()?;

        let product = self
            .repository
            .update(&params.id, params.patch)
            .await
            .map_err(ProductError::from_lookup)?;

        self.cache.evict(CatalogCacheKey::AllProducts).await?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        observe("update", self.run(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, MockStore, catalog_cache, mock_logger, stored_product,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductPatch;
    use crate::domain::product::value_objects::ProductId;

    #[tokio::test]
    async fn should_apply_patch_and_evict_full_list() {
        let mut store = MockStore::new();
        store
            .expect_delete()
            .withf(|key| key == "allProducts")
            .times(1)
            .returning(|_| Ok(()));
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|id, patch| id.as_str() == "p-2" && patch.price == Some(42.0))
            .times(1)
            .returning(|id, patch| {
                let mut product = stored_product(id.as_str(), "Dog Bed");
                product.apply(patch);
                Ok(product)
            });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: ProductId::new("p-2"),
                patch: ProductPatch {
                    price: Some(42.0),
                    ..ProductPatch::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(product.price, 42.0);
        assert_eq!(product.name, "Dog Bed");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_missing() {
        let mut store = MockStore::new();
        store.expect_delete().never();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new("missing"),
                patch: ProductPatch {
                    name: Some("Renamed".to_string()),
                    ..ProductPatch::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_reject_blank_name_in_patch() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(MockStore::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new("p-2"),
                patch: ProductPatch {
                    name: Some(String::new()),
                    ..ProductPatch::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }
}
