use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::cache_keys::CatalogCacheKey;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_categories::GetCategoriesUseCase;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl GetCategoriesUseCaseImpl {
    async fn run(&self) -> Result<Vec<String>, ProductError> {
        self.logger.info("Fetching product categories");

        if let Some(categories) = self
            .cache
            .read::<Vec<String>>(CatalogCacheKey::Categories)
            .await?
        {
            return Ok(categories);
        }

        let categories = self.repository.list_categories().await?;
        self.cache
            .write(CatalogCacheKey::Categories, &categories)
            .await?;
        Ok(categories)
    }
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, ProductError> {
        observe("get_categories", self.run()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, MockStore, catalog_cache, mock_logger,
    };

    #[tokio::test]
    async fn should_cache_categories_on_miss() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .withf(|key| key == "productCategories")
            .returning(|_| Ok(None));
        store
            .expect_set()
            .withf(|key, value, _| key == "productCategories" && value == r#"["birds","cats"]"#)
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(vec!["birds".to_string(), "cats".to_string()]));

        let use_case = GetCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(categories, vec!["birds".to_string(), "cats".to_string()]);
    }

    #[tokio::test]
    async fn should_serve_cached_categories() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some(r#"["fish"]"#.to_string())));
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_categories().never();

        let use_case = GetCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(store),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap(), vec!["fish".to_string()]);
    }
}
