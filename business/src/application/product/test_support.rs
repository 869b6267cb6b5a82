use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::application::product::catalog_cache::CatalogCache;
use crate::domain::cache::{CacheError, CacheStore};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product, ProductPatch};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::{Dimensions, PageRequest, ProductId};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn list_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
        async fn list_by_page(&self, page: PageRequest) -> Result<Vec<Product>, RepositoryError>;
        async fn list_by_page_and_category(&self, page: PageRequest, category: &str) -> Result<Vec<Product>, RepositoryError>;
        async fn list_categories(&self) -> Result<Vec<String>, RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, RepositoryError>;
        async fn adjust_quantity(&self, id: &ProductId, delta: i64) -> Result<(), RepositoryError>;
        async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError>;
        async fn delete_by_id(&self, id: &ProductId) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Store {}

    #[async_trait]
    impl CacheStore for Store {
        async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
        async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
        async fn delete(&self, key: &str) -> Result<(), CacheError>;
        async fn delete_by_prefix(&self, prefix: &str) -> Result<u64, CacheError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn catalog_cache(store: MockStore) -> Arc<CatalogCache> {
    Arc::new(CatalogCache::new(
        Arc::new(store),
        CatalogCache::DEFAULT_TTL,
        mock_logger(),
    ))
}

pub fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        price,
        category: Some("dogs".to_string()),
        disponibility: true,
        quantity_warehouse: 10,
        images: vec!["https://cdn.velure.dev/p/1.png".to_string()],
        dimensions: Dimensions::default(),
        brand: Some("PetLove".to_string()),
        colors: vec![],
        sku: None,
    }
}

pub fn stored_product(id: &str, name: &str) -> Product {
    Product::from_new(ProductId::new(id), new_product(name, 19.9), Utc::now())
}
