use std::sync::Arc;

use business::application::product::catalog_cache::CatalogCache;
use business::application::product::count::CountProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete_by_id::DeleteProductByIdUseCaseImpl;
use business::application::product::delete_by_name::DeleteProductsByNameUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_by_name::GetProductsByNameUseCaseImpl;
use business::application::product::get_by_page::GetProductsByPageUseCaseImpl;
use business::application::product::get_by_page_and_category::GetProductsByPageAndCategoryUseCaseImpl;
use business::application::product::get_categories::GetCategoriesUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::update_quantity::UpdateProductQuantityUseCaseImpl;
use business::domain::cache::CacheStore;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use cache::{InMemoryCacheStore, RedisCacheStore};
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use crate::api::product::routes::{ProductApi, ProductUseCases};
use crate::config::app_config::AppConfig;
use crate::config::cache_config::{CacheBackend, CacheConfig};
use crate::config::database_config;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());

        // Infrastructure adapters
        let supervisor = database_config::init_database(&config.database).await?;
        let product_repository = Arc::new(ProductRepositoryPostgres::new(supervisor.clone()));
        let cache_store = init_cache_store(&config.cache).await?;
        let catalog_cache = Arc::new(CatalogCache::new(
            cache_store,
            config.cache.ttl,
            Arc::new(TracingLogger::new("cache")),
        ));

        let health_api = crate::api::health::routes::Api::new(supervisor);
        let product_api = build_product_api(product_repository, catalog_cache, logger);

        Ok(Self {
            health_api,
            product_api,
        })
    }
}

async fn init_cache_store(config: &CacheConfig) -> anyhow::Result<Arc<dyn CacheStore>> {
    match config.backend {
        CacheBackend::Redis => {
            let store = RedisCacheStore::connect(&config.redis_url).await?;
            tracing::info!("Using Redis cache store");
            Ok(Arc::new(store))
        }
        CacheBackend::Memory => {
            tracing::info!("Using in-process cache store");
            Ok(Arc::new(InMemoryCacheStore::new()))
        }
    }
}

/// Wires every catalog use case over the given ports.
pub fn build_product_api(
    repository: Arc<dyn ProductRepository>,
    cache: Arc<CatalogCache>,
    logger: Arc<dyn Logger>,
) -> ProductApi {
    ProductApi::new(ProductUseCases {
        get_all: Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            cache: cache.clone(),
            logger: logger.clone(),
        }),
        get_by_name: Arc::new(GetProductsByNameUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        }),
        get_by_page: Arc::new(GetProductsByPageUseCaseImpl {
            repository: repository.clone(),
            cache: cache.clone(),
            logger: logger.clone(),
        }),
        get_by_page_and_category: Arc::new(GetProductsByPageAndCategoryUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        }),
        get_categories: Arc::new(GetCategoriesUseCaseImpl {
            repository: repository.clone(),
            cache: cache.clone(),
            logger: logger.clone(),
        }),
        count: Arc::new(CountProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        }),
        get_by_id: Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        }),
        create: Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            cache: cache.clone(),
            logger: logger.clone(),
        }),
        update: Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            cache: cache.clone(),
            logger: logger.clone(),
        }),
        update_quantity: Arc::new(UpdateProductQuantityUseCaseImpl {
            repository: repository.clone(),
            cache: cache.clone(),
            logger: logger.clone(),
        }),
        delete_by_name: Arc::new(DeleteProductsByNameUseCaseImpl {
            repository: repository.clone(),
            cache: cache.clone(),
            logger: logger.clone(),
        }),
        delete_by_id: Arc::new(DeleteProductByIdUseCaseImpl {
            repository,
            cache,
            logger,
        }),
    })
}
