use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductPatch};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{PageRequest, ProductId};

use super::entity::{PRODUCT_COLUMNS, ProductEntity};
use crate::supervisor::ConnectionSupervisor;

/// Connection-level failures become `StorageUnavailable`; anything else the
/// driver reports is a `DatabaseError`.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(error = %err, "Product store unavailable");
            RepositoryError::storage_unavailable()
        }
        other => {
            tracing::error!(error = %other, "Product query failed");
            RepositoryError::database_error()
        }
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub struct ProductRepositoryPostgres {
    supervisor: Arc<ConnectionSupervisor>,
}

impl ProductRepositoryPostgres {
    pub fn new(supervisor: Arc<ConnectionSupervisor>) -> Self {
        Self { supervisor }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY seq"
        ))
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn list_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE name = $1 ORDER BY seq"
        ))
        .bind(name)
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn list_by_page(&self, page: PageRequest) -> Result<Vec<Product>, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY seq OFFSET $1 LIMIT $2"
        ))
        .bind(to_i64(page.skip()))
        .bind(to_i64(page.limit()))
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn list_by_page_and_category(
        &self,
        page: PageRequest,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = $1 ORDER BY seq OFFSET $2 LIMIT $3"
        ))
        .bind(category)
        .bind(to_i64(page.skip()))
        .bind(to_i64(page.limit()))
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn list_categories(&self) -> Result<Vec<String>, RepositoryError> {
        let pool = self.supervisor.pool().await;
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM products WHERE category IS NOT NULL AND category <> '' ORDER BY category",
        )
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let now = Utc::now();
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"INSERT INTO products (id, name, description, price, category, disponibility,
                quantity_warehouse, images, dimensions, brand, colors, sku, dt_created, dt_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(Uuid::new_v4().to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category)
        .bind(product.disponibility)
        .bind(product.quantity_warehouse)
        .bind(&product.images)
        .bind(Json(&product.dimensions))
        .bind(&product.brand)
        .bind(&product.colors)
        .bind(&product.sku)
        .bind(now)
        .fetch_one(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let pool = self.supervisor.pool().await;
        // dt_updated is left as stored.
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = COALESCE($4, description)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(id.as_str())
        .bind(patch.name)
        .bind(patch.price)
        .bind(patch.description)
        .fetch_optional(&pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn adjust_quantity(&self, id: &ProductId, delta: i64) -> Result<(), RepositoryError> {
        let pool = self.supervisor.pool().await;
        let result = sqlx::query(
            "UPDATE products SET quantity_warehouse = quantity_warehouse + $2, dt_updated = $3 WHERE id = $1",
        )
        .bind(id.as_str())
        .bind(delta)
        .bind(Utc::now())
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let result = sqlx::query("DELETE FROM products WHERE name = $1")
            .bind(name)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<u64, RepositoryError> {
        let pool = self.supervisor.pool().await;
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
