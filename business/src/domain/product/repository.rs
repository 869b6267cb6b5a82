use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductPatch};
use super::value_objects::{PageRequest, ProductId};

/// Persistence port for the product collection.
///
/// Every list returns records in the store's natural (insertion) order.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn list_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn list_by_page(&self, page: PageRequest) -> Result<Vec<Product>, RepositoryError>;
    async fn list_by_page_and_category(
        &self,
        page: PageRequest,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn list_categories(&self) -> Result<Vec<String>, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Assigns the identifier and timestamps, then persists.
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, id: &ProductId, patch: ProductPatch)
    -> Result<Product, RepositoryError>;
    async fn adjust_quantity(&self, id: &ProductId, delta: i64) -> Result<(), RepositoryError>;
    /// Returns the number of removed records; zero is not an error.
    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError>;
    /// Returns the number of removed records; zero is not an error.
    async fn delete_by_id(&self, id: &ProductId) -> Result<u64, RepositoryError>;
}
