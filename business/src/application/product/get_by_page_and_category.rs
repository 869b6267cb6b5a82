use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_page_and_category::{
    GetProductsByPageAndCategoryParams, GetProductsByPageAndCategoryUseCase,
};
use crate::domain::product::value_objects::PageRequest;

pub struct GetProductsByPageAndCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetProductsByPageAndCategoryUseCaseImpl {
    async fn run(
        &self,
        params: GetProductsByPageAndCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        if params.category.is_empty() {
            return Err(ProductError::InvalidPagination);
        }
        let page = PageRequest::new(params.page, params.page_size)?;

        self.logger.info(&format!(
            "Fetching category {} page {} (size {})",
            params.category,
            page.page(),
            page.page_size()
        ));

        let products = self
            .repository
            .list_by_page_and_category(page, &params.category)
            .await?;
        Ok(products)
    }
}

#[async_trait]
impl GetProductsByPageAndCategoryUseCase for GetProductsByPageAndCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByPageAndCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        observe("get_by_page_and_category", self.run(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger, stored_product};

    #[tokio::test]
    async fn should_query_repository_with_category_and_page() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list_by_page_and_category()
            .withf(|page, category| page.skip() == 0 && page.limit() == 4 && category == "cats")
            .times(1)
            .returning(|_, _| Ok(vec![stored_product("p-1", "Litter Box")]));

        let use_case = GetProductsByPageAndCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByPageAndCategoryParams {
                page: 1,
                page_size: 4,
                category: "cats".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(products[0].name, "Litter Box");
    }

    #[tokio::test]
    async fn should_reject_when_category_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_by_page_and_category().never();

        let use_case = GetProductsByPageAndCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsByPageAndCategoryParams {
                page: 1,
                page_size: 4,
                category: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::InvalidPagination)));
    }

    #[tokio::test]
    async fn should_reject_when_page_size_is_zero() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_by_page_and_category().never();

        let use_case = GetProductsByPageAndCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsByPageAndCategoryParams {
                page: 1,
                page_size: 0,
                category: "cats".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::InvalidPagination)));
    }
}
