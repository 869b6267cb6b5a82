use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::telemetry::observe;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_name::{
    GetProductsByNameParams, GetProductsByNameUseCase,
};

pub struct GetProductsByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetProductsByNameUseCaseImpl {
    async fn run(&self, params: GetProductsByNameParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching products by name: {}", params.name));
        let products = self.repository.list_by_name(&params.name).await?;
        self.logger.info(&format!(
            "Found {} products named {}",
            products.len(),
            params.name
        ));
        Ok(products)
    }
}

#[async_trait]
impl GetProductsByNameUseCase for GetProductsByNameUseCaseImpl {
    async fn execute(&self, params: GetProductsByNameParams) -> Result<Vec<Product>, ProductError> {
        observe("get_by_name", self.run(params)).await
    }
}
