use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::count::CountProductsUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete_by_id::{
    DeleteProductByIdParams, DeleteProductByIdUseCase,
};
use business::domain::product::use_cases::delete_by_name::{
    DeleteProductsByNameParams, DeleteProductsByNameUseCase,
};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_by_name::{
    GetProductsByNameParams, GetProductsByNameUseCase,
};
use business::domain::product::use_cases::get_by_page::{
    GetProductsByPageParams, GetProductsByPageUseCase,
};
use business::domain::product::use_cases::get_by_page_and_category::{
    GetProductsByPageAndCategoryParams, GetProductsByPageAndCategoryUseCase,
};
use business::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::use_cases::update_quantity::{
    UpdateProductQuantityParams, UpdateProductQuantityUseCase,
};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, MessageResponse, ProductResponse, UpdateProductRequest,
    UpdateQuantityRequest,
};
use crate::api::tags::ApiTags;

/// Every catalog use case the HTTP surface dispatches to.
pub struct ProductUseCases {
    pub get_all: Arc<dyn GetAllProductsUseCase>,
    pub get_by_name: Arc<dyn GetProductsByNameUseCase>,
    pub get_by_page: Arc<dyn GetProductsByPageUseCase>,
    pub get_by_page_and_category: Arc<dyn GetProductsByPageAndCategoryUseCase>,
    pub get_categories: Arc<dyn GetCategoriesUseCase>,
    pub count: Arc<dyn CountProductsUseCase>,
    pub get_by_id: Arc<dyn GetProductByIdUseCase>,
    pub create: Arc<dyn CreateProductUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub update_quantity: Arc<dyn UpdateProductQuantityUseCase>,
    pub delete_by_name: Arc<dyn DeleteProductsByNameUseCase>,
    pub delete_by_id: Arc<dyn DeleteProductByIdUseCase>,
}

pub struct ProductApi {
    use_cases: ProductUseCases,
}

impl ProductApi {
    pub fn new(use_cases: ProductUseCases) -> Self {
        Self { use_cases }
    }
}

/// Both pagination parameters are required; a missing or non-numeric value is
/// reported as zero so the use case rejects it with the pagination error.
fn page_params(page: Option<String>, page_size: Option<String>) -> (u32, u32) {
    let parse = |value: Option<String>| {
        value
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0)
    };
    (parse(page), parse(page_size))
}

fn to_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}

/// Product catalog API
///
/// Listing, lookup and maintenance of catalog products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in insertion order.
    #[oai(path = "/product", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ListProductsResponse {
        match self.use_cases.get_all.execute().await {
            Ok(products) => ListProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => err.into(),
        }
    }

    /// List products with an exact name
    #[oai(
        path = "/product/getProductsByName/:name",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_by_name(&self, name: Path<String>) -> ListProductsResponse {
        match self
            .use_cases
            .get_by_name
            .execute(GetProductsByNameParams { name: name.0 })
            .await
        {
            Ok(products) => ListProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => err.into(),
        }
    }

    /// List one page of products
    ///
    /// Pages start at 1. Both `page` and `pageSize` are required.
    #[oai(
        path = "/product/getProductsByPage",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_by_page(
        &self,
        page: Query<Option<String>>,
        #[oai(name = "pageSize")] page_size: Query<Option<String>>,
    ) -> ListProductsResponse {
        let (page, page_size) = page_params(page.0, page_size.0);
        match self
            .use_cases
            .get_by_page
            .execute(GetProductsByPageParams { page, page_size })
            .await
        {
            Ok(products) => ListProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => err.into(),
        }
    }

    /// Search products by name
    ///
    /// Matches names exactly. `q` is required.
    #[oai(
        path = "/product/products/search",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn search_products(&self, q: Query<Option<String>>) -> ListProductsResponse {
        let Some(name) = q.0.filter(|query| !query.is_empty()) else {
            return ListProductsResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "product.missing_search_query",
            )));
        };
        match self
            .use_cases
            .get_by_name
            .execute(GetProductsByNameParams { name })
            .await
        {
            Ok(products) => ListProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => err.into(),
        }
    }

    /// List one page of products
    ///
    /// Accepts `limit` or `pageSize` for the page size; `limit` wins when both
    /// are given.
    #[oai(path = "/product/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
        #[oai(name = "pageSize")] page_size: Query<Option<String>>,
    ) -> ListProductsResponse {
        let size = limit.0.filter(|value| !value.is_empty()).or(page_size.0);
        let (page, page_size) = page_params(page.0, size);
        match self
            .use_cases
            .get_by_page
            .execute(GetProductsByPageParams { page, page_size })
            .await
        {
            Ok(products) => ListProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => err.into(),
        }
    }

    /// List one page of products within a category
    #[oai(
        path = "/product/getProductsByPageAndCategory",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_by_page_and_category(
        &self,
        page: Query<Option<String>>,
        #[oai(name = "pageSize")] page_size: Query<Option<String>>,
        category: Query<Option<String>>,
    ) -> ListProductsResponse {
        let (page, page_size) = page_params(page.0, page_size.0);
        let params = GetProductsByPageAndCategoryParams {
            page,
            page_size,
            category: category.0.unwrap_or_default(),
        };
        match self.use_cases.get_by_page_and_category.execute(params).await {
            Ok(products) => ListProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => err.into(),
        }
    }

    /// Count all products
    #[oai(
        path = "/product/getProductsCount",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_count(&self) -> CountProductsResponse {
        match self.use_cases.count.execute().await {
            Ok(count) => CountProductsResponse::Ok(Json(count)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => CountProductsResponse::ServiceUnavailable(json),
                    _ => CountProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List distinct product categories
    #[oai(path = "/product/categories", method = "get", tag = "ApiTags::Products")]
    async fn get_categories(&self) -> CategoriesResponse {
        match self.use_cases.get_categories.execute().await {
            Ok(categories) => CategoriesResponse::Ok(Json(categories)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => CategoriesResponse::ServiceUnavailable(json),
                    _ => CategoriesResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    #[oai(path = "/product", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            product: body.0.into(),
        };

        match self.use_cases.create.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    503 => CreateProductResponse::ServiceUnavailable(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Apply a stock movement to a product
    #[oai(path = "/product/updateQuantity", method = "post", tag = "ApiTags::Products")]
    async fn update_quantity(&self, body: Json<UpdateQuantityRequest>) -> UpdateQuantityResponse {
        let params = UpdateProductQuantityParams {
            id: ProductId::new(body.0.product_id),
            quantity_change: body.0.quantity_change,
        };

        match self.use_cases.update_quantity.execute(params).await {
            Ok(()) => UpdateQuantityResponse::Ok(Json(MessageResponse {
                message: "product quantity updated".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateQuantityResponse::NotFound(json),
                    503 => UpdateQuantityResponse::ServiceUnavailable(json),
                    _ => UpdateQuantityResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete every product with an exact name
    #[oai(
        path = "/product/deleteProductsByName/:name",
        method = "delete",
        tag = "ApiTags::Products"
    )]
    async fn delete_products_by_name(&self, name: Path<String>) -> DeleteProductResponse {
        match self
            .use_cases
            .delete_by_name
            .execute(DeleteProductsByNameParams { name: name.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => err.into(),
        }
    }

    /// Delete a product by id
    ///
    /// Unknown ids are not an error.
    #[oai(
        path = "/product/deleteProductById/:id",
        method = "delete",
        tag = "ApiTags::Products"
    )]
    async fn delete_product_by_id(&self, id: Path<String>) -> DeleteProductResponse {
        match self
            .use_cases
            .delete_by_id
            .execute(DeleteProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => err.into(),
        }
    }

    /// Get a product by id
    #[oai(path = "/product/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> SingleProductResponse {
        match self
            .use_cases
            .get_by_id
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => SingleProductResponse::Ok(Json(product.into())),
            Err(err) => err.into(),
        }
    }

    /// Partially update a product
    ///
    /// Only `name`, `price` and `description` can be changed.
    #[oai(path = "/product/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> SingleProductResponse {
        let params = UpdateProductParams {
            id: ProductId::new(id.0),
            patch: body.0.into(),
        };

        match self.use_cases.update.execute(params).await {
            Ok(product) => SingleProductResponse::Ok(Json(product.into())),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ProductError> for ListProductsResponse {
    fn from(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => ListProductsResponse::BadRequest(json),
            503 => ListProductsResponse::ServiceUnavailable(json),
            _ => ListProductsResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SingleProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ProductError> for SingleProductResponse {
    fn from(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => SingleProductResponse::BadRequest(json),
            404 => SingleProductResponse::NotFound(json),
            503 => SingleProductResponse::ServiceUnavailable(json),
            _ => SingleProductResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CountProductsResponse {
    #[oai(status = 200)]
    Ok(Json<u64>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ProductError> for DeleteProductResponse {
    fn from(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            503 => DeleteProductResponse::ServiceUnavailable(json),
            _ => DeleteProductResponse::InternalError(json),
        }
    }
}
