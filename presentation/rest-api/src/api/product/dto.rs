use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{NewProduct, Product, ProductPatch};
use business::domain::product::value_objects::Dimensions;

#[derive(Debug, Clone, Default, Object)]
pub struct DimensionsDto {
    #[oai(skip_serializing_if_is_none)]
    pub height: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub width: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub length: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub weight: Option<f64>,
}

impl From<Dimensions> for DimensionsDto {
    fn from(d: Dimensions) -> Self {
        Self {
            height: d.height,
            width: d.width,
            length: d.length,
            weight: d.weight,
        }
    }
}

impl From<DimensionsDto> for Dimensions {
    fn from(dto: DimensionsDto) -> Self {
        Self {
            height: dto.height,
            width: dto.width,
            length: dto.length,
            weight: dto.weight,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Availability flag
    pub disponibility: bool,
    /// Units in stock
    pub quantity_warehouse: i64,
    /// Image URLs or base64 blobs
    #[oai(default)]
    pub images: Vec<String>,
    #[oai(default)]
    pub dimensions: DimensionsDto,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(default)]
    pub colors: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub sku: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            disponibility: req.disponibility,
            quantity_warehouse: req.quantity_warehouse,
            images: req.images,
            dimensions: req.dimensions.into(),
            brand: req.brand,
            colors: req.colors,
            sku: req.sku,
        }
    }
}

/// Partial replacement; omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            description: req.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    pub product_id: String,
    /// Signed stock movement
    pub quantity_change: i64,
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub disponibility: bool,
    pub quantity_warehouse: i64,
    pub images: Vec<String>,
    pub dimensions: DimensionsDto,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    pub colors: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub sku: Option<String>,
    pub dt_created: DateTime<Utc>,
    pub dt_updated: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            disponibility: product.disponibility,
            quantity_warehouse: product.quantity_warehouse,
            images: product.images,
            dimensions: product.dimensions.into(),
            brand: product.brand,
            colors: product.colors,
            sku: product.sku,
            dt_created: product.dt_created,
            dt_updated: product.dt_updated,
        }
    }
}
