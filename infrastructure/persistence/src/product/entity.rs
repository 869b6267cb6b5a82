use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Dimensions, ProductId};

/// Column list shared by every query that materializes a [`ProductEntity`].
pub const PRODUCT_COLUMNS: &str = "id, name, description, price, category, disponibility, \
    quantity_warehouse, images, dimensions, brand, colors, sku, dt_created, dt_updated";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub disponibility: bool,
    pub quantity_warehouse: i64,
    pub images: Vec<String>,
    pub dimensions: Json<Dimensions>,
    pub brand: Option<String>,
    pub colors: Vec<String>,
    pub sku: Option<String>,
    pub dt_created: DateTime<Utc>,
    pub dt_updated: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            disponibility: self.disponibility,
            quantity_warehouse: self.quantity_warehouse,
            images: self.images,
            dimensions: self.dimensions.0,
            brand: self.brand,
            colors: self.colors,
            sku: self.sku,
            dt_created: self.dt_created,
            dt_updated: self.dt_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_entity_into_domain() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: "3f1c".to_string(),
            name: "Fish Food".to_string(),
            description: Some("Flakes".to_string()),
            price: 4.5,
            category: Some("fish".to_string()),
            disponibility: true,
            quantity_warehouse: 12,
            images: vec!["https://cdn.velure.dev/f.png".to_string()],
            dimensions: Json(Dimensions {
                weight: Some(0.2),
                ..Dimensions::default()
            }),
            brand: None,
            colors: vec!["red".to_string()],
            sku: Some("FF-1".to_string()),
            dt_created: now,
            dt_updated: now,
        };

        let product = entity.into_domain();

        assert_eq!(product.id.as_str(), "3f1c");
        assert_eq!(product.dimensions.weight, Some(0.2));
        assert_eq!(product.dimensions.height, None);
        assert_eq!(product.colors, vec!["red".to_string()]);
        assert_eq!(product.dt_created, now);
    }
}
