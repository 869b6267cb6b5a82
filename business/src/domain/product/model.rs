use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::{Dimensions, ProductId};

/// A catalog product as stored by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub disponibility: bool,
    pub quantity_warehouse: i64,
    pub images: Vec<String>,
    pub dimensions: Dimensions,
    pub brand: Option<String>,
    pub colors: Vec<String>,
    pub sku: Option<String>,
    pub dt_created: DateTime<Utc>,
    pub dt_updated: DateTime<Utc>,
}

/// Product fields supplied by a client on creation.
///
/// The identifier and timestamps are assigned by the persistence adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub disponibility: bool,
    pub quantity_warehouse: i64,
    pub images: Vec<String>,
    pub dimensions: Dimensions,
    pub brand: Option<String>,
    pub colors: Vec<String>,
    pub sku: Option<String>,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if !self.price.is_finite() {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }
}

/// Partial replacement of a stored product. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ProductError::NameEmpty);
        }
        if self.price.is_some_and(|price| !price.is_finite()) {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.description.is_none()
    }
}

impl Product {
    /// Builds the stored record for a freshly created product.
    pub fn from_new(id: ProductId, input: NewProduct, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            disponibility: input.disponibility,
            quantity_warehouse: input.quantity_warehouse,
            images: input.images,
            dimensions: input.dimensions,
            brand: input.brand,
            colors: input.colors,
            sku: input.sku,
            dt_created: created_at,
            dt_updated: created_at,
        }
    }

    /// Applies a partial replacement. `dt_updated` is left as stored.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price,
            category: Some("toys".to_string()),
            disponibility: true,
            quantity_warehouse: 4,
            images: vec![],
            dimensions: Dimensions::default(),
            brand: None,
            colors: vec!["red".to_string()],
            sku: None,
        }
    }

    #[test]
    fn should_accept_product_when_name_and_price_are_valid() {
        assert!(new_product("Chew Rope", 9.9).validate().is_ok());
    }

    #[test]
    fn should_reject_product_when_name_is_blank() {
        assert!(matches!(
            new_product("   ", 9.9).validate(),
            Err(ProductError::NameEmpty)
        ));
    }

    #[test]
    fn should_reject_product_when_price_is_not_finite() {
        assert!(matches!(
            new_product("Chew Rope", f64::NAN).validate(),
            Err(ProductError::InvalidPrice)
        ));
    }

    #[test]
    fn should_stamp_both_timestamps_on_creation() {
        let now = Utc::now();
        let product = Product::from_new(ProductId::new("p-1"), new_product("Ball", 3.0), now);
        assert_eq!(product.dt_created, now);
        assert_eq!(product.dt_updated, now);
        assert_eq!(product.colors, vec!["red".to_string()]);
    }

    #[test]
    fn should_keep_update_timestamp_when_patch_applied() {
        let created = Utc::now();
        let mut product =
            Product::from_new(ProductId::new("p-1"), new_product("Ball", 3.0), created);

        product.apply(ProductPatch {
            name: None,
            price: Some(4.5),
            description: Some("Bouncy".to_string()),
        });

        assert_eq!(product.name, "Ball");
        assert_eq!(product.price, 4.5);
        assert_eq!(product.description.as_deref(), Some("Bouncy"));
        assert_eq!(product.dt_updated, created);
    }

    #[test]
    fn should_reject_patch_when_name_is_blank() {
        let patch = ProductPatch {
            name: Some(String::new()),
            ..ProductPatch::default()
        };
        assert!(matches!(patch.validate(), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_round_trip_through_cache_payload() {
        let product = Product::from_new(
            ProductId::new("p-9"),
            new_product("Leash", 15.0),
            Utc::now(),
        );
        let payload = serde_json::to_string(&vec![product.clone()]).unwrap();
        let decoded: Vec<Product> = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, vec![product]);
    }
}
