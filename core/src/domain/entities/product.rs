//! Product catalog entities.
//!
//! Plain data structs: persistence mechanics live behind the
//! `ProductRepository` trait, not on the entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product row in the catalog
///
/// No timestamps are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Auto-incrementing primary key, assigned by the repository
    pub product_id: i32,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product image URL
    pub img_url: String,

    /// Product price
    pub price: Decimal,

    /// URL slug
    pub slug: String,
}

/// Fields for creating a product; `product_id` is assigned by the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub img_url: String,
    pub price: Decimal,
    pub slug: String,
}

/// Partial update for a product
///
/// `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub img_url: Option<String>,
    pub price: Option<Decimal>,
    pub slug: Option<String>,
}

impl ProductPatch {
    /// Overlay the patch onto an existing product
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(img_url) = &self.img_url {
            product.img_url = img_url.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(slug) = &self.slug {
            product.slug = slug.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            product_id: 1,
            name: "iPhone 15".to_string(),
            description: "Latest model".to_string(),
            img_url: "https://img.example.com/iphone15.png".to_string(),
            price: Decimal::new(99900, 2),
            slug: "iphone-15".to_string(),
        }
    }

    #[test]
    fn test_patch_overlays_only_present_fields() {
        let mut product = sample();
        let patch = ProductPatch {
            price: Some(Decimal::new(89900, 2)),
            slug: Some("iphone-15-sale".to_string()),
            ..Default::default()
        };

        patch.apply(&mut product);

        assert_eq!(product.price, Decimal::new(89900, 2));
        assert_eq!(product.slug, "iphone-15-sale");
        assert_eq!(product.name, "iPhone 15");
        assert_eq!(product.description, "Latest model");
    }

    #[test]
    fn test_empty_patch_is_a_noop() {
        let mut product = sample();
        ProductPatch::default().apply(&mut product);
        assert_eq!(product, sample());
    }
}
