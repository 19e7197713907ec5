//! The catalog's single record type.
//!
//! # Store
//! [`Product`] implements [`ActorEntity`](actor_store::ActorEntity) (see
//! [`crate::product_actor::entity`]), so it is owned by a
//! [`ResourceActor`](actor_store::ResourceActor). The same [`ProductFields`] payload is used
//! to create a record and to replace every field of an existing one.
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe identifier for Products. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image_url: String,
}

impl Product {
    /// Builds a record from its store-assigned ID and its business fields.
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            stock: fields.stock,
            image_url: fields.image_url,
        }
    }

    /// Replaces every business field. The ID is kept.
    pub fn replace(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.stock = fields.stock;
        self.image_url = fields.image_url;
    }
}

/// The five business fields of a product, all required.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image_url: String,
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: u32,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_camel_case_keys() {
        let product = Product::new(
            ProductId(7),
            ProductFields::new("Lemon Cake", "Zesty", 18.99, 25, "https://example.com/lemon.jpg"),
        );
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["imageUrl"], "https://example.com/lemon.jpg");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_product_id_parses_path_segments() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId(42));
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut product = Product::new(
            ProductId(3),
            ProductFields::new("Old", "Old", 1.0, 1, "old.jpg"),
        );
        product.replace(ProductFields::new("New", "New", 2.5, 9, "new.jpg"));
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.name, "New");
        assert_eq!(product.stock, 9);
    }
}
