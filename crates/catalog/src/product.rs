//! Catalog product record (external, read-only).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use zentro_core::{Entity, ProductId};

/// A product as supplied by the catalog service.
///
/// The serde shape mirrors the catalog API payload (`_id`, camelCase), so a
/// fetched JSON document deserializes directly. Prices are in the smallest
/// currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub active: bool,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub brand: String,
    pub color: String,
    /// Primary image reference (URL or asset key).
    pub images: String,
    pub rating: f64,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_api_shape() {
        let raw = r#"{
            "_id": "665f1c2ab1e4d20012a7d3c9",
            "active": true,
            "name": "Canvas Sneakers",
            "description": "Low-top canvas sneakers",
            "price": 4999,
            "category": "shoes",
            "brand": "Zentro",
            "color": "white",
            "images": "https://cdn.example.com/sneakers.jpg",
            "rating": 4.5,
            "stock": 12,
            "createdAt": "2025-06-01T12:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id.as_str(), "665f1c2ab1e4d20012a7d3c9");
        assert_eq!(product.price, 4999);
        assert_eq!(product.created_at.to_rfc3339(), "2025-06-01T12:00:00+00:00");
    }
}
