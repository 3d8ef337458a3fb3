//! Wire record models for the retrieval layer.
//!
//! This module defines the raw record types decoded from the catalog
//! service's responses. These types are separate from domain models to keep a
//! clear boundary between the wire representation and business logic.

use serde::{Deserialize, Serialize};

use crate::domain::Product;

/// Represents a product record as the catalog service serializes it.
///
/// This is the wire-layer representation of a product. It is deliberately
/// tolerant: some catalog backends name the display text `title` rather than
/// `name`, and the description may be absent entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique identifier within the returned batch.
    pub id: i64,

    /// Display name; `title` is accepted as a wire alias.
    #[serde(alias = "title")]
    pub name: String,

    /// Bare numeric price; formatting is a presentation concern.
    pub price: f64,

    /// Free-text description, empty when the service omits it.
    #[serde(default)]
    pub description: String,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            description: record.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_canonical_records() {
        let payload = r#"[{"id":1,"name":"Chair","price":50.0,"description":"x"}]"#;
        let records: Vec<ProductRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(
            records,
            vec![ProductRecord {
                id: 1,
                name: "Chair".to_string(),
                price: 50.0,
                description: "x".to_string(),
            }]
        );
    }

    #[test]
    fn accepts_title_alias_and_missing_description() {
        let payload = r#"[{"id":2,"title":"Table","price":120.5}]"#;
        let records: Vec<ProductRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(records[0].name, "Table");
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn converts_into_domain_products() {
        let record = ProductRecord {
            id: 3,
            name: "Lamp".to_string(),
            price: 15.0,
            description: "warm".to_string(),
        };
        let product = Product::from(record);
        assert_eq!(product, Product::new(3, "Lamp", 15.0, "warm"));
    }

    #[test]
    fn rejects_non_catalog_payloads() {
        let result = serde_json::from_str::<Vec<ProductRecord>>(r#"{"not":"a list"}"#);
        assert!(result.is_err());
    }
}
