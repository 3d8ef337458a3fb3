//! Product domain model.
//!
//! This module defines the core `Product` type representing one item of the
//! remote catalog. Products are immutable once fetched: filtering and display
//! derive from them but never mutate them.

use serde::{Deserialize, Serialize};

/// Represents one item of the product catalog.
///
/// A product is an immutable record returned by the retrieval collaborator.
/// The `id` is unique within a fetched batch and doubles as the list key and
/// the navigation parameter for the detail view. The `name` is the
/// case-insensitive search key; `price` and `description` are display fields
/// whose formatting lives in the view-model layer, not here.
///
/// # Fields
///
/// - `id`: Unique stable identifier within a fetched batch
/// - `name`: Display text, used as the search key
/// - `price`: Numeric value, formatted as currency by the presentation layer
/// - `description`: Free-text display field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl Product {
    /// Creates a new product record.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalist::domain::Product;
    ///
    /// let product = Product::new(7, "Table", 120.0, "Seats six");
    /// assert_eq!(product.name, "Table");
    /// ```
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    /// Returns whether the product name contains `needle` as a
    /// case-insensitive substring.
    ///
    /// An empty needle matches every product, which makes a cleared search
    /// query restore the full catalog without special-casing at call sites.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalist::domain::Product;
    ///
    /// let product = Product::new(1, "Chair", 49.99, "Solid oak");
    /// assert!(product.name_matches("cha"));
    /// assert!(product.name_matches("CHA"));
    /// assert!(product.name_matches(""));
    /// assert!(!product.name_matches("table"));
    /// ```
    #[must_use]
    pub fn name_matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
