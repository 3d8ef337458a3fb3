//! Fixed in-memory catalog implementation.
//!
//! Serves a product set held in memory, with no transport involved. Used by
//! the demo shim when no endpoint is configured, and as a convenient base for
//! fixtures.

use async_trait::async_trait;

use crate::catalog::source::CatalogSource;
use crate::domain::error::RetrievalError;
use crate::domain::Product;

/// Catalog source backed by a fixed in-memory product set.
///
/// `fetch_all` always succeeds and returns a clone of the held set in
/// insertion order. An empty set is valid and exercises the empty-catalog
/// state end to end.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Creates a catalog serving the given products.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates a small furniture catalog for demos.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new(1, "Oak Chair", 49.99, "Solid oak dining chair"),
            Product::new(2, "Walnut Table", 349.0, "Six-seat walnut dining table"),
            Product::new(3, "Reading Lamp", 24.5, "Adjustable warm-light lamp"),
            Product::new(4, "Corner Bookshelf", 119.95, "Five shelves, fits a corner"),
            Product::new(5, "Desk Chair", 89.0, "Ergonomic chair with lumbar support"),
        ])
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, RetrievalError> {
        Ok(self.products.clone())
    }
}
