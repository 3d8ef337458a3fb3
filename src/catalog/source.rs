//! Catalog retrieval abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over the
//! remote product-retrieval service. This is the seam the controller depends
//! on: transport is invisible to it, and tests substitute scripted doubles.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: the screen needs the whole catalog in
//! one shot, so the contract is a single `fetch_all`. Pagination and
//! server-side search are explicitly out of scope for this controller.

use async_trait::async_trait;

use crate::domain::error::RetrievalError;
use crate::domain::Product;

/// Abstraction over the remote product-retrieval service.
///
/// Implementations must be shareable across tasks; the controller keeps one
/// behind an `Arc` and may have several fetches in flight during overlapping
/// refreshes.
///
/// # Implementations
///
/// - [`HttpCatalog`](crate::catalog::HttpCatalog): fetches over HTTP (default)
/// - [`InMemoryCatalog`](crate::catalog::InMemoryCatalog): fixed set, for
///   fixtures and the demo shim
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieves the full product catalog.
    ///
    /// Products are returned in whatever order the service produced them;
    /// the controller imposes none of its own. An empty vector is a valid,
    /// successful result and renders as the empty-catalog state.
    ///
    /// # Errors
    ///
    /// Returns a [`RetrievalError`] when the transport fails, the service
    /// answers with a non-success status, or the payload does not decode.
    async fn fetch_all(&self) -> Result<Vec<Product>, RetrievalError>;
}
