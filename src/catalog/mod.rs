//! Catalog retrieval layer.
//!
//! This module provides the retrieval abstraction the controller fetches
//! product data through. The controller depends only on the [`CatalogSource`]
//! contract; whether products come over HTTP or from a fixed in-memory set is
//! irrelevant to its correctness.
//!
//! # Modules
//!
//! - `source`: Retrieval trait abstraction for catalog implementations
//! - `http`: HTTP-based catalog implementation
//! - `memory`: Fixed in-memory catalog for fixtures and the demo shim
//! - `models`: Wire record types separate from domain models

pub mod http;
pub mod memory;
pub mod models;
pub mod source;

pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;
pub use models::ProductRecord;
pub use source::CatalogSource;
