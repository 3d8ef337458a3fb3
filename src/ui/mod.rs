//! Presentation-facing view-model layer.
//!
//! This module holds the immutable, display-ready types computed from the
//! controller state. Actual rendering (styling, layout, widgets) lives with
//! the consuming presentation layer; this crate only guarantees the view
//! model carries everything a renderer needs, including the distinction
//! between "the catalog is empty" and "the search matched nothing".
//!
//! # Architecture
//!
//! ```text
//! ListState → view_model → CatalogViewModel → (external renderer)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state

pub mod viewmodel;

pub use viewmodel::{CatalogViewModel, EmptyState, ErrorPanel, ProductCard, StatusLine};
