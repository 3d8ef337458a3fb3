//! Catalist: a client-side view-state controller for a searchable product
//! catalog.
//!
//! Catalist fetches a product catalog from a remote service, tracks the
//! loading / error / empty / populated lifecycle of that fetch, and applies a
//! local case-insensitive text filter to the last successfully fetched data
//! set. It provides:
//! - A single-writer view-state machine with an explicit `Loading` → (`Error`
//!   | `Empty` | `Loaded`) lifecycle and user-driven retry
//! - Generation-counted fetch arbitration, so overlapping refreshes can never
//!   be clobbered by a stale, late-resolving fetch
//! - Search filtering that derives a visible subset without ever mutating the
//!   authoritative set, keeping "no matches" distinct from "no products"
//! - A renderable view model for the presentation layer, with formatted
//!   prices, skeleton/error/empty surfaces, and catalog freshness
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation Layer (external, or main.rs demo)     │  ← Rendering, input
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - ProductListController facade                     │  ← Fetch lifecycle
//! │  - Event handling and actions                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                           │
//! │  - CatalogSource trait (retrieval contract)         │
//! │  - HTTP implementation                              │
//! │  - In-memory implementation                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & UI Layers                                 │
//! │  - Product record, error taxonomy (domain/)         │
//! │  - View model types (ui/)                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller, state machine, events, and actions
//! - [`catalog`]: Retrieval collaborator contract and implementations
//! - [`domain`]: Core domain types (Product, errors)
//! - [`ui`]: View model types for the presentation layer
//! - [`observability`]: tracing subscriber setup
//!
//! # Lifecycle
//!
//! 1. **Construction**: build a [`Config`], call [`initialize`] (or wire a
//!    [`ProductListController`] over your own [`catalog::CatalogSource`])
//! 2. **Mount**: call `activate()`; the state is `Loading` until the fetch
//!    resolves
//! 3. **Render**: read `snapshot()` / `view_model()` after every command
//! 4. **Input**: forward search-box changes to `search(query)` and cell
//!    selections to `product_selected(id)`
//! 5. **Retry**: wire the error panel's affordance to `refresh()`
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use catalist::catalog::InMemoryCatalog;
//! use catalist::{ProductListController, ViewState};
//!
//! # fn main() -> catalist::Result<()> {
//! # let runtime = tokio::runtime::Runtime::new().expect("runtime");
//! # runtime.block_on(async {
//! let source = Arc::new(InMemoryCatalog::sample());
//! let controller = ProductListController::new(source);
//!
//! controller.activate().await?;
//! assert!(matches!(controller.snapshot(), ViewState::Loaded { .. }));
//!
//! controller.search("chair")?;
//! let grid = controller.view_model();
//! assert!(grid.cards.iter().all(|card| card.name.to_lowercase().contains("chair")));
//! # Ok(())
//! # })
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Authoritative vs. derived data
//!
//! The full product list from the last successful fetch is never mutated by
//! filtering; searches only derive the visible subset. Clearing the search
//! recovers the full set without a network round-trip, and an exhausted
//! filter renders as "no matches" rather than masquerading as an empty
//! catalog.
//!
//! ## Generation-counted fetches
//!
//! Every fetch is issued under a monotonically increasing generation; a
//! completion applies only while its generation is still the newest. Two
//! rapid refreshes therefore always settle on the newer fetch's result, even
//! when the older one resolves last.
//!
//! ## Stable error surface
//!
//! Raw retrieval failures (transport, status, decode) are logged with full
//! detail but collapse into one stable, user-presentable message paired with
//! a retry affordance. The presentation layer never sees transport detail.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, Event, FetchResponse, ListState, Navigator, ProductListController,
    ViewState, FETCH_ERROR_MESSAGE,
};
pub use catalog::{CatalogSource, HttpCatalog, InMemoryCatalog};
pub use domain::{CatalistError, Product, Result, RetrievalError};
pub use ui::CatalogViewModel;

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

/// Default request timeout in seconds for the HTTP catalog.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Crate configuration.
///
/// Loadable from a TOML file; every field has a default so a missing or
/// partial file still yields a working configuration.
///
/// # Example
///
/// ```toml
/// # catalist.toml
/// endpoint = "https://shop.example.com/api"
/// request_timeout_secs = 5
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the catalog service.
    ///
    /// When unset, [`initialize`] falls back to the in-memory sample catalog,
    /// which keeps the demo shim usable offline.
    pub endpoint: Option<String>,

    /// Per-request timeout for the HTTP catalog, in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Tracing level when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if it does not parse as valid TOML for this structure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&raw)
    }

    /// Parses configuration from a TOML string.
    fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw)
            .map_err(|e| CatalistError::Config(format!("invalid configuration: {e}")))
    }

    /// Returns the HTTP request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Builds a controller from configuration.
///
/// Selects the catalog source: an [`HttpCatalog`] when an endpoint is
/// configured, otherwise the in-memory sample catalog.
///
/// # Errors
///
/// Returns a configuration error when the endpoint URL is invalid or the
/// HTTP client cannot be built.
///
/// # Examples
///
/// ```
/// use catalist::{initialize, Config};
///
/// let controller = initialize(&Config::default())?;
/// # Ok::<(), catalist::CatalistError>(())
/// ```
pub fn initialize(config: &Config) -> Result<ProductListController> {
    let source: Arc<dyn CatalogSource> = match &config.endpoint {
        Some(endpoint) => {
            tracing::debug!(endpoint = %endpoint, "using HTTP catalog");
            Arc::new(HttpCatalog::new(endpoint, config.request_timeout())?)
        }
        None => {
            tracing::debug!("no endpoint configured, using in-memory sample catalog");
            Arc::new(InMemoryCatalog::sample())
        }
    };

    Ok(ProductListController::new(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_endpoint_and_sane_timeout() {
        let config = Config::default();
        assert!(config.endpoint.is_none());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn parses_full_configuration() {
        let config = Config::parse(
            r#"
            endpoint = "https://shop.example.com/api"
            request_timeout_secs = 5
            trace_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://shop.example.com/api")
        );
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn partial_configuration_falls_back_to_defaults() {
        let config = Config::parse("endpoint = \"http://localhost:8080\"").unwrap();
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn rejects_unknown_fields_and_invalid_toml() {
        assert!(Config::parse("endpoiint = \"typo\"").is_err());
        assert!(Config::parse("not toml at all [").is_err());
    }

    #[test]
    fn initialize_rejects_invalid_endpoints() {
        let config = Config {
            endpoint: Some("::not a url::".to_string()),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(CatalistError::Config(_))));
    }

    #[test]
    fn initialize_without_endpoint_uses_sample_catalog() {
        let controller = initialize(&Config::default()).unwrap();
        assert_eq!(controller.snapshot().tag(), "loading");
    }
}
