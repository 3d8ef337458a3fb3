//! HTTP-based catalog implementation.
//!
//! This module fetches the product catalog from a remote service over HTTP.
//! The wire format is a JSON array of [`ProductRecord`]s served under the
//! `products` path of the configured endpoint.
//!
//! Error mapping happens entirely at this boundary: transport failures,
//! non-success statuses, and undecodable payloads each land in their own
//! [`RetrievalError`] variant so the log can tell them apart, while the
//! controller collapses all of them into one stable user-facing state.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::catalog::models::ProductRecord;
use crate::catalog::source::CatalogSource;
use crate::domain::error::{CatalistError, Result, RetrievalError};
use crate::domain::Product;

/// HTTP catalog client.
///
/// Thin wrapper over a shared `reqwest::Client` with the products URL
/// precomputed at construction time, so the fetch path itself cannot fail on
/// URL assembly.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    /// Shared HTTP client with the configured request timeout.
    client: reqwest::Client,

    /// Fully resolved URL of the product collection.
    products_url: Url,
}

impl HttpCatalog {
    /// Creates a catalog client for the given service endpoint.
    ///
    /// The endpoint is the service base URL (for example
    /// `https://shop.example.com/api`); the product collection is addressed
    /// under its `products` path.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint does not parse as an
    /// absolute URL or the HTTP client cannot be constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use catalist::catalog::HttpCatalog;
    ///
    /// let catalog = HttpCatalog::new("https://shop.example.com/api", Duration::from_secs(10))?;
    /// # Ok::<(), catalist::CatalistError>(())
    /// ```
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint_url = Url::parse(endpoint)
            .map_err(|e| CatalistError::Config(format!("invalid endpoint URL '{endpoint}': {e}")))?;

        let mut products_url = endpoint_url;
        products_url
            .path_segments_mut()
            .map_err(|()| {
                CatalistError::Config(format!("endpoint URL '{endpoint}' cannot carry a path"))
            })?
            .pop_if_empty()
            .push("products");

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalistError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(url = %products_url, "initialized HTTP catalog");

        Ok(Self {
            client,
            products_url,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_all(&self) -> std::result::Result<Vec<Product>, RetrievalError> {
        let response = self.client.get(self.products_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let records: Vec<ProductRecord> = serde_json::from_str(&body)?;

        tracing::debug!(product_count = records.len(), "catalog retrieved over HTTP");

        Ok(records.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn catalog(endpoint: &str) -> HttpCatalog {
        HttpCatalog::new(endpoint, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn fetches_and_decodes_products() {
        let records = vec![
            ProductRecord {
                id: 1,
                name: "Chair".to_string(),
                price: 50.0,
                description: "x".to_string(),
            },
            ProductRecord {
                id: 2,
                name: "Table".to_string(),
                price: 120.0,
                description: "y".to_string(),
            },
        ];
        let router = Router::new().route("/products", get(move || async move { Json(records) }));
        let endpoint = serve(router).await;

        let products = catalog(&endpoint).fetch_all().await.unwrap();
        assert_eq!(
            products,
            vec![
                Product::new(1, "Chair", 50.0, "x"),
                Product::new(2, "Table", 120.0, "y"),
            ]
        );
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let router = Router::new().route(
            "/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let endpoint = serve(router).await;

        let error = catalog(&endpoint).fetch_all().await.unwrap_err();
        assert!(matches!(error, RetrievalError::Status { code: 500 }));
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_malformed_error() {
        let router = Router::new().route("/products", get(|| async { "not json at all" }));
        let endpoint = serve(router).await;

        let error = catalog(&endpoint).fetch_all().await.unwrap_err();
        assert!(matches!(error, RetrievalError::Malformed(_)));
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_network_error() {
        // Nothing listens on this port; bind-and-drop reserves a dead one.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let error = catalog(&endpoint).fetch_all().await.unwrap_err();
        assert!(matches!(error, RetrievalError::Network(_)));
    }

    #[test]
    fn rejects_unparseable_endpoints() {
        let result = HttpCatalog::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(CatalistError::Config(_))));
    }
}
