//! Error types for the catalist controller.
//!
//! This module defines the fetch-boundary error taxonomy [`RetrievalError`],
//! the centralized crate error type [`CatalistError`], and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! Raw retrieval failures never reach the presentation layer: the controller
//! converts them into a stable, user-presentable message at the fetch
//! boundary and logs the detail instead.

use thiserror::Error;

/// Failures raised by the retrieval collaborator.
///
/// Covers the three ways a catalog fetch can go wrong: the transport failed,
/// the service answered with a non-success status, or the payload did not
/// decode into product records. The controller catches this at the fetch
/// boundary and collapses it into the `Error` view state; the variant detail
/// exists for logging, not for display.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The HTTP request failed before a response body was available.
    ///
    /// Connection refused, DNS failure, timeout. Automatically converts from
    /// `reqwest::Error` using the `#[from]` attribute.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The service responded with a non-success status code.
    #[error("unexpected response status: {code}")]
    Status {
        /// The HTTP status code returned by the service.
        code: u16,
    },

    /// The response body could not be decoded into product records.
    ///
    /// Automatically converts from `serde_json::Error` using `#[from]`.
    #[error("malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The main error type for catalist operations.
///
/// This enum consolidates error conditions that can occur outside the fetch
/// boundary, from configuration parsing to I/O failures. Fetch failures are
/// not propagated through this type; they are absorbed into the `Error` view
/// state by the controller.
#[derive(Debug, Error)]
pub enum CatalistError {
    /// A catalog fetch failed.
    ///
    /// Only surfaces from direct [`crate::catalog::CatalogSource`] calls made
    /// outside the controller, which recovers this error into view state.
    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, such as reading a
    /// configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed,
    /// such as an endpoint URL that does not parse. The string describes the
    /// specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalist operations.
///
/// Defaults the error to [`CatalistError`] to simplify function signatures
/// throughout the codebase; the fetch boundary overrides it with
/// [`RetrievalError`].
pub type Result<T, E = CatalistError> = std::result::Result<T, E>;
