//! Actions representing side effects to be executed by the controller.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing a command or a fetch completion, and
//! [`FetchResponse`], the message a finished fetch feeds back into the
//! handler. Actions bridge pure state transformations and effectful
//! operations like calling the retrieval collaborator or the navigation
//! collaborator.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! controller executes them in sequence. The fetch path is a round trip:
//! `Action::StartFetch` leaves the handler, the controller runs the fetch,
//! and the outcome re-enters the handler as an
//! [`Event::FetchResponse`](crate::app::Event::FetchResponse).

use crate::domain::Product;

/// Commands representing side effects to be executed by the controller.
///
/// Actions are produced by the event handler and executed by the controller.
/// They are the boundary between pure state transitions and effectful
/// operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Runs one catalog fetch against the retrieval collaborator.
    ///
    /// Carries the generation the fetch was issued under; the eventual
    /// [`FetchResponse`] echoes it back so stale resolutions can be
    /// discarded.
    StartFetch {
        /// Generation returned by `ListState::begin_fetch`.
        generation: u64,
    },

    /// Asks the navigation collaborator to open the product detail view.
    ///
    /// Fire-and-forget; emitted when a grid cell is selected and the product
    /// still exists in the authoritative set.
    Navigate {
        /// Identifier of the selected product.
        product_id: i64,
    },
}

/// Outcome of one catalog fetch, fed back into the event handler.
///
/// Either variant carries the generation of the fetch that produced it.
/// Failures are stringified at this boundary: the raw detail is only ever
/// logged, while the view state receives a stable message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// The catalog was retrieved successfully.
    Fetched {
        /// Generation the fetch was issued under.
        generation: u64,

        /// The retrieved products, in collaborator order. May be empty.
        products: Vec<Product>,
    },

    /// The fetch failed.
    Failed {
        /// Generation the fetch was issued under.
        generation: u64,

        /// Raw failure detail, for logging only.
        error: String,
    },
}
