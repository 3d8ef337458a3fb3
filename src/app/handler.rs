//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes presentation
//! commands and fetch completions, translating them into state changes and
//! action sequences. It is the primary control-flow coordinator for the
//! product list screen.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation layer or from a finished fetch
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `ListState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Activate` (initial mount), `Refresh` (user retry)
//! - **Input**: `SearchChanged` with the full query text on every keystroke
//! - **Selection**: `ProductSelected` with the chosen product id
//! - **Fetch**: `FetchResponse` wrapping the outcome of an issued fetch

use crate::app::actions::FetchResponse;
use crate::app::{Action, ListState};
use crate::domain::error::Result;

/// Events triggered by the presentation layer or by fetch completion.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The screen mounted; start the initial fetch.
    Activate,

    /// The user asked for a reload (retry from an error, pull to refresh).
    ///
    /// Identical to `Activate`; both exist because the presentation layer
    /// wires them from different affordances.
    Refresh,

    /// The search input changed; carries the full query text.
    ///
    /// Sent on every keystroke with no debounce. An empty string means the
    /// search was cleared.
    SearchChanged(String),

    /// A grid cell was selected.
    ProductSelected {
        /// Identifier of the selected product.
        product_id: i64,
    },

    /// A previously issued fetch completed.
    ///
    /// Wraps the typed outcome; stale generations are discarded inside the
    /// state container, not here.
    FetchResponse(FetchResponse),
}

/// Processes an event, mutates the list state, and returns actions to
/// execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. The returned bool is a render hint: `true` when the view
/// state changed in a way the presentation layer should redraw.
///
/// # Errors
///
/// Reserved for state mutation failures; the current transitions are
/// infallible.
pub fn handle_event(state: &mut ListState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_tag(event)).entered();

    match event {
        Event::Activate | Event::Refresh => {
            let generation = state.begin_fetch();
            Ok((true, vec![Action::StartFetch { generation }]))
        }
        Event::SearchChanged(query) => {
            tracing::trace!(query = %query, "search query updated");
            state.set_search_query(query);
            Ok((true, vec![]))
        }
        Event::ProductSelected { product_id } => {
            if state.contains_product(*product_id) {
                tracing::debug!(product_id, "product selected");
                Ok((
                    false,
                    vec![Action::Navigate {
                        product_id: *product_id,
                    }],
                ))
            } else {
                tracing::debug!(product_id, "ignoring selection of unknown product");
                Ok((false, vec![]))
            }
        }
        Event::FetchResponse(response) => match response {
            FetchResponse::Fetched {
                generation,
                products,
            } => {
                let applied = state.apply_fetch_success(*generation, products.clone());
                Ok((applied, vec![]))
            }
            FetchResponse::Failed { generation, error } => {
                tracing::warn!(generation, error = %error, "catalog fetch failed");
                let applied = state.apply_fetch_failure(*generation);
                Ok((applied, vec![]))
            }
        },
    }
}

/// Short event name for span fields, without dragging payloads into logs.
const fn event_tag(event: &Event) -> &'static str {
    match event {
        Event::Activate => "activate",
        Event::Refresh => "refresh",
        Event::SearchChanged(_) => "search_changed",
        Event::ProductSelected { .. } => "product_selected",
        Event::FetchResponse(_) => "fetch_response",
    }
}
