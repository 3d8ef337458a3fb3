//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from controller state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like formatted prices and the
//! status line; they contain no business logic.
//!
//! # Architecture
//!
//! View models are created via `ListState::view_model()` and consumed by an
//! external renderer. Exactly one of the mutually exclusive surfaces is
//! populated at a time: skeleton rows, an error panel, an empty state, or
//! product cards.

/// Complete view model for the product grid screen.
///
/// Contains everything a renderer needs for one frame. The four render
/// surfaces are mutually exclusive:
///
/// - `skeleton_rows > 0` while a fetch is in flight
/// - `error` when the fetch failed
/// - `empty_state` when there is nothing to show, either because the catalog
///   is empty or because the search matched nothing (distinct messages)
/// - `cards` otherwise
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewModel {
    /// Header status line (title, counts, freshness).
    pub status: StatusLine,

    /// Product cards to lay out in the grid, in visible order.
    pub cards: Vec<ProductCard>,

    /// Current text of the search input.
    pub search_query: String,

    /// Number of placeholder rows to render while loading; zero otherwise.
    pub skeleton_rows: usize,

    /// Error panel with retry affordance, when the fetch failed.
    pub error: Option<ErrorPanel>,

    /// Empty-state message, when there are no cards to show.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single product card.
///
/// Represents one cell in the grid view. The price arrives pre-formatted;
/// the bare numeric value stays in the domain layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Product identifier, used as the list key and navigation parameter.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Currency-formatted price (e.g. `$49.99`).
    pub price_display: String,

    /// Free-text description.
    pub description: String,
}

/// Header status line.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    /// Title text, including visible/total counts and freshness when loaded.
    pub title: String,
}

/// Error panel display information.
///
/// Shown when the fetch failed; always paired with a retry affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPanel {
    /// Stable, user-presentable failure message.
    pub message: String,

    /// Hint text for the retry affordance.
    pub retry_hint: String,
}

/// Empty-state message display information.
///
/// Shown when no cards are available. The message distinguishes a genuinely
/// empty catalog from a search that matched nothing, so a renderer never has
/// to reverse-engineer which case it is in.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    /// Primary message (e.g. "No products available").
    pub message: String,

    /// Secondary explanatory text (e.g. "Clear the search to see the full
    /// catalog").
    pub subtitle: String,
}
