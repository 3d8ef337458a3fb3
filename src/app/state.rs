//! View-state machine and list-state container.
//!
//! This module defines [`ViewState`], the tagged variant describing what the
//! presentation layer should currently render, and [`ListState`], the state
//! container that owns the fetch lifecycle, the search query, and the view
//! model computation. It is the single source of truth for everything the
//! grid screen displays.
//!
//! # Architecture
//!
//! `ListState` separates the authoritative data (the full product list from
//! the most recent successful fetch) from derived state (the visible subset
//! matching the current search text) to keep the two recoverable from each
//! other: clearing the search always restores the full set without a network
//! round-trip, and a search with no matches stays distinguishable from a
//! genuinely empty catalog.
//!
//! # Fetch arbitration
//!
//! Every fetch is issued under a monotonically increasing generation number.
//! A completion only applies when its generation matches the latest issued
//! one, so a slow stale fetch that resolves after a newer one can never
//! clobber newer data.

use crate::domain::Product;
use crate::ui::viewmodel::{CatalogViewModel, EmptyState, ErrorPanel, ProductCard, StatusLine};

/// Stable, user-presentable message shown for any fetch failure.
///
/// The raw failure detail is logged, never displayed; the presentation layer
/// pairs this message with a retry affordance.
pub const FETCH_ERROR_MESSAGE: &str = "Couldn't load products. Check your connection and try again.";

/// Number of placeholder rows the presentation layer renders while loading.
const SKELETON_ROW_COUNT: usize = 6;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// What the presentation layer should currently render.
///
/// Exactly one variant is active at any time. Created as `Loading` at
/// controller activation; transitions on fetch completion; the `visible` set
/// inside `Loaded` is recomputed whenever the search text changes while the
/// authoritative `all` set is replaced wholesale only by a new successful
/// fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No data; a fetch is in flight.
    Loading,

    /// The fetch failed.
    ///
    /// Holds the stable, user-presentable message, not the raw cause.
    Error {
        /// Message to display next to the retry affordance.
        message: String,
    },

    /// The fetch succeeded and returned zero products.
    ///
    /// Distinct from a `Loaded` state filtered down to zero matches: here no
    /// products ever existed.
    Empty,

    /// The fetch succeeded with a non-empty catalog.
    Loaded {
        /// Authoritative set from the most recent successful fetch, in the
        /// order the retrieval collaborator returned it.
        all: Vec<Product>,

        /// Subset of `all` matching the current search text. Equal to `all`
        /// when no search text is active.
        visible: Vec<Product>,

        /// Unix timestamp of the successful fetch, for freshness display.
        fetched_at: i64,
    },
}

impl ViewState {
    /// Short tag name for structured logging.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error { .. } => "error",
            Self::Empty => "empty",
            Self::Loaded { .. } => "loaded",
        }
    }
}

/// Central state container for the product list screen.
///
/// Holds the current [`ViewState`], the search query, and the fetch
/// generation counter. Mutated by the event handler in response to commands
/// and fetch completions; the presentation layer only ever sees cloned
/// snapshots and computed view models.
///
/// The search query lives outside the `ViewState` tag so that query updates
/// arriving while the state is `Loading`, `Error`, or `Empty` never disturb
/// the tag; the text still applies once a fetch succeeds.
#[derive(Debug, Clone)]
pub struct ListState {
    /// Current view state.
    pub view: ViewState,

    /// Current search query, applied to product names case-insensitively.
    pub search_query: String,

    /// Generation of the most recently issued fetch. Completions carrying an
    /// older generation are discarded.
    generation: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    /// Creates the state container in its initial `Loading` state.
    ///
    /// The controller activates immediately on screen mount, so the state is
    /// born loading rather than in some idle limbo the presentation layer
    /// would have to special-case.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalist::app::{ListState, ViewState};
    ///
    /// let state = ListState::new();
    /// assert_eq!(state.view, ViewState::Loading);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: ViewState::Loading,
            search_query: String::new(),
            generation: 0,
        }
    }

    /// Starts a new fetch: transitions to `Loading` and returns the
    /// generation the fetch is issued under.
    ///
    /// Clears any prior error or data. Idempotent from every state, which is
    /// what makes the retry affordance and pull-to-refresh share one code
    /// path. Overlapping calls each get their own generation; only the
    /// newest one may apply its result.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            previous_state = self.view.tag(),
            "starting catalog fetch"
        );
        self.view = ViewState::Loading;
        self.generation
    }

    /// Applies a successful fetch result, returning whether it was applied.
    ///
    /// A result from a stale generation is discarded: the state keeps
    /// whatever the newest fetch produced. An empty product list transitions
    /// to `Empty`; a non-empty one to `Loaded` with the visible set derived
    /// from the current search query (the identity when no query is active).
    pub fn apply_fetch_success(&mut self, generation: u64, products: Vec<Product>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        tracing::debug!(
            generation,
            product_count = products.len(),
            "catalog fetch succeeded"
        );

        if products.is_empty() {
            self.view = ViewState::Empty;
        } else {
            self.view = ViewState::Loaded {
                visible: filter_by_name(&products, &self.search_query),
                all: products,
                fetched_at: chrono::Utc::now().timestamp(),
            };
        }
        true
    }

    /// Applies a failed fetch, returning whether it was applied.
    ///
    /// Stale failures are discarded exactly like stale successes. The view
    /// state receives the stable [`FETCH_ERROR_MESSAGE`]; callers log the raw
    /// cause before getting here.
    pub fn apply_fetch_failure(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "discarding stale fetch failure"
            );
            return false;
        }

        self.view = ViewState::Error {
            message: FETCH_ERROR_MESSAGE.to_string(),
        };
        true
    }

    /// Updates the search query and re-derives the visible set.
    ///
    /// Pure and synchronous; performs no I/O and never re-fetches. Outside
    /// the `Loaded` state this only records the query text: the state tag is
    /// untouched, and the text applies once a fetch succeeds.
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.apply_search_filter();
    }

    /// Recomputes the visible set from the authoritative set and the current
    /// search query.
    ///
    /// Matching is by case-insensitive substring on the product name; an
    /// empty query yields the full authoritative set. The authoritative set
    /// is never mutated, so filtering down to zero matches remains
    /// distinguishable from an empty catalog and a cleared query always
    /// recovers the full list.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            query_len = self.search_query.len(),
            state = self.view.tag()
        )
        .entered();

        let ViewState::Loaded { all, visible, .. } = &mut self.view else {
            tracing::debug!("no loaded catalog, filter is a no-op");
            return;
        };

        *visible = filter_by_name(all, &self.search_query);

        tracing::debug!(
            total = all.len(),
            visible_count = visible.len(),
            "search filter applied"
        );
    }

    /// Returns the visible products, empty outside the `Loaded` state.
    #[must_use]
    pub fn visible_products(&self) -> &[Product] {
        match &self.view {
            ViewState::Loaded { visible, .. } => visible,
            _ => &[],
        }
    }

    /// Returns whether the authoritative set contains a product with `id`.
    ///
    /// Used to drop navigation requests for products that vanished with the
    /// last refresh.
    #[must_use]
    pub fn contains_product(&self, id: i64) -> bool {
        match &self.view {
            ViewState::Loaded { all, .. } => all.iter().any(|product| product.id == id),
            _ => false,
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Transforms state into a structured representation the presentation
    /// layer can draw directly: skeleton rows while loading, an error panel
    /// with a retry hint, product cards with display-formatted prices, and
    /// the two distinct empty states ("no products available" when the
    /// catalog itself is empty, "no matches" when filtering emptied a
    /// non-empty catalog).
    #[must_use]
    pub fn view_model(&self) -> CatalogViewModel {
        match &self.view {
            ViewState::Loading => CatalogViewModel {
                status: StatusLine {
                    title: "Products".to_string(),
                },
                cards: vec![],
                search_query: self.search_query.clone(),
                skeleton_rows: SKELETON_ROW_COUNT,
                error: None,
                empty_state: None,
            },
            ViewState::Error { message } => CatalogViewModel {
                status: StatusLine {
                    title: "Products".to_string(),
                },
                cards: vec![],
                search_query: self.search_query.clone(),
                skeleton_rows: 0,
                error: Some(ErrorPanel {
                    message: message.clone(),
                    retry_hint: "Tap retry to reload the catalog".to_string(),
                }),
                empty_state: None,
            },
            ViewState::Empty => CatalogViewModel {
                status: StatusLine {
                    title: "Products (0)".to_string(),
                },
                cards: vec![],
                search_query: self.search_query.clone(),
                skeleton_rows: 0,
                error: None,
                empty_state: Some(EmptyState {
                    message: "No products available".to_string(),
                    subtitle: "The catalog is empty right now, check back later".to_string(),
                }),
            },
            ViewState::Loaded {
                all,
                visible,
                fetched_at,
            } => {
                let empty_state = if visible.is_empty() {
                    Some(EmptyState {
                        message: format!("No matches for '{}'", self.search_query),
                        subtitle: "Clear the search to see the full catalog".to_string(),
                    })
                } else {
                    None
                };

                CatalogViewModel {
                    status: StatusLine {
                        title: format!(
                            "Products ({}/{}) · updated {}",
                            visible.len(),
                            all.len(),
                            freshness_phrase(*fetched_at)
                        ),
                    },
                    cards: visible.iter().map(product_card).collect(),
                    search_query: self.search_query.clone(),
                    skeleton_rows: 0,
                    error: None,
                    empty_state,
                }
            }
        }
    }
}

/// Derives the subsequence of `products` whose names match `query`.
fn filter_by_name(products: &[Product], query: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.name_matches(query))
        .cloned()
        .collect()
}

/// Builds a display card for a single product.
///
/// Price formatting lives here, on the presentation side of the boundary;
/// the domain record carries the bare numeric value.
fn product_card(product: &Product) -> ProductCard {
    ProductCard {
        id: product.id,
        name: product.name.clone(),
        price_display: format!("${:.2}", product.price),
        description: product.description.clone(),
    }
}

/// Returns a human-readable phrase describing how long ago the catalog was
/// fetched.
///
/// Less than a minute reads "just now", then "Xm ago", "Xh ago", "Xd ago".
fn freshness_phrase(fetched_at: i64) -> String {
    let diff = chrono::Utc::now().timestamp() - fetched_at;

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}
