//! Async controller facade over the list-state machine.
//!
//! This module defines [`ProductListController`], the component the
//! presentation layer talks to. It owns the [`ListState`] behind a lock,
//! dispatches commands through the event handler, and executes the resulting
//! actions: running catalog fetches against the retrieval collaborator and
//! forwarding selections to the navigation collaborator.
//!
//! # Concurrency
//!
//! All state transitions are serialized through a single lock-guarded state
//! cell; the lock is never held across an `.await`. `refresh` takes `&self`,
//! so a controller behind an `Arc` can have several fetches in flight at
//! once; the generation counter inside the state guarantees only the newest
//! issued fetch may apply its result, regardless of resolution order.

use std::sync::{Arc, PoisonError, RwLock};

use crate::app::actions::FetchResponse;
use crate::app::handler::{handle_event, Event};
use crate::app::state::ListState;
use crate::app::{Action, ViewState};
use crate::catalog::CatalogSource;
use crate::domain::error::Result;
use crate::ui::viewmodel::CatalogViewModel;

/// Navigation collaborator invoked when a grid cell is selected.
///
/// Fire-and-forget: the controller neither awaits nor observes the outcome
/// of opening a detail view.
pub trait Navigator: Send + Sync {
    /// Opens the detail view for the given product.
    fn open_detail(&self, product_id: i64);
}

/// Mediates between the remote catalog and the presentation layer.
///
/// Owns the fetch lifecycle, the view state, and the search-filter
/// transformation. The presentation layer reads [`snapshot`] /
/// [`view_model`] to decide what to render and drives the controller with
/// [`activate`], [`refresh`], [`search`], and [`product_selected`].
///
/// [`snapshot`]: Self::snapshot
/// [`view_model`]: Self::view_model
/// [`activate`]: Self::activate
/// [`refresh`]: Self::refresh
/// [`search`]: Self::search
/// [`product_selected`]: Self::product_selected
pub struct ProductListController {
    /// Lock-guarded state cell; the single writer path for all transitions.
    state: RwLock<ListState>,

    /// Retrieval collaborator the fetch actions run against.
    source: Arc<dyn CatalogSource>,

    /// Optional navigation collaborator for grid selections.
    navigator: Option<Arc<dyn Navigator>>,
}

impl ProductListController {
    /// Creates a controller over the given retrieval collaborator.
    ///
    /// The state is born `Loading`; call [`activate`](Self::activate) on
    /// screen mount to issue the initial fetch.
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            state: RwLock::new(ListState::new()),
            source,
            navigator: None,
        }
    }

    /// Attaches a navigation collaborator for grid selections.
    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Starts the initial fetch on screen mount.
    ///
    /// Sets the state to `Loading` and calls the retrieval collaborator
    /// exactly once. Resolves when the fetch has completed and its result,
    /// if still the newest, has been applied.
    ///
    /// # Errors
    ///
    /// Propagates event-handler failures; fetch failures are not errors here,
    /// they land in the `Error` view state.
    pub async fn activate(&self) -> Result<()> {
        self.dispatch(Event::Activate).await
    }

    /// Restarts the fetch, from any state.
    ///
    /// Clears a prior error, sets `Loading`, and calls the retrieval
    /// collaborator exactly once. Overlapping calls each issue their own
    /// fetch; stale resolutions are discarded on arrival.
    ///
    /// # Errors
    ///
    /// Propagates event-handler failures; fetch failures are not errors here.
    pub async fn refresh(&self) -> Result<()> {
        self.dispatch(Event::Refresh).await
    }

    /// Applies a new search query to the loaded catalog.
    ///
    /// Pure and synchronous: derives the visible subset of the authoritative
    /// set by case-insensitive substring match on product names, without any
    /// I/O or re-fetch. Outside the `Loaded` state the view is untouched.
    ///
    /// # Errors
    ///
    /// Propagates event-handler failures; the filter itself cannot fail.
    pub fn search(&self, query: &str) -> Result<()> {
        for action in self.apply(&Event::SearchChanged(query.to_string()))? {
            self.execute_sync(action);
        }
        Ok(())
    }

    /// Reports a grid-cell selection.
    ///
    /// Forwards the product id to the navigation collaborator when the
    /// product still exists in the authoritative set; otherwise the
    /// selection is dropped with a log line.
    ///
    /// # Errors
    ///
    /// Propagates event-handler failures.
    pub fn product_selected(&self, product_id: i64) -> Result<()> {
        for action in self.apply(&Event::ProductSelected { product_id })? {
            self.execute_sync(action);
        }
        Ok(())
    }

    /// Returns a read-only snapshot of the current view state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.read_state().view.clone()
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn view_model(&self) -> CatalogViewModel {
        self.read_state().view_model()
    }

    /// Dispatches an event and executes every resulting action, including
    /// asynchronous fetches.
    async fn dispatch(&self, event: Event) -> Result<()> {
        for action in self.apply(&event)? {
            match action {
                Action::StartFetch { generation } => self.run_fetch(generation).await?,
                other => self.execute_sync(other),
            }
        }
        Ok(())
    }

    /// Runs one catalog fetch and feeds the outcome back into the handler.
    async fn run_fetch(&self, generation: u64) -> Result<()> {
        tracing::debug!(generation, "running catalog fetch");

        let response = match self.source.fetch_all().await {
            Ok(products) => FetchResponse::Fetched {
                generation,
                products,
            },
            Err(error) => FetchResponse::Failed {
                generation,
                error: error.to_string(),
            },
        };

        for action in self.apply(&Event::FetchResponse(response))? {
            self.execute_sync(action);
        }
        Ok(())
    }

    /// Feeds one event through the handler under the write lock and returns
    /// the actions it produced.
    fn apply(&self, event: &Event) -> Result<Vec<Action>> {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let (_render, actions) = handle_event(&mut state, event)?;
        Ok(actions)
    }

    /// Executes an action that completes without awaiting.
    fn execute_sync(&self, action: Action) {
        match action {
            Action::Navigate { product_id } => {
                if let Some(navigator) = &self.navigator {
                    navigator.open_detail(product_id);
                } else {
                    tracing::debug!(product_id, "no navigator attached, dropping navigation");
                }
            }
            Action::StartFetch { generation } => {
                // Fetches are only issued by the async dispatch path.
                tracing::debug!(generation, "ignoring fetch action on synchronous path");
            }
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ListState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::app::FETCH_ERROR_MESSAGE;
    use crate::catalog::InMemoryCatalog;
    use crate::domain::error::RetrievalError;
    use crate::domain::Product;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Chair", 50.0, "x"),
            Product::new(2, "Table", 120.0, "y"),
        ]
    }

    /// One scripted fetch: signals entry, waits for release, then yields its
    /// outcome.
    struct ScriptedFetch {
        entered: Arc<Notify>,
        release: Arc<Notify>,
        outcome: Option<Result<Vec<Product>, RetrievalError>>,
    }

    /// Source that replays scripted fetches in call order, letting tests
    /// observe in-flight states and control resolution order.
    struct ScriptedSource {
        scripts: Mutex<Vec<ScriptedFetch>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                scripts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            })
        }

        fn script(
            self: &Arc<Self>,
            outcome: Result<Vec<Product>, RetrievalError>,
        ) -> (Arc<Notify>, Arc<Notify>) {
            let entered = Arc::new(Notify::new());
            let release = Arc::new(Notify::new());
            self.scripts.lock().unwrap().push(ScriptedFetch {
                entered: entered.clone(),
                release: release.clone(),
                outcome: Some(outcome),
            });
            (entered, release)
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        async fn fetch_all(&self) -> Result<Vec<Product>, RetrievalError> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            let (entered, release, outcome) = {
                let mut scripts = self.scripts.lock().unwrap();
                let script = &mut scripts[index];
                (
                    script.entered.clone(),
                    script.release.clone(),
                    script.outcome.take().unwrap(),
                )
            };
            entered.notify_one();
            release.notified().await;
            outcome
        }
    }

    /// Navigator double that records opened product ids.
    #[derive(Default)]
    struct RecordingNavigator {
        opened: Mutex<Vec<i64>>,
    }

    impl Navigator for RecordingNavigator {
        fn open_detail(&self, product_id: i64) {
            self.opened.lock().unwrap().push(product_id);
        }
    }

    fn failure() -> RetrievalError {
        RetrievalError::Status { code: 500 }
    }

    #[tokio::test]
    async fn state_is_loading_while_fetch_is_in_flight() {
        let source = ScriptedSource::new();
        let (entered, release) = source.script(Ok(products()));
        let controller = Arc::new(ProductListController::new(source));

        let task = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.activate().await })
        };

        entered.notified().await;
        assert_eq!(controller.snapshot(), ViewState::Loading);

        release.notify_one();
        task.await.unwrap().unwrap();

        let ViewState::Loaded { all, visible, .. } = controller.snapshot() else {
            panic!("expected loaded state");
        };
        assert_eq!(all, products());
        assert_eq!(visible, products());
    }

    #[tokio::test]
    async fn empty_catalog_resolves_to_empty_state() {
        let controller = ProductListController::new(Arc::new(InMemoryCatalog::new(vec![])));
        controller.activate().await.unwrap();
        assert_eq!(controller.snapshot(), ViewState::Empty);
    }

    #[tokio::test]
    async fn failure_resolves_to_error_and_refresh_recovers() {
        let source = ScriptedSource::new();
        let (_, release_first) = source.script(Err(failure()));
        let (_, release_second) = source.script(Ok(products()));
        release_first.notify_one();
        release_second.notify_one();
        let controller = ProductListController::new(source.clone());

        controller.activate().await.unwrap();
        assert_eq!(
            controller.snapshot(),
            ViewState::Error {
                message: FETCH_ERROR_MESSAGE.to_string()
            }
        );

        controller.refresh().await.unwrap();
        assert_eq!(controller.snapshot().tag(), "loaded");
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn each_call_issues_exactly_one_fetch() {
        let source = ScriptedSource::new();
        let (_, r1) = source.script(Ok(products()));
        let (_, r2) = source.script(Ok(products()));
        r1.notify_one();
        r2.notify_one();

        let controller = ProductListController::new(source.clone());
        controller.activate().await.unwrap();
        controller.refresh().await.unwrap();
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn out_of_order_resolution_is_prevented() {
        let stale = vec![Product::new(9, "Stale Stool", 5.0, "old")];
        let source = ScriptedSource::new();
        let (entered_first, release_first) = source.script(Ok(stale));
        let (entered_second, release_second) = source.script(Ok(products()));
        let controller = Arc::new(ProductListController::new(source));

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.refresh().await })
        };
        entered_first.notified().await;

        let second = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.refresh().await })
        };
        entered_second.notified().await;

        // The newer fetch resolves first and wins.
        release_second.notify_one();
        second.await.unwrap().unwrap();
        assert_eq!(controller.snapshot().tag(), "loaded");

        // The older fetch resolves last; its result must be discarded.
        release_first.notify_one();
        first.await.unwrap().unwrap();

        let ViewState::Loaded { all, .. } = controller.snapshot() else {
            panic!("expected loaded state");
        };
        assert_eq!(all, products());
    }

    #[tokio::test]
    async fn search_derives_visible_set_without_refetching() {
        let source = Arc::new(InMemoryCatalog::new(products()));
        let controller = ProductListController::new(source);
        controller.activate().await.unwrap();

        controller.search("cha").unwrap();
        let ViewState::Loaded { all, visible, .. } = controller.snapshot() else {
            panic!("expected loaded state");
        };
        assert_eq!(visible, &products()[..1]);
        assert_eq!(all, products());

        controller.search("").unwrap();
        assert_eq!(controller.snapshot().tag(), "loaded");
        let ViewState::Loaded { visible, .. } = controller.snapshot() else {
            panic!("expected loaded state");
        };
        assert_eq!(visible, products());
    }

    #[tokio::test]
    async fn search_outside_loaded_is_a_no_op() {
        let source = ScriptedSource::new();
        let (entered, release) = source.script(Ok(products()));
        let controller = Arc::new(ProductListController::new(source));

        let task = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.activate().await })
        };
        entered.notified().await;

        controller.search("anything").unwrap();
        assert_eq!(controller.snapshot(), ViewState::Loading);

        release.notify_one();
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn selection_reaches_the_navigator_only_for_known_products() {
        let navigator = Arc::new(RecordingNavigator::default());
        let controller = ProductListController::new(Arc::new(InMemoryCatalog::new(products())))
            .with_navigator(navigator.clone());
        controller.activate().await.unwrap();

        controller.product_selected(2).unwrap();
        controller.product_selected(99).unwrap();

        assert_eq!(*navigator.opened.lock().unwrap(), vec![2]);
    }
}
