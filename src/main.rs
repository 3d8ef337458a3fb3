//! Demo shim and entry point.
//!
//! This binary is the thin presentation layer the library is designed to sit
//! behind: it wires configuration, tracing, and a catalog source into a
//! `ProductListController`, then renders the resulting view models as plain
//! text. All real behavior lives in the library; nothing here is more than
//! plumbing.
//!
//! # Configuration
//!
//! - `CATALIST_CONFIG`: path to a TOML configuration file (optional)
//! - `CATALIST_ENDPOINT`: catalog base URL, overrides the file (optional)
//!
//! With no endpoint configured the shim runs against the built-in in-memory
//! sample catalog, so it works offline.
//!
//! # Usage
//!
//! ```text
//! catalist [search-query]
//! ```
//!
//! Activates the controller and prints the loaded grid. When a query is
//! given, prints the filtered grid as well.

use catalist::observability::init_tracing;
use catalist::ui::viewmodel::CatalogViewModel;
use catalist::{initialize, Config, Navigator, Result};

use std::sync::Arc;

/// Navigator that narrates detail-view openings to stdout.
///
/// Stands in for a real router; selection in a terminal demo has nowhere to
/// navigate to.
struct PrintedNavigator;

impl Navigator for PrintedNavigator {
    fn open_detail(&self, product_id: i64) {
        println!("-> would open detail view for product {product_id}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = match std::env::var("CATALIST_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::default(),
    };
    if let Ok(endpoint) = std::env::var("CATALIST_ENDPOINT") {
        config.endpoint = Some(endpoint);
    }

    init_tracing(&config);
    tracing::debug!(endpoint = ?config.endpoint, "starting catalist demo shim");

    let controller = initialize(&config)?.with_navigator(Arc::new(PrintedNavigator));

    controller.activate().await?;
    render(&controller.view_model());

    if let Some(query) = std::env::args().nth(1) {
        println!();
        println!("searching for '{query}'...");
        controller.search(&query)?;
        render(&controller.view_model());

        if let Some(card) = controller.view_model().cards.first() {
            controller.product_selected(card.id)?;
        }
    }

    Ok(())
}

/// Renders a view model as plain text.
fn render(vm: &CatalogViewModel) {
    println!("== {} ==", vm.status.title);

    if vm.skeleton_rows > 0 {
        for _ in 0..vm.skeleton_rows {
            println!("  ....................");
        }
        return;
    }

    if let Some(error) = &vm.error {
        println!("  ! {}", error.message);
        println!("    ({})", error.retry_hint);
        return;
    }

    if let Some(empty) = &vm.empty_state {
        println!("  {}", empty.message);
        println!("  {}", empty.subtitle);
        return;
    }

    for card in &vm.cards {
        println!(
            "  [{}] {:<24} {:>10}  {}",
            card.id, card.name, card.price_display, card.description
        );
    }
}
