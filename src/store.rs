//! Catalog State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity on the catalog page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use storefront_core::{CatalogFilter, CatalogView, ProductCard};

use crate::context::StorefrontContext;

/// Catalog page state
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Loading / error / cards, exactly one at a time
    pub view: CatalogView,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_is_loading(store: &CatalogStore) -> bool {
    store.view().with(CatalogView::is_loading)
}

pub fn store_error(store: &CatalogStore) -> Option<String> {
    store.view().with(|view| view.error().map(str::to_string))
}

/// Whether the product grid should be shown
pub fn store_has_content(store: &CatalogStore) -> bool {
    store.view().with(|view| matches!(view, CatalogView::Content(_)))
}

pub fn store_cards(store: &CatalogStore) -> Vec<ProductCard> {
    store.view().with(|view| view.cards().to_vec())
}

/// Show the spinner, fetch, then show whatever came back.
/// Overlapping loads are not cancelled; the last one to finish wins.
pub fn store_reload(store: CatalogStore, ctx: StorefrontContext, filter: CatalogFilter) {
    store.view().set(CatalogView::Loading);
    spawn_local(async move {
        let view = ctx.catalog().load(&filter).await;
        store.view().set(view);
    });
}
