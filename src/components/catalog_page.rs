//! Catalog Page
//!
//! Header with the session badge, search bar, and the loading / error /
//! product grid area.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{CatalogFilter, Message};

use crate::components::{ProductGrid, SearchBar, SessionBadgeButton};
use crate::context::use_storefront;
use crate::store::{store_error, store_has_content, store_is_loading, store_reload, CatalogState};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_storefront();
    let store = Store::new(CatalogState::default());
    provide_context(store);

    // Initial load
    Effect::new(move |_| {
        store_reload(store, ctx, CatalogFilter::default());
    });

    let on_search = move |filter: CatalogFilter| store_reload(store, ctx, filter);
    // Retry always starts over without search or category
    let retry = move |_| store_reload(store, ctx, CatalogFilter::default());

    view! {
        <div class="catalog-page">
            <header class="catalog-header">
                <h1>"Storefront"</h1>
                <SessionBadgeButton />
            </header>

            <SearchBar on_search=on_search />

            <Show when=move || store_is_loading(&store)>
                <div id="loading" class="loading">{ctx.t(Message::Loading)}</div>
            </Show>

            {move || store_error(&store).map(|message| view! {
                <div id="error" class="error">
                    <p>{message}</p>
                    <button id="retry-btn" on:click=retry>{ctx.t(Message::Retry)}</button>
                </div>
            })}

            <Show when=move || store_has_content(&store)>
                <ProductGrid />
            </Show>
        </div>
    }
}
