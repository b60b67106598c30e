//! Search Bar Component
//!
//! Search box, search button and category select. The search term is only
//! applied on the button; changing the category reloads right away.

use leptos::prelude::*;
use storefront_core::catalog::CATEGORIES;
use storefront_core::{CatalogFilter, Message};

use crate::context::use_storefront;

#[component]
pub fn SearchBar(#[prop(into)] on_search: Callback<CatalogFilter>) -> impl IntoView {
    let ctx = use_storefront();

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let current_filter = move || CatalogFilter::new(category.get_untracked(), search.get_untracked());

    view! {
        <div class="search-bar">
            <input
                type="text"
                id="search-input"
                placeholder=ctx.t(Message::SearchPlaceholder)
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <button id="search-btn" on:click=move |_| on_search.run(current_filter())>
                {ctx.t(Message::Search)}
            </button>
            <select
                id="category-select"
                on:change=move |ev| {
                    set_category.set(event_target_value(&ev));
                    on_search.run(current_filter());
                }
            >
                <option value="">{ctx.t(Message::AllCategories)}</option>
                {CATEGORIES.iter().map(|name| view! {
                    <option value=*name>{*name}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
