//! Product Grid Component
//!
//! Renders the catalog store's cards, or the empty-list message.

use leptos::prelude::*;
use storefront_core::{Message, ProductCard};

use crate::context::use_storefront;
use crate::store::{store_cards, use_catalog_store};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_storefront();
    let store = use_catalog_store();

    // Ids may be missing or repeated, so the index is part of the key
    let cards = move || store_cards(&store).into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div id="products-container" class="products-grid">
            <Show
                when=move || !store_cards(&store).is_empty()
                fallback=move || view! { <p class="no-products">{ctx.t(Message::NoProducts)}</p> }
            >
                <For
                    each=cards
                    key=|(index, card)| (*index, card.id.clone())
                    children=move |(_, card)| view! { <ProductCardView card=card /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn ProductCardView(card: ProductCard) -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <div class="product-card">
            <img src=card.image_src alt=card.image_alt />
            <h3>{card.title}</h3>
            <p>{card.description}</p>
            <p class="price">{card.price}</p>
            <button class="add-to-cart" data-id=card.id>
                {ctx.t(Message::AddToCart)}
            </button>
        </div>
    }
}
