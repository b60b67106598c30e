//! Submit Button Component
//!
//! Disabled with a loading label while a request is in flight.

use leptos::prelude::*;
use storefront_core::Message;

use crate::context::use_storefront;

#[component]
pub fn SubmitButton(
    id: &'static str,
    #[prop(into)] loading: Signal<bool>,
    idle: Message,
    busy: Message,
) -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <button type="submit" id=id class="submit-btn" disabled=move || loading.get()>
            <Show
                when=move || loading.get()
                fallback=move || view! { <span class="btn-text">{ctx.t(idle)}</span> }
            >
                <span class="btn-loading">{ctx.t(busy)}</span>
            </Show>
        </button>
    }
}
