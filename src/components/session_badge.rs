//! Session Badge Component
//!
//! Login/Logout button in the catalog header.

use leptos::prelude::*;
use storefront_core::SessionBadge;

use crate::commands::navigate;
use crate::context::use_storefront;

#[component]
pub fn SessionBadgeButton() -> impl IntoView {
    let ctx = use_storefront();
    let (badge, set_badge) = signal(SessionBadge::read(&ctx.sessions()));

    let on_click = move |_| {
        let store = ctx.sessions();
        match badge.get_untracked().click(&store) {
            Ok(route) => {
                set_badge.set(SessionBadge::read(&store));
                navigate(route);
            }
            Err(e) => log::error!("[SESSION] Logout failed: {}", e),
        }
    };

    view! {
        <button id="auth-btn" class=move || badge.get().css_class() on:click=on_click>
            {move || ctx.t(badge.get().label())}
        </button>
    }
}
