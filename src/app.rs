//! Storefront App
//!
//! Picks the page from the URL; each page is a separate HTML entry point.

use leptos::prelude::*;
use storefront_core::{Route, StorefrontConfig};

use crate::commands::{current_route, set_document_language};
use crate::components::{CatalogPage, LoginPage, RegisterPage};
use crate::context::StorefrontContext;

#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::from_build_env();
    set_document_language(config.language);

    // Provide context to all children
    provide_context(StorefrontContext::new(config));

    let route = current_route();
    log::info!("[APP] Rendering {:?} page", route);

    match route {
        Route::Catalog => view! { <CatalogPage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
    }
}
