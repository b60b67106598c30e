//! Page Navigation

use gloo_timers::future::TimeoutFuture;
use storefront_core::{Language, Route};

/// Page currently loaded, from `location.pathname`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Catalog)
}

/// Full page load of `route`
pub fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(route.href()) {
        log::error!("[NAV] Failed to open {}: {:?}", route.href(), e);
    }
}

pub async fn navigate_after(route: Route, delay_ms: u32) {
    if delay_ms > 0 {
        TimeoutFuture::new(delay_ms).await;
    }
    navigate(route);
}

/// `lang` and `dir` on `<html>`
pub fn set_document_language(lang: Language) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    let Some(root) = root else {
        log::warn!("[NAV] No document element to set language on");
        return;
    };
    if let Err(e) = root.set_attribute("lang", lang.code()) {
        log::error!("[NAV] Failed to set lang={}: {:?}", lang.code(), e);
    }
    if let Err(e) = root.set_attribute("dir", lang.dir()) {
        log::error!("[NAV] Failed to set dir={}: {:?}", lang.dir(), e);
    }
}
