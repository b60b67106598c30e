//! Page Routes
//!
//! The storefront is three static pages; navigation is a full page load.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Login,
    Register,
}

impl Route {
    pub fn href(self) -> &'static str {
        match self {
            Route::Catalog => "index.html",
            Route::Login => "login.html",
            Route::Register => "register.html",
        }
    }

    /// Resolve the page from `location.pathname`; anything unknown is the catalog
    pub fn from_path(path: &str) -> Self {
        let page = path.rsplit('/').next().unwrap_or("");
        match page {
            "login.html" => Route::Login,
            "register.html" => Route::Register,
            _ => Route::Catalog,
        }
    }
}
