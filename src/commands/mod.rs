//! Browser Adapters
//!
//! The pieces of the storefront that touch the browser: HTTP through
//! `gloo-net`, the session in `localStorage`, and page navigation.

mod http;
mod navigation;
mod storage;

pub use http::GlooTransport;
pub use navigation::{current_route, navigate, navigate_after, set_document_language};
pub use storage::LocalStorageSessionStore;
