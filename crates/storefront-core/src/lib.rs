//! Storefront Core
//!
//! Target-independent logic behind the storefront pages: product catalog,
//! login, registration and the persisted session. The Leptos frontend only
//! binds these to markup; everything here runs (and is tested) natively.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod i18n;
pub mod routes;
pub mod session;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{LoginController, RegistrationController, SessionBadge, SubmitOutcome};
pub use catalog::{CatalogController, CatalogFilter, CatalogView, ProductCard};
pub use config::StorefrontConfig;
pub use domain::{Credentials, Product, ProductPage, Session, UserId};
pub use error::{ApiError, StoreError, ValidationError};
pub use gateway::{GatewayClient, HttpResponse, HttpTransport};
pub use i18n::{Language, Message};
pub use routes::Route;
pub use session::{MemorySessionStore, SessionStore, SESSION_KEY};
