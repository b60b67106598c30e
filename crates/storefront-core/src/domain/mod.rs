//! Domain Layer
//!
//! Data exchanged with the gateway and kept in the browser.
//! Decoding is lenient: a malformed field becomes `None`, never an error.

mod credentials;
mod lenient;
mod product;
mod session;

pub use credentials::Credentials;
pub use product::{Product, ProductPage};
pub use session::{Session, UserId};
