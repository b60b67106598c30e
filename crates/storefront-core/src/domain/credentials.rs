//! Credentials
//!
//! Body of both `/auth/login` and `/auth/register`. Registration collects a
//! name and phone too, but the auth service only accepts these two fields.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
