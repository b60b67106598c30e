//! Gateway Client
//!
//! Typed access to the three storefront endpoints behind the `/api` prefix.
//! The actual HTTP call is delegated to an [`HttpTransport`] so the request
//! and response handling here is the same in the browser and in tests.

mod query;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Credentials, ProductPage, Session, UserId};
use crate::error::ApiError;

pub use query::ProductQuery;

pub const PRODUCTS_PATH: &str = "/products";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `error` or `message` from a JSON body, whichever is set first
    pub fn error_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        ["error", "message"].iter().find_map(|key| {
            value
                .get(*key)
                .and_then(Value::as_str)
                .filter(|msg| !msg.trim().is_empty())
                .map(str::to_string)
        })
    }
}

/// One HTTP round trip
///
/// Implementations return `Err(ApiError::Transport)` only when no response
/// was received; any status code is an `Ok`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;

    /// POST with a JSON body and `Content-Type: application/json`
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, ApiError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        (**self).get(url).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, ApiError> {
        (**self).post_json(url, body).await
    }
}

/// Client for the storefront endpoints
#[derive(Debug, Clone)]
pub struct GatewayClient<T> {
    transport: T,
    base: String,
}

impl<T: HttpTransport> GatewayClient<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base, path_and_query)
    }

    /// `GET /products?per_page=N[&category=C]`
    pub async fn products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        let url = self.url(&format!("{}{}", PRODUCTS_PATH, query.to_query_string()));
        log::info!("[GATEWAY] GET {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }

        ProductPage::from_json(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /auth/login`; a 2xx without a token is a decode error
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let url = self.url(LOGIN_PATH);
        log::info!("[GATEWAY] POST {} for {}", url, credentials.email);

        let response = self.transport.post_json(&url, &credentials_body(credentials)?).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }

        session_from_body(&response.body)
    }

    /// `POST /auth/register`; the success body is not used
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.url(REGISTER_PATH);
        log::info!("[GATEWAY] POST {} for {}", url, credentials.email);

        let response = self.transport.post_json(&url, &credentials_body(credentials)?).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        Ok(())
    }
}

fn credentials_body(credentials: &Credentials) -> Result<Value, ApiError> {
    serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))
}

fn status_error(response: &HttpResponse) -> ApiError {
    ApiError::Status {
        status: response.status,
        message: response.error_message(),
    }
}

fn session_from_body(body: &str) -> Result<Session, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let access_token = value
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Decode("login response has no access_token".to_string()))?;

    let user_id = match value.get("user_id") {
        Some(Value::Number(n)) => n.as_i64().map(UserId::Number),
        Some(Value::String(s)) => Some(UserId::Text(s.clone())),
        _ => None,
    };

    Ok(Session {
        user_id,
        access_token: access_token.to_string(),
    })
}
