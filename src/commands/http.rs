//! Gateway Transport
//!
//! `fetch` via gloo-net. Any response, whatever its status, is handed back
//! to the core client; only a failed round trip is a transport error.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use storefront_core::{ApiError, HttpResponse, HttpTransport};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;
        read_response(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, ApiError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;
        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<HttpResponse, ApiError> {
    let status = response.status();
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("[HTTP] Could not read body of {} response from {}: {}", status, response.url(), e);
            String::new()
        }
    };
    Ok(HttpResponse::new(status, body))
}
