//! Test Doubles
//!
//! A scripted transport that records every request it receives.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::gateway::{HttpResponse, HttpTransport};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Replies are consumed in order; running out is a transport error
#[derive(Debug, Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, reason: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn reply(&self, request: RecordedRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.reply(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            body: None,
        })
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, ApiError> {
        self.reply(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
        })
    }
}
