use crate::error::{ApiError, Service, TransportError};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self, service: Service) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::malformed(service, e))
    }

    /// Turns a non-success reply into an [`ApiError::Upstream`], preferring the
    /// `error.message` field Google APIs put in their error bodies.
    pub fn upstream_error(&self, service: Service, fallback: &str) -> ApiError {
        let message = serde_json::from_str::<ErrorEnvelope>(&self.body)
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        ApiError::Upstream { service, message }
    }

    /// Decodes a success body, or maps the failure into an [`ApiError`].
    pub fn into_result<T: DeserializeOwned>(
        self,
        service: Service,
        fallback: &str,
    ) -> Result<T, ApiError> {
        if self.ok() {
            self.json(service)
        } else {
            Err(self.upstream_error(service, fallback))
        }
    }
}

/// Seam between the API clients and the network. The browser build uses
/// [`GlooTransport`]; tests use a recording fake.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError>;

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

impl GlooTransport {
    async fn read(response: gloo_net::http::Response) -> Result<HttpReply, TransportError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read(response).await
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: &'static str,
        pub url: String,
        pub body: Option<Value>,
    }

    /// Replays queued replies in order and records every call it receives.
    #[derive(Default)]
    pub struct MockTransport {
        replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
        pub calls: RefCell<Vec<RecordedCall>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(HttpReply {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn reply_json(self, body: Value) -> Self {
            self.reply(200, &body.to_string())
        }

        pub fn fail(self, message: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(TransportError::Network(message.to_string())));
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn urls(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.url.clone()).collect()
        }

        fn next(&self, call: RecordedCall) -> Result<HttpReply, TransportError> {
            let url = call.url.clone();
            self.calls.borrow_mut().push(call);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected request to {url}"))
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
            self.next(RecordedCall {
                method: "GET",
                url: url.to_string(),
                body: None,
            })
        }

        async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError> {
            self.next(RecordedCall {
                method: "POST",
                url: url.to_string(),
                body: Some(body.clone()),
            })
        }
    }
}
