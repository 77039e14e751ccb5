//! Transport call: one HTTP verb against one URL
//!
//! A call always yields a [`TransportResult`]. Non-success statuses and
//! transport errors are classified into a [`FailureEnvelope`] instead of being
//! raised, so the result codec sees every outcome through one channel.

use crate::config::{ClientConfig, ConfigError};
use crate::envelope::{FailureEnvelope, TransportResult, NO_PAYLOAD};
use crate::outcome::TRANSPORT_ERROR_CODE;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use std::fmt;

/// HTTP verbs used by the wallet API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn as_reqwest(&self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCall {
    pub method: HttpMethod,
    pub url: Url,
    /// JSON-encoded request body
    pub body: Option<String>,
    /// Query pairs appended to `url`
    pub query: Vec<(String, String)>,
}

impl TransportCall {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn delete(url: Url) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    pub fn post(url: Url, body: String) -> Self {
        Self::new(HttpMethod::Post, url).with_body(body)
    }

    pub fn put(url: Url, body: String) -> Self {
        Self::new(HttpMethod::Put, url).with_body(body)
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Final request URL with the query string applied
    pub fn target(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }

    /// Encoded query string, if any
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            self.target().query().map(str::to_string)
        }
    }

    /// Payload or query echoed into a failure envelope
    pub fn echo(&self) -> String {
        self.body
            .clone()
            .or_else(|| self.query_string())
            .unwrap_or_else(|| NO_PAYLOAD.to_string())
    }

    /// Envelope for a call the transport could not complete
    pub fn transport_failure(&self, message: impl fmt::Display) -> FailureEnvelope {
        let body = serde_json::json!({
            "code": TRANSPORT_ERROR_CODE,
            "message": message.to_string(),
        });
        FailureEnvelope::new(TRANSPORT_ERROR_CODE, body.to_string(), self.echo())
    }
}

/// Executes transport calls
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Perform the call and classify its result; never fails
    async fn execute(&self, call: TransportCall) -> TransportResult;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build an HTTP client honoring the configured timeout and user agent
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Use an existing client (shared connection pool, custom TLS)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, call: TransportCall) -> TransportResult {
        let mut request = self
            .client
            .request(call.method.as_reqwest(), call.target())
            .header(ACCEPT, "application/json");
        if let Some(body) = &call.body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(method = %call.method, url = %call.url, error = %e, "Transport error");
                return TransportResult::Failure(call.transport_failure(e));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(method = %call.method, url = %call.url, error = %e, "Failed to read response body");
                return TransportResult::Failure(call.transport_failure(e));
            }
        };

        tracing::trace!(method = %call.method, url = %call.url, status = %status.as_u16(), "Response received");

        if status.is_success() {
            TransportResult::Body(text)
        } else {
            TransportResult::Failure(FailureEnvelope::new(
                status.as_u16().to_string(),
                text,
                call.echo(),
            ))
        }
    }
}
