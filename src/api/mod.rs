//! Resource operations over the wallet HTTP API
//!
//! Every operation follows the same template: build the endpoint URL from a
//! fixed path and identifiers, pick the verb and body/query, run the call
//! through the [`Transport`], then decode the [`TransportResult`] into an
//! [`Outcome`]. Remote and transport failures are `Ok(Outcome::Failure(..))`;
//! the `Err` side is reserved for responses that cannot be decoded and
//! requests that cannot be built.
//!
//! ## Layout
//!
//! - **wallets**: list, get, create, delete, balance
//! - **addresses**: list with optional state filter
//! - **network**: network information
//! - **transactions**: get, list, send, cancel, fee estimation
//!
//! There is no retry, no caching and no shared mutable state. A `WalletApi`
//! is cheap to clone and safe to use from many tasks at once.

mod addresses;
mod network;
mod transactions;
mod wallets;

pub use transactions::TransactionQuery;

use crate::config::{ClientConfig, ConfigError};
use crate::envelope::{self, TransportResult};
use crate::errors::{ApiError, DecodeError};
use crate::metrics::{metrics, Timer};
use crate::outcome::Outcome;
use crate::structured_logging::StructuredLogger;
use crate::transport::{HttpTransport, Transport, TransportCall};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Result of every resource operation
pub type ApiResult<T> = Result<Outcome<T>, ApiError>;

type Decoder<T> = fn(&TransportResult) -> Result<Outcome<T>, DecodeError>;

/// Async wallet API client
#[derive(Debug, Clone)]
pub struct WalletApi {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl WalletApi {
    /// Client over HTTP using the configured timeout and user agent
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::from_shared(Arc::new(config), transport)
    }

    pub fn from_shared(config: Arc<ClientConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        self.config.endpoint(segments)
    }

    /// Execute `call` and decode a `T` from the success body
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        call: TransportCall,
    ) -> ApiResult<T> {
        self.dispatch(operation, call, envelope::decode::<T>).await
    }

    /// Execute `call` whose success body carries no data
    pub(crate) async fn call_ack(
        &self,
        operation: &'static str,
        call: TransportCall,
    ) -> ApiResult<()> {
        self.dispatch(operation, call, envelope::decode_ack).await
    }

    async fn dispatch<T>(
        &self,
        operation: &'static str,
        call: TransportCall,
        decoder: Decoder<T>,
    ) -> ApiResult<T> {
        let logger = StructuredLogger::new(operation);
        let timer = Timer::new();
        logger.log_request(call.method.as_str(), call.target().as_str());
        metrics()
            .requests_total
            .with_label_values(&[operation])
            .inc();

        let result = self.transport.execute(call).await;
        let latency_ms = timer.finish();

        match decoder(&result) {
            Ok(Outcome::Success(value)) => {
                logger.log_success(latency_ms);
                Ok(Outcome::Success(value))
            }
            Ok(Outcome::Failure(error)) => {
                if error.is_transport() {
                    metrics().transport_failures.inc();
                } else {
                    metrics().remote_failures.inc();
                }
                logger.log_failure(&error, latency_ms);
                Ok(Outcome::Failure(error))
            }
            Err(e) => {
                metrics().decode_errors.inc();
                logger.log_decode_error(&e);
                Err(e.into())
            }
        }
    }
}

/// JSON request body
pub(crate) fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(ApiError::Encode)
}
